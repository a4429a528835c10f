//! The canonical metadata blob: a byte-stable serialization of
//! `{version, schema}` used to gate re-initialization against the
//! database's `meta` row.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::schema::{FieldKind, Schema, TypeDecl};

/// The format-compatibility token. Bump this on any change to the
/// decomposition or the relational layout it produces; any such change
/// makes the new build incompatible with databases initialized by the
/// old one, and incompatibility must be loud, not silent.
pub const FORMAT_VERSION: &str = "MIRROR_v1";

#[derive(Serialize)]
struct CanonicalMeta {
    version: &'static str,
    schema: BTreeMap<String, CanonicalTypeDecl>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum CanonicalTypeDecl {
    Object {
        fields: BTreeMap<String, CanonicalFieldKind>,
    },
    Union {
        // The schema model's union clauses are a *set* of member type
        // names ("mapping Typename -> unit"); membership, not
        // declaration order, is what must match for compatibility.
        clauses: BTreeSet<String>,
    },
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum CanonicalFieldKind {
    Id,
    Primitive,
    Node { target: String },
    Connection { target: String },
}

impl From<&FieldKind> for CanonicalFieldKind {
    fn from(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Id => CanonicalFieldKind::Id,
            FieldKind::Primitive => CanonicalFieldKind::Primitive,
            FieldKind::Node(target) => CanonicalFieldKind::Node {
                target: target.to_string(),
            },
            FieldKind::Connection(target) => CanonicalFieldKind::Connection {
                target: target.to_string(),
            },
        }
    }
}

fn canonical_type_decl(decl: &TypeDecl) -> CanonicalTypeDecl {
    match decl {
        TypeDecl::Object { fields } => {
            let mut map = BTreeMap::new();
            for (name, kind) in fields {
                map.insert(name.to_string(), CanonicalFieldKind::from(kind));
            }
            CanonicalTypeDecl::Object { fields: map }
        }
        TypeDecl::Union { clauses } => CanonicalTypeDecl::Union {
            clauses: clauses.iter().map(|c| c.to_string()).collect(),
        },
    }
}

/// Computes the canonical metadata blob for `schema`: sorted keys, no
/// insignificant whitespace, byte-stable under reordering of the
/// schema's types, fields, or union clauses.
///
/// `schema` is serialized through an intermediate `BTreeMap`-based
/// shadow of closed, string/enum-only types, so `serde_json::to_string`
/// on it cannot fail (no non-UTF-8 map keys, no floats, no cycles);
/// this function is total.
pub fn canonical_meta_blob(schema: &Schema) -> String {
    let mut types = BTreeMap::new();
    for (name, decl) in schema.iter() {
        types.insert(name.to_string(), canonical_type_decl(decl));
    }
    let meta = CanonicalMeta {
        version: FORMAT_VERSION,
        schema: types,
    };
    serde_json::to_string(&meta).expect("canonical schema value tree is always serializable")
}
