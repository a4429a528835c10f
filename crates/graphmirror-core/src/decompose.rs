//! The Schema Decomposer: derives a [`SchemaInfo`] from a [`Schema`].
//!
//! Pure and total. `TypeDecl` and `FieldKind` are closed enums, so every
//! case this function can see is handled by a match arm -- there is no
//! "unknown variant" failure mode to check for at runtime, only at
//! compile time via exhaustiveness.

use crate::schema::{FieldKind, Fieldname, Schema, TypeDecl, Typename};

/// The decomposed view of a single object type: its full field list,
/// plus the same fields partitioned into three disjoint, ordered
/// sequences by [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectInfo {
    pub fields: Vec<(Fieldname, FieldKind)>,
    pub primitive_field_names: Vec<Fieldname>,
    pub link_field_names: Vec<Fieldname>,
    pub connection_field_names: Vec<Fieldname>,
}

/// The decomposed view of a single union type: its member clauses, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnionInfo {
    pub clauses: Vec<Typename>,
}

/// The decomposed view of an entire schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaInfo {
    pub object_types: Vec<(Typename, ObjectInfo)>,
    pub union_types: Vec<(Typename, UnionInfo)>,
}

impl SchemaInfo {
    pub fn object(&self, name: &Typename) -> Option<&ObjectInfo> {
        self.object_types
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, info)| info)
    }

    pub fn union(&self, name: &Typename) -> Option<&UnionInfo> {
        self.union_types
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, info)| info)
    }
}

/// Decomposes a [`Schema`] into a [`SchemaInfo`].
///
/// For each object type, partitions its fields into primitive/link/
/// connection sequences in field-declaration order; the ID field is
/// dropped from all three. For each union type, records its member
/// clauses in declaration order.
pub fn decompose(schema: &Schema) -> SchemaInfo {
    let mut object_types = Vec::new();
    let mut union_types = Vec::new();

    for (name, decl) in schema.iter() {
        match decl {
            TypeDecl::Object { fields } => {
                let mut info = ObjectInfo::default();
                info.fields = fields.clone();
                for (field_name, kind) in fields {
                    match kind {
                        FieldKind::Id => {}
                        FieldKind::Primitive => {
                            info.primitive_field_names.push(field_name.clone())
                        }
                        FieldKind::Node(_) => info.link_field_names.push(field_name.clone()),
                        FieldKind::Connection(_) => {
                            info.connection_field_names.push(field_name.clone())
                        }
                    }
                }
                object_types.push((name.clone(), info));
            }
            TypeDecl::Union { clauses } => {
                union_types.push((
                    name.clone(),
                    UnionInfo {
                        clauses: clauses.clone(),
                    },
                ));
            }
        }
    }

    SchemaInfo {
        object_types,
        union_types,
    }
}
