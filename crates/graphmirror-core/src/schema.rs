//! The Schema Model: an in-memory representation of a declared GraphQL
//! schema, closed by construction over a fixed set of type and field
//! kinds.
//!
//! `Typename` and `Fieldname` are plain, unvalidated wrappers here.
//! Whether a given name is safe to interpolate into SQL DDL is a
//! concern of the layout that mirrors the schema, not of the schema
//! model itself; see [`crate::identifier::is_sql_safe`].

use std::fmt;

/// The name of a GraphQL type as it appears in the declared schema.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Typename(String);

impl Typename {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Typename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Typename {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Typename {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Typename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The name of a field on a GraphQL object type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fieldname(String);

impl Fieldname {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fieldname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Fieldname {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Fieldname {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Fieldname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of a single field on an object type.
///
/// A closed sum type: there is no "unknown kind" to detect at runtime,
/// only these four. This is what makes the Schema Decomposer (see
/// `crate::decompose`) a total function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// The type's identifier field. Every object type has exactly one.
    Id,
    /// A scalar value owned by the object.
    Primitive,
    /// A single reference to another object of the given type.
    Node(Typename),
    /// A paginated, ordered reference to many objects of the given type.
    Connection(Typename),
}

/// A type declaration: either an object with named, kinded fields, or a
/// union over a fixed set of member type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    Object {
        /// Fields in declaration order. Order determines the order of
        /// the partitioned sequences produced by the decomposer.
        fields: Vec<(Fieldname, FieldKind)>,
    },
    Union {
        /// Member type names in declaration order.
        clauses: Vec<Typename>,
    },
}

/// The declared GraphQL schema: a mapping from type name to declaration.
///
/// Stored as an ordered association list rather than a `HashMap` so
/// that the decomposer's output order is a deterministic function of
/// the schema's construction order, as required by the partition
/// completeness and DDL-ordering contracts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    types: Vec<(Typename, TypeDecl)>,
}

impl Schema {
    /// Builds a schema from an ordered list of (name, declaration)
    /// pairs. Does not validate for duplicate names; a later entry for
    /// an already-seen name shadows earlier ones during lookup but both
    /// remain in iteration order.
    pub fn new(types: Vec<(Typename, TypeDecl)>) -> Self {
        Self { types }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Typename, TypeDecl)> {
        self.types.iter()
    }

    pub fn get(&self, name: &Typename) -> Option<&TypeDecl> {
        self.types
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, decl)| decl)
    }
}
