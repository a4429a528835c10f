//! The Schema Model, the Schema Decomposer, and the canonical metadata
//! blob for the GraphQL object graph mirror.
//!
//! Everything in this crate is pure: no database handle, no I/O. The
//! layout this schema mirrors into a relational store lives in
//! `graphmirror-sqlite`, which depends on this crate.

pub mod decompose;
pub mod identifier;
pub mod meta;
pub mod schema;

pub use decompose::{decompose, ObjectInfo, SchemaInfo, UnionInfo};
pub use identifier::is_sql_safe;
pub use meta::{canonical_meta_blob, FORMAT_VERSION};
pub use schema::{FieldKind, Fieldname, Schema, TypeDecl, Typename};
