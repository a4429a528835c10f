//! Errors raised while bringing a database into a mirrored state.

use thiserror::Error;

/// Everything that can go wrong initializing or re-opening a mirrored
/// database. This is the only error type in the mirror's public API --
/// the pure `graphmirror-core` crate has no fallible mirror-domain
/// operation of its own.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InitError {
    /// A typename or primitive field name is not safe to interpolate
    /// into DDL. Raised before (or rolled back with) any DDL.
    #[error("{context} '{value}' is not safe to use in a table or column name (must match ^[A-Za-z0-9_]+$)")]
    IdentifierUnsafe { context: &'static str, value: String },

    /// The database's `meta` row names a different (format version,
    /// schema) pair than the one being initialized with.
    #[error("database was initialized with a different schema (format version mismatch or schema changed)")]
    SchemaMismatch,

    /// The underlying SQLite engine reported an error.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
