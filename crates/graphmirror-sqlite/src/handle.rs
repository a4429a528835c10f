//! The Mirror Handle: an opened, schema-checked connection to a
//! mirrored database.

use graphmirror_core::Schema;
use rusqlite::Connection;

use crate::error::InitError;
use crate::initializer;

/// A SQLite connection that has been brought into (or verified to
/// already be in) a mirrored state for a particular [`Schema`].
///
/// Construction is the only fallible operation; once built, the
/// handle's `schema` is guaranteed to match what is on disk.
pub struct MirrorHandle {
    conn: Connection,
    schema: Schema,
}

impl MirrorHandle {
    /// Opens `conn` against `schema`, initializing a fresh database or
    /// verifying a matching existing one. See [`initializer::initialize`]
    /// for the exact fresh/no-op/mismatch semantics.
    pub fn open(mut conn: Connection, schema: Schema) -> Result<Self, InitError> {
        initializer::initialize(&mut conn, &schema)?;
        Ok(Self { conn, schema })
    }

    /// The schema this handle was opened with.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Borrows the underlying connection for direct querying. The
    /// mirror's read/write operations over `objects`/`links`/
    /// `connections`/`primitives_*` are intentionally out of scope here;
    /// see the module-level docs.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Mutably borrows the underlying connection.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmirror_core::{FieldKind, Fieldname, TypeDecl, Typename};

    fn issue_schema() -> Schema {
        Schema::new(vec![(
            Typename::new("Issue"),
            TypeDecl::Object {
                fields: vec![(Fieldname::new("id"), FieldKind::Id)],
            },
        )])
    }

    #[test]
    fn open_on_fresh_memory_db_succeeds() {
        let conn = Connection::open_in_memory().unwrap();
        let handle = MirrorHandle::open(conn, issue_schema()).unwrap();
        assert_eq!(handle.schema().len(), 1);
    }

    #[test]
    fn open_with_mismatched_schema_fails() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE meta (zero INTEGER PRIMARY KEY CHECK (zero = 0), schema TEXT NOT NULL);\
             INSERT INTO meta (zero, schema) VALUES (0, 'not a real blob');",
        )
        .unwrap();
        let err = MirrorHandle::open(conn, issue_schema()).unwrap_err();
        assert!(matches!(err, InitError::SchemaMismatch));
    }

    #[test]
    fn connection_mut_allows_issuing_queries() {
        let conn = Connection::open_in_memory().unwrap();
        let mut handle = MirrorHandle::open(conn, issue_schema()).unwrap();
        let count: i64 = handle
            .connection_mut()
            .query_row("SELECT COUNT(*) FROM objects", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
