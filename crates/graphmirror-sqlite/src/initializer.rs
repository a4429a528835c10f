//! The Layout Initializer: brings a SQLite database into a mirrored
//! state for a given [`Schema`], transactionally and idempotently.

use graphmirror_core::{canonical_meta_blob, decompose, Schema};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::InitError;
use crate::layout::{self, META_TABLE_DDL};
use crate::txn::in_transaction;

/// Initializes (or verifies) `conn` against `schema`.
///
/// - If the database has no `meta` row, this is a fresh database: the
///   structural tables, the per-object-type primitives tables, and the
///   `meta` row itself are created, all in one transaction.
/// - If the database already has a `meta` row whose blob matches the
///   canonical blob for `schema`, this is a no-op re-open: nothing is
///   created or altered.
/// - If the `meta` row's blob differs, initialization fails with
///   [`InitError::SchemaMismatch`] and nothing is changed.
pub fn initialize(conn: &mut Connection, schema: &Schema) -> Result<(), InitError> {
    let blob = canonical_meta_blob(schema);

    in_transaction(conn, |txn| {
        txn.execute(META_TABLE_DDL, [])?;

        let existing: Option<String> = txn
            .query_row("SELECT schema FROM meta WHERE zero = 0", [], |r| r.get(0))
            .optional()?;

        match existing {
            None => {
                info!("no existing meta row, initializing fresh layout");
                for ddl in layout::structural_table_ddl() {
                    txn.execute(ddl, [])?;
                }

                let info = decompose(schema);
                for (typename, object) in &info.object_types {
                    let ddl =
                        layout::primitives_table_ddl(typename, &object.primitive_field_names)?;
                    debug!(table = %layout::primitives_table_name(typename), "creating primitives table");
                    txn.execute(&ddl, [])?;
                }

                txn.execute("INSERT INTO meta (zero, schema) VALUES (0, ?1)", [&blob])?;
                Ok(())
            }
            Some(existing_blob) if existing_blob == blob => {
                debug!("existing meta row matches, no-op re-open");
                Ok(())
            }
            Some(_) => Err(InitError::SchemaMismatch),
        }
    })
}
