//! The transaction wrapper around an initialization or mutation.
//!
//! `rusqlite::Connection::transaction` already gives us the behavior
//! the mirror needs: a `BEGIN` on construction, a `COMMIT` only if the
//! caller explicitly asks for one, and an automatic `ROLLBACK` on drop
//! otherwise -- including when the closure returns an error or panics
//! unwinds through it. That subsumes the lenient "exit state" contract:
//! there is no path out of `in_transaction` that leaves the connection
//! mid-transaction.

use rusqlite::Connection;

use crate::error::InitError;

/// Runs `f` inside a transaction, committing if it returns `Ok` and
/// rolling back otherwise (including on early return via `?`).
pub fn in_transaction<T>(
    conn: &mut Connection,
    f: impl FnOnce(&rusqlite::Transaction<'_>) -> Result<T, InitError>,
) -> Result<T, InitError> {
    let txn = conn.transaction()?;
    let result = f(&txn)?;
    txn.commit()?;
    Ok(result)
}
