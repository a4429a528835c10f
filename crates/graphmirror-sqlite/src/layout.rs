//! Pure functions compiling the relational layout to SQLite DDL.
//!
//! No I/O, no side effects: every function here returns strings (or
//! validates identifiers) and nothing else. The transaction that
//! actually runs this DDL lives in [`crate::initializer`].

use graphmirror_core::{is_sql_safe, Fieldname, Typename};

use crate::error::InitError;

/// `CREATE TABLE IF NOT EXISTS` for the singleton `meta` row. Safe to
/// run on every initialization attempt, including re-opens.
pub const META_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS meta (\
    zero INTEGER PRIMARY KEY CHECK (zero = 0), \
    schema TEXT NOT NULL\
)";

/// The structural tables and their indices, in the exact order
/// required by their foreign-key dependencies: `updates`, `objects`,
/// `links` (+ index), `connections` (+ index), `connection_entries`
/// (+ index). Only run once, the first time a database is initialized.
pub fn structural_table_ddl() -> Vec<&'static str> {
    vec![
        "CREATE TABLE updates (\
            id INTEGER PRIMARY KEY, \
            time_epoch_millis INTEGER NOT NULL\
        )",
        "CREATE TABLE objects (\
            id TEXT PRIMARY KEY, \
            typename TEXT NOT NULL, \
            last_update INTEGER REFERENCES updates(id)\
        )",
        "CREATE TABLE links (\
            id INTEGER PRIMARY KEY, \
            parent_id TEXT NOT NULL REFERENCES objects(id), \
            fieldname TEXT NOT NULL, \
            child_id TEXT REFERENCES objects(id)\
        )",
        "CREATE UNIQUE INDEX links_parent_fieldname ON links(parent_id, fieldname)",
        "CREATE TABLE connections (\
            id INTEGER PRIMARY KEY, \
            object_id TEXT NOT NULL REFERENCES objects(id), \
            fieldname TEXT NOT NULL, \
            last_update INTEGER REFERENCES updates(id), \
            total_count INTEGER, \
            has_next_page INTEGER, \
            end_cursor TEXT, \
            CHECK ((last_update IS NULL) = (total_count IS NULL)), \
            CHECK ((last_update IS NULL) = (has_next_page IS NULL)), \
            CHECK ((last_update IS NULL) <= (end_cursor IS NULL))\
        )",
        "CREATE UNIQUE INDEX connections_object_fieldname ON connections(object_id, fieldname)",
        "CREATE TABLE connection_entries (\
            id INTEGER PRIMARY KEY, \
            connection_id INTEGER NOT NULL REFERENCES connections(id), \
            idx INTEGER NOT NULL, \
            child_id TEXT NOT NULL REFERENCES objects(id)\
        )",
        "CREATE UNIQUE INDEX connection_entries_connection_idx ON connection_entries(connection_id, idx)",
    ]
}

/// The table name for an object type's primitive payload table.
pub fn primitives_table_name(typename: &Typename) -> String {
    format!("primitives_{typename}")
}

/// Compiles the `CREATE TABLE` statement for an object type's
/// primitives table, validating that the typename and every primitive
/// field name are safe to interpolate into DDL.
///
/// Column order follows `primitive_fields`' order, which the caller is
/// expected to have taken from [`graphmirror_core::ObjectInfo`]'s
/// `primitive_field_names` (i.e. field-declaration order).
pub fn primitives_table_ddl(
    typename: &Typename,
    primitive_fields: &[Fieldname],
) -> Result<String, InitError> {
    if !is_sql_safe(typename.as_str()) {
        return Err(InitError::IdentifierUnsafe {
            context: "object typename",
            value: typename.to_string(),
        });
    }
    for field in primitive_fields {
        if !is_sql_safe(field.as_str()) {
            return Err(InitError::IdentifierUnsafe {
                context: "primitive field name",
                value: field.to_string(),
            });
        }
    }

    let table = primitives_table_name(typename);
    let mut columns = vec!["id TEXT PRIMARY KEY NOT NULL REFERENCES objects(id)".to_string()];
    for field in primitive_fields {
        columns.push(format!("\"{field}\""));
    }
    Ok(format!("CREATE TABLE {table} ({})", columns.join(", ")))
}
