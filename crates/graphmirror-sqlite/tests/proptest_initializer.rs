//! Property-based tests for the Layout Initializer over generated
//! schemas, each run against a fresh in-memory database.

use graphmirror_core::{FieldKind, Fieldname, Schema, TypeDecl, Typename};
use graphmirror_sqlite::initializer::initialize;
use graphmirror_sqlite::InitError;
use proptest::prelude::*;
use rusqlite::Connection;

#[derive(Debug, Clone)]
enum GenKind {
    Primitive,
    Node,
    Connection,
}

fn gen_kind() -> impl Strategy<Value = GenKind> {
    prop_oneof![
        Just(GenKind::Primitive),
        Just(GenKind::Node),
        Just(GenKind::Connection),
    ]
}

fn safe_field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn object_schema(typename: &str, field_names: Vec<String>, kinds: Vec<GenKind>) -> Schema {
    let mut fields = vec![(Fieldname::new("id"), FieldKind::Id)];
    for (name, kind) in field_names.into_iter().zip(kinds) {
        let kind = match kind {
            GenKind::Primitive => FieldKind::Primitive,
            GenKind::Node => FieldKind::Node(Typename::new("Other")),
            GenKind::Connection => FieldKind::Connection(Typename::new("Other")),
        };
        fields.push((Fieldname::new(name), kind));
    }
    Schema::new(vec![(
        Typename::new(typename),
        TypeDecl::Object { fields },
    )])
}

fn dump_schema(conn: &Connection) -> Vec<(String, String)> {
    let mut stmt = conn
        .prepare("SELECT name, sql FROM sqlite_master ORDER BY name")
        .unwrap();
    stmt.query_map([], |r| Ok((r.get(0)?, r.get::<_, Option<String>>(1)?.unwrap_or_default())))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property 1: idempotent re-init leaves the database bit-identical
    /// (here: schema-identical, which is what's observable from outside
    /// the engine) to its state after the first call.
    #[test]
    fn idempotent_reinit(
        field_names in prop::collection::vec(safe_field_name(), 0..6),
        kinds in prop::collection::vec(gen_kind(), 0..6),
    ) {
        let mut seen = std::collections::HashSet::new();
        let mut deduped = Vec::new();
        for name in field_names {
            if name != "id" && seen.insert(name.clone()) {
                deduped.push(name);
            }
        }
        let n = deduped.len().min(kinds.len());
        let schema = object_schema("Gen", deduped[..n].to_vec(), kinds[..n].to_vec());

        let mut conn = Connection::open_in_memory().unwrap();
        initialize(&mut conn, &schema).unwrap();
        let before = dump_schema(&conn);

        initialize(&mut conn, &schema).unwrap();
        let after = dump_schema(&conn);

        prop_assert_eq!(before, after);
    }

    /// Property 3: all-or-nothing init -- a fresh database that fails
    /// to initialize ends up with no tables at all.
    #[test]
    fn all_or_nothing_on_failure(
        bad_typename in "[A-Za-z0-9_]{0,5}[^A-Za-z0-9_]{1,3}[A-Za-z0-9_]{0,5}",
    ) {
        let schema = Schema::new(vec![(
            Typename::new(bad_typename),
            TypeDecl::Object {
                fields: vec![(Fieldname::new("id"), FieldKind::Id)],
            },
        )]);

        let mut conn = Connection::open_in_memory().unwrap();
        let result = initialize(&mut conn, &schema);
        prop_assert!(result.is_err());

        let tables = dump_schema(&conn);
        prop_assert!(tables.is_empty());
    }

    /// Property 6: identifier safety blocks DDL for unsafe primitive
    /// field names too, not just typenames.
    #[test]
    fn unsafe_field_name_blocks_ddl(
        bad_field in "[A-Za-z0-9_]{0,5}[^A-Za-z0-9_]{1,3}[A-Za-z0-9_]{0,5}",
    ) {
        let schema = Schema::new(vec![(
            Typename::new("Gen"),
            TypeDecl::Object {
                fields: vec![
                    (Fieldname::new("id"), FieldKind::Id),
                    (Fieldname::new(bad_field), FieldKind::Primitive),
                ],
            },
        )]);

        let mut conn = Connection::open_in_memory().unwrap();
        let err = initialize(&mut conn, &schema).unwrap_err();
        prop_assert!(matches!(err, InitError::IdentifierUnsafe { .. }));
        prop_assert!(dump_schema(&conn).is_empty());
    }
}

/// Property 2: strict version gating -- two different schemas can't
/// both win init against the same database, and the second attempt
/// leaves the database exactly as the first left it.
#[test]
fn strict_version_gating_example() {
    let mut conn = Connection::open_in_memory().unwrap();
    let a = object_schema("Gen", vec!["a".to_string()], vec![GenKind::Primitive]);
    let b = object_schema(
        "Gen",
        vec!["a".to_string(), "b".to_string()],
        vec![GenKind::Primitive, GenKind::Primitive],
    );

    initialize(&mut conn, &a).unwrap();
    let before = dump_schema(&conn);

    let err = initialize(&mut conn, &b).unwrap_err();
    assert!(matches!(err, InitError::SchemaMismatch));

    assert_eq!(dump_schema(&conn), before);
}

/// Property 7: the transaction wrapper leaves the connection outside
/// any transaction whether the closure errors or succeeds.
#[test]
fn transaction_wrapper_leaves_no_open_transaction() {
    let mut conn = Connection::open_in_memory().unwrap();
    let schema = object_schema("Gen", vec!["a".to_string()], vec![GenKind::Primitive]);
    initialize(&mut conn, &schema).unwrap();
    assert!(conn.is_autocommit(), "connection must not be left mid-transaction after a successful init");

    let mismatched = object_schema(
        "Gen",
        vec!["a".to_string(), "b".to_string()],
        vec![GenKind::Primitive, GenKind::Primitive],
    );
    let _ = initialize(&mut conn, &mismatched);
    assert!(conn.is_autocommit(), "connection must not be left mid-transaction after a failed init");
}
