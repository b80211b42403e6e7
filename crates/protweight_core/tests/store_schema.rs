use protweight_core::store::SCHEMA_VERSION;
use protweight_core::{open_store, open_store_in_memory, StoreError};
use rusqlite::Connection;

fn insert_raw(
    conn: &Connection,
    name: Option<&str>,
    sequence: Option<&str>,
) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO proteins (name, sequence) VALUES (?1, ?2);",
        rusqlite::params![name, sequence],
    )
}

#[test]
fn fresh_store_gets_proteins_table_and_version() {
    let conn = open_store_in_memory().unwrap();

    let version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);

    let columns: Vec<String> = conn
        .prepare("SELECT name FROM pragma_table_info('proteins') ORDER BY cid;")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(columns, vec!["id", "name", "sequence", "description"]);
}

#[test]
fn name_longer_than_255_chars_is_refused_by_the_table() {
    let conn = open_store_in_memory().unwrap();

    insert_raw(&conn, Some("N".repeat(255).as_str()), Some("AC")).unwrap();
    assert!(insert_raw(&conn, Some("N".repeat(256).as_str()), Some("AC")).is_err());
}

#[test]
fn name_and_sequence_are_required_description_is_not() {
    let conn = open_store_in_memory().unwrap();

    assert!(insert_raw(&conn, None, Some("AC")).is_err());
    assert!(insert_raw(&conn, Some("x"), None).is_err());

    insert_raw(&conn, Some("x"), Some("AC")).unwrap();
    let description: Option<String> = conn
        .query_row("SELECT description FROM proteins;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(description, None);
}

#[test]
fn reopening_a_store_keeps_its_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proteins.db");

    {
        let conn = open_store(&path).unwrap();
        insert_raw(&conn, Some("1ABC"), Some("ACDE")).unwrap();
    }

    let conn = open_store(&path).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM proteins;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn store_from_a_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("newer.db");
    Connection::open(&path)
        .unwrap()
        .pragma_update(None, "user_version", SCHEMA_VERSION + 1)
        .unwrap();

    let err = open_store(&path).unwrap_err();

    assert!(matches!(err, StoreError::SchemaTooNew { found } if found == SCHEMA_VERSION + 1));
}
