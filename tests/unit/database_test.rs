//! Unit tests for the LinkPad database layer (connection + migrations).

use linkpad::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use linkpad::database::Database;

#[test]
fn test_open_in_memory_succeeds() {
    assert!(Database::open_in_memory().is_ok());
}

#[test]
fn test_migrations_create_local_storage_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='local_storage'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists, "local_storage table should exist after migrations");
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_reopen_file_keeps_schema_version() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("linkpad.db");

    drop(Database::open(&path).unwrap());
    let db = Database::open(&path).unwrap();

    let rows: i32 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, CURRENT_SCHEMA_VERSION);
}
