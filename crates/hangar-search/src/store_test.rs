//! Tests for the search database wrapper.

use crate::store::SearchDb;

#[test]
fn open_memory_succeeds() {
    let db = SearchDb::open_memory().unwrap();
    db.conn()
        .execute_batch("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1), (2);")
        .unwrap();
    assert_eq!(db.count("t").unwrap(), 2);
}

#[test]
fn open_file_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("owners.sqlite");
    assert!(!path.exists());
    let db = SearchDb::open(&path).unwrap();
    db.conn().execute_batch("CREATE TABLE t (id)").unwrap();
    db.close().unwrap();
    assert!(path.exists());
}

#[test]
fn object_exists_sees_tables_and_indexes() {
    let db = SearchDb::open_memory().unwrap();
    assert!(!db.object_exists("owners").unwrap());
    db.conn()
        .execute_batch("CREATE TABLE owners (owner_id INTEGER PRIMARY KEY, state_std TEXT)")
        .unwrap();
    db.conn()
        .execute_batch("CREATE INDEX idx_owners_state ON owners(state_std)")
        .unwrap();
    assert!(db.object_exists("owners").unwrap());
    assert!(db.object_exists("idx_owners_state").unwrap());
}

#[test]
fn fts5_module_available() {
    // The bundled SQLite must be compiled with FTS5.
    let db = SearchDb::open_memory().unwrap();
    db.conn()
        .execute_batch("CREATE VIRTUAL TABLE probe USING fts5(body)")
        .unwrap();
}
