//! Tests for the analytical database wrapper.

use crate::store::AnalyticsDb;

#[test]
fn open_memory_succeeds() {
    let db = AnalyticsDb::open_memory().unwrap();
    db.execute("CREATE TABLE t AS SELECT 1 AS id").unwrap();
    assert_eq!(db.count("t").unwrap(), 1);
}

#[test]
fn open_file_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.duckdb");
    assert!(!path.exists());
    let db = AnalyticsDb::open(&path).unwrap();
    db.close().unwrap();
    assert!(path.exists());
}

#[test]
fn table_exists_reflects_schema() {
    let db = AnalyticsDb::open_memory().unwrap();
    assert!(!db.table_exists("aircraft").unwrap());
    db.execute("CREATE TABLE aircraft AS SELECT 'N100' AS n_number")
        .unwrap();
    assert!(db.table_exists("aircraft").unwrap());
}

#[test]
fn execute_reports_failing_sql() {
    let db = AnalyticsDb::open_memory().unwrap();
    let err = db.execute("SELECT * FROM no_such_table").unwrap_err();
    assert!(err.to_string().contains("[A002]"), "{err}");
}
