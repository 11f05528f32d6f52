//! Tests for the snapshot source model.

use crate::error::CoreError;
use crate::snapshot::{Snapshot, SNAPSHOT_TABLES};
use std::fs;
use std::path::Path;

/// Create an empty marker file for `table` in `dir`.
fn touch_table(dir: &Path, table: &str) {
    fs::write(dir.join(format!("{table}.parquet")), b"").unwrap();
}

#[test]
fn open_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("publish");
    let err = Snapshot::open(&missing).unwrap_err();
    assert!(matches!(err, CoreError::SnapshotNotFound { .. }), "{err}");
}

#[test]
fn open_without_aircraft_fails() {
    let dir = tempfile::tempdir().unwrap();
    touch_table(dir.path(), "owners");
    let err = Snapshot::open(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::SnapshotIncomplete { .. }), "{err}");
}

#[test]
fn open_with_aircraft_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    touch_table(dir.path(), "aircraft");
    let snapshot = Snapshot::open(dir.path()).unwrap();
    assert_eq!(snapshot.dir(), dir.path());
    assert!(snapshot.has_table("aircraft"));
    assert!(!snapshot.has_table("engines"));
}

#[test]
fn table_path_uses_parquet_extension() {
    let dir = tempfile::tempdir().unwrap();
    touch_table(dir.path(), "aircraft");
    let snapshot = Snapshot::open(dir.path()).unwrap();
    for table in SNAPSHOT_TABLES {
        assert_eq!(
            snapshot.table_path(table),
            dir.path().join(format!("{table}.parquet"))
        );
    }
}

#[test]
fn snapshot_date_read_from_normalize_meta() {
    let dir = tempfile::tempdir().unwrap();
    touch_table(dir.path(), "aircraft");
    let meta_dir = dir.path().join("_meta");
    fs::create_dir_all(&meta_dir).unwrap();
    fs::write(
        meta_dir.join("normalize.json"),
        r#"{"snapshot_date": "2024-01-15", "row_counts": {"aircraft": 2}}"#,
    )
    .unwrap();

    let snapshot = Snapshot::open(dir.path()).unwrap();
    assert_eq!(snapshot.snapshot_date().as_deref(), Some("2024-01-15"));
}

#[test]
fn snapshot_date_absent_when_no_meta() {
    let dir = tempfile::tempdir().unwrap();
    touch_table(dir.path(), "aircraft");
    let snapshot = Snapshot::open(dir.path()).unwrap();
    assert_eq!(snapshot.snapshot_date(), None);
}

#[test]
fn snapshot_date_absent_when_meta_malformed() {
    let dir = tempfile::tempdir().unwrap();
    touch_table(dir.path(), "aircraft");
    let meta_dir = dir.path().join("_meta");
    fs::create_dir_all(&meta_dir).unwrap();
    fs::write(meta_dir.join("normalize.json"), "not json").unwrap();

    let snapshot = Snapshot::open(dir.path()).unwrap();
    assert_eq!(snapshot.snapshot_date(), None);
}
