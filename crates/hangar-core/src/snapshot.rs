//! Snapshot source model.
//!
//! A snapshot is a directory of Parquet files produced by the upstream
//! normalize step, one file per logical table, plus optional run metadata
//! in `_meta/normalize.json`. The publish pipeline only reads it.

use crate::error::{CoreError, CoreResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Logical tables a snapshot may contain, in load order.
pub const SNAPSHOT_TABLES: [&str; 5] = [
    "aircraft",
    "registrations",
    "owners",
    "aircraft_make_model",
    "engines",
];

/// The table that must be present for the snapshot to be publishable at all.
pub const REQUIRED_TABLE: &str = "aircraft";

/// Fields read from the normalize step's metadata document.
#[derive(Debug, Deserialize)]
struct NormalizeMeta {
    snapshot_date: Option<String>,
}

/// A validated snapshot directory.
#[derive(Debug, Clone)]
pub struct Snapshot {
    dir: PathBuf,
}

impl Snapshot {
    /// Open `dir` as a snapshot, validating that it exists and contains at
    /// least the `aircraft` table.
    pub fn open(dir: &Path) -> CoreResult<Self> {
        if !dir.exists() {
            return Err(CoreError::SnapshotNotFound {
                path: dir.display().to_string(),
            });
        }
        let snapshot = Self {
            dir: dir.to_path_buf(),
        };
        if !snapshot.has_table(REQUIRED_TABLE) {
            return Err(CoreError::SnapshotIncomplete {
                path: dir.display().to_string(),
                table: REQUIRED_TABLE.to_string(),
            });
        }
        Ok(snapshot)
    }

    /// Directory holding the snapshot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the Parquet file backing `table`, whether or not it exists.
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.parquet"))
    }

    /// Whether the Parquet file for `table` is present.
    pub fn has_table(&self, table: &str) -> bool {
        self.table_path(table).exists()
    }

    /// Snapshot date recorded by the normalize step, if readable.
    ///
    /// Absent or malformed normalize metadata is not an error; the caller
    /// falls back to `"unknown"`.
    pub fn snapshot_date(&self) -> Option<String> {
        let meta_path = self.dir.join("_meta").join("normalize.json");
        let raw = std::fs::read_to_string(meta_path).ok()?;
        let meta: NormalizeMeta = serde_json::from_str(&raw).ok()?;
        meta.snapshot_date
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
