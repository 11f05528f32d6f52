//! Publish metadata document.
//!
//! One JSON document per publish run, overwritten each run. Ties the two
//! published stores back to the snapshot they were built from.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Provenance record of one publish run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishMetadata {
    /// Date of the source snapshot, or `"unknown"`.
    pub snapshot_date: String,
    /// ISO-8601 UTC timestamp of the run.
    pub published_at: String,
    /// File name of the analytical store.
    pub duckdb_path: String,
    /// File name of the search store.
    pub sqlite_path: String,
    pub duckdb_size_mb: f64,
    pub sqlite_size_mb: f64,
}

impl PublishMetadata {
    /// Write the document to `path` as pretty-printed JSON, replacing any
    /// previous run's document. Parent directories are created as needed.
    pub fn write(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::MetadataWrite {
                path: path.display().to_string(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| CoreError::MetadataWrite {
            path: path.display().to_string(),
            source,
        })
    }

    /// Read a previously written document.
    pub fn read(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Size of the file at `path` in megabytes, rounded to two decimals.
pub fn file_size_mb(path: &Path) -> CoreResult<f64> {
    let bytes = std::fs::metadata(path)?.len();
    Ok((bytes as f64 / 1024.0 / 1024.0 * 100.0).round() / 100.0)
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
