//! The publish pipeline: validate, build both stores, record metadata.

use crate::error::{PublishError, PublishResult};
use chrono::{SecondsFormat, Utc};
use hangar_analytics::BuildReport;
use hangar_core::{file_size_mb, PublishMetadata, Snapshot};
use hangar_search::SearchReport;
use std::path::{Path, PathBuf};

/// Analytical store file name inside the publish directory.
pub const DUCKDB_FILE: &str = "registry.duckdb";

/// Search store file name inside the publish directory.
pub const SQLITE_FILE: &str = "owners.sqlite";

/// Metadata document path relative to the publish directory.
pub const METADATA_FILE: &str = "_meta/publish.json";

/// Options for one publish run.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Root data directory; the snapshot is expected at `<data_root>/publish`.
    pub data_root: PathBuf,
    /// Explicit snapshot date for the metadata document. Falls back to the
    /// normalize step's metadata, then to `"unknown"`.
    pub snapshot_date: Option<String>,
}

impl PublishOptions {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            snapshot_date: None,
        }
    }
}

/// Everything a publish run produced.
#[derive(Debug, Clone)]
pub struct PublishOutput {
    /// Directory holding both stores and the metadata document.
    pub publish_dir: PathBuf,
    pub duckdb_path: PathBuf,
    pub sqlite_path: PathBuf,
    pub analytics: BuildReport,
    pub search: SearchReport,
    pub metadata: PublishMetadata,
}

/// Run one publish: snapshot validation, analytical store, search store,
/// metadata document, in that order. The builders run sequentially; they
/// write disjoint files, so nothing here needs to overlap them.
pub fn publish(options: &PublishOptions) -> PublishResult<PublishOutput> {
    let publish_dir = options.data_root.join("publish");
    let snapshot = Snapshot::open(&publish_dir).map_err(PublishError::Prerequisite)?;

    log::info!("publishing snapshot from {}", publish_dir.display());

    let duckdb_path = publish_dir.join(DUCKDB_FILE);
    let sqlite_path = publish_dir.join(SQLITE_FILE);

    let analytics = hangar_analytics::build(&snapshot, &duckdb_path)?;
    let search = hangar_search::build(&snapshot, &sqlite_path)?;
    let metadata = record_metadata(&snapshot, options, &duckdb_path, &sqlite_path)?;

    Ok(PublishOutput {
        publish_dir,
        duckdb_path,
        sqlite_path,
        analytics,
        search,
        metadata,
    })
}

/// Assemble and write the provenance document for this run, overwriting
/// the previous run's document.
fn record_metadata(
    snapshot: &Snapshot,
    options: &PublishOptions,
    duckdb_path: &Path,
    sqlite_path: &Path,
) -> PublishResult<PublishMetadata> {
    let snapshot_date = options
        .snapshot_date
        .clone()
        .or_else(|| snapshot.snapshot_date())
        .unwrap_or_else(|| "unknown".to_string());

    let metadata = PublishMetadata {
        snapshot_date,
        published_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        duckdb_path: file_name(duckdb_path),
        sqlite_path: file_name(sqlite_path),
        duckdb_size_mb: file_size_mb(duckdb_path).map_err(PublishError::Metadata)?,
        sqlite_size_mb: file_size_mb(sqlite_path).map_err(PublishError::Metadata)?,
    };

    let path = snapshot.dir().join(METADATA_FILE);
    metadata.write(&path).map_err(PublishError::Metadata)?;
    log::info!("wrote publish metadata to {}", path.display());
    Ok(metadata)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
