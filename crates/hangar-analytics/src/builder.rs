//! Build the analytical store from a snapshot.
//!
//! Loads each snapshot table verbatim into a fresh DuckDB database, derives
//! the per-registration `owners_summary` rollup, and creates lookup indexes.
//! Full-rebuild semantics: the database is built in a sibling temporary file
//! and renamed over the target only once every step has succeeded, so a
//! failed build never leaves a corrupt file at the canonical path.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::store::AnalyticsDb;
use hangar_core::{Snapshot, SNAPSHOT_TABLES};
use std::path::{Path, PathBuf};

/// Row count for one loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCount {
    pub table: String,
    pub rows: usize,
}

/// What the analytical build produced.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Tables loaded from the snapshot, with row counts, in load order.
    pub loaded: Vec<TableCount>,
    /// Expected tables whose Parquet file was absent.
    pub skipped: Vec<String>,
    /// Rows in the derived `owners_summary` table.
    pub summary_rows: usize,
}

/// Lookup indexes created after the load: `(name, table, column)`.
///
/// `n_number` indexes serve registration lookups; the `mfr_mdl_code` and
/// `engine_code` indexes serve joins to the reference tables.
const INDEXES: [(&str, &str, &str); 6] = [
    ("idx_aircraft_n_number", "aircraft", "n_number"),
    ("idx_registrations_n_number", "registrations", "n_number"),
    ("idx_owners_n_number", "owners", "n_number"),
    ("idx_owners_summary_n_number", "owners_summary", "n_number"),
    ("idx_aircraft_mfr_mdl_code", "aircraft", "mfr_mdl_code"),
    ("idx_aircraft_engine_code", "aircraft", "engine_code"),
];

/// Build the analytical database for `snapshot` at `target`.
///
/// Any existing database at `target` is replaced. A missing optional table
/// is skipped with a warning; a missing `owners` table is fatal because
/// `owners_summary` cannot be derived without it.
pub fn build(snapshot: &Snapshot, target: &Path) -> AnalyticsResult<BuildReport> {
    let tmp = tmp_path(target);
    remove_stale(&tmp)?;

    let db = AnalyticsDb::open(&tmp)?;
    let report = populate(&db, snapshot)?;
    db.close()?;

    replace(&tmp, target)?;
    log::info!("analytical store written to {}", target.display());
    Ok(report)
}

/// Load all tables, derive `owners_summary`, and create indexes on an open
/// database.
pub fn populate(db: &AnalyticsDb, snapshot: &Snapshot) -> AnalyticsResult<BuildReport> {
    let mut report = BuildReport::default();

    for table in SNAPSHOT_TABLES {
        let path = snapshot.table_path(table);
        if !path.exists() {
            log::warn!("{} not found, skipping {table}", path.display());
            report.skipped.push(table.to_string());
            continue;
        }
        db.execute(&format!(
            "CREATE TABLE {table} AS SELECT * FROM read_parquet('{}')",
            sql_path(&path),
        ))?;
        let rows = db.count(table)?;
        log::info!("loaded {table}: {rows} rows");
        report.loaded.push(TableCount {
            table: table.to_string(),
            rows,
        });
    }

    report.summary_rows = create_owners_summary(db)?;

    for (name, table, column) in INDEXES {
        if db.table_exists(table)? {
            db.execute(&format!("CREATE INDEX {name} ON {table}({column})"))?;
        }
    }

    Ok(report)
}

/// Derive the per-registration owner rollup.
///
/// One row per registration present in `owners`: owner count, '; '-joined
/// standardized names (ordered by owner_id so reruns are deterministic),
/// and whether any owner's type code is a trust type (2, 4, or 5).
/// Registrations with no owner rows get no summary row.
fn create_owners_summary(db: &AnalyticsDb) -> AnalyticsResult<usize> {
    if !db.table_exists("owners")? {
        return Err(AnalyticsError::MissingInput {
            table: "owners".to_string(),
        });
    }
    db.execute(
        "CREATE TABLE owners_summary AS \
         SELECT n_number, \
                COUNT(*) AS owner_count, \
                STRING_AGG(owner_name_std, '; ' ORDER BY owner_id) AS owner_names_concat, \
                BOOL_OR(owner_type IN ('2', '4', '5')) AS any_trust_flag \
         FROM owners \
         GROUP BY n_number",
    )?;
    let rows = db.count("owners_summary")?;
    log::info!("created owners_summary: {rows} rows");
    Ok(rows)
}

/// Sibling temporary path used while building.
fn tmp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map_or_else(|| "registry.duckdb".into(), |n| n.to_os_string());
    name.push(".tmp");
    target.with_file_name(name)
}

/// Delete a leftover temporary file from a previously killed run.
fn remove_stale(tmp: &Path) -> AnalyticsResult<()> {
    if tmp.exists() {
        std::fs::remove_file(tmp).map_err(|source| AnalyticsError::Replace {
            path: tmp.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

/// Move the finished build over the canonical path.
fn replace(tmp: &Path, target: &Path) -> AnalyticsResult<()> {
    std::fs::rename(tmp, target).map_err(|source| AnalyticsError::Replace {
        path: target.display().to_string(),
        source,
    })
}

/// Escape a path for embedding in a single-quoted SQL literal.
fn sql_path(path: &Path) -> String {
    path.display().to_string().replace('\'', "''")
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
