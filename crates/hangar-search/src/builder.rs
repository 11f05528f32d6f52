//! Build the owner-search store from a snapshot.
//!
//! Projects the search-relevant owner fields into a fresh SQLite database
//! and builds an FTS5 index over them. The index is external-content: it
//! carries no duplicate copy of the rows, and every index entry is
//! addressed by the same owner id that keys the base table, so the two can
//! never diverge in identity. Built in a sibling temporary file and renamed
//! over the target on success, like the analytical store.

use crate::error::{SearchError, SearchResult};
use crate::store::SearchDb;
use hangar_core::Snapshot;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One owner row as read from the snapshot.
///
/// `owner_id` is optional here only so a NULL in the source surfaces as an
/// integrity error instead of a driver error.
#[derive(Debug, Clone)]
pub struct OwnerRow {
    pub owner_id: Option<i64>,
    pub n_number: Option<String>,
    pub owner_name_std: Option<String>,
    pub address_all_std: Option<String>,
    pub city_std: Option<String>,
    pub state_std: Option<String>,
    pub zip5: Option<String>,
}

/// What the search build produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Owner rows inserted (and mirrored into the FTS index).
    pub owner_rows: usize,
}

/// Build the search database for `snapshot` at `target`.
///
/// Fails if the snapshot has no `owners` table: unlike the analytical
/// store, there is nothing useful to publish without it.
pub fn build(snapshot: &Snapshot, target: &Path) -> SearchResult<SearchReport> {
    if !snapshot.has_table("owners") {
        return Err(SearchError::MissingOwners);
    }
    let rows = read_owner_rows(&snapshot.table_path("owners"))?;

    let tmp = tmp_path(target);
    remove_stale(&tmp)?;

    let db = SearchDb::open(&tmp)?;
    let report = populate(&db, &rows)?;
    db.close()?;

    replace(&tmp, target)?;
    log::info!("search store written to {}", target.display());
    Ok(report)
}

/// Create the schema, insert `rows`, and build the FTS index and plain
/// filter indexes on an open database.
pub fn populate(db: &SearchDb, rows: &[OwnerRow]) -> SearchResult<SearchReport> {
    db.conn().execute_batch(
        "CREATE TABLE owners (
            owner_id INTEGER PRIMARY KEY,
            n_number TEXT NOT NULL,
            owner_name_std TEXT,
            address_all_std TEXT,
            city_std TEXT,
            state_std TEXT,
            zip5 TEXT
        )",
    )?;

    insert_owners(db, rows)?;
    build_fts_index(db)?;

    db.conn().execute_batch(
        "CREATE INDEX idx_owners_n_number ON owners(n_number);
         CREATE INDEX idx_owners_state ON owners(state_std);",
    )?;

    log::info!("inserted {} owner records", rows.len());
    Ok(SearchReport {
        owner_rows: rows.len(),
    })
}

/// Read the search-relevant owner columns out of the snapshot's Parquet
/// file, using an in-memory DuckDB connection as the Parquet reader.
fn read_owner_rows(path: &Path) -> SearchResult<Vec<OwnerRow>> {
    let source = |e: duckdb::Error| SearchError::SourceRead(e.to_string());

    let conn = duckdb::Connection::open_in_memory().map_err(source)?;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT CAST(owner_id AS BIGINT) AS owner_id, n_number, owner_name_std, \
                    address_all_std, city_std, state_std, zip5 \
             FROM read_parquet('{}')",
            sql_path(path)
        ))
        .map_err(source)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(OwnerRow {
                owner_id: row.get(0)?,
                n_number: row.get(1)?,
                owner_name_std: row.get(2)?,
                address_all_std: row.get(3)?,
                city_std: row.get(4)?,
                state_std: row.get(5)?,
                zip5: row.get(6)?,
            })
        })
        .map_err(source)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(source)?;
    Ok(rows)
}

/// Bulk-insert owner rows in one transaction, enforcing the content-link
/// invariant: every owner id present and unique.
fn insert_owners(db: &SearchDb, rows: &[OwnerRow]) -> SearchResult<()> {
    let conn = db.conn();
    conn.execute_batch("BEGIN TRANSACTION")?;

    {
        let mut stmt =
            conn.prepare("INSERT INTO owners VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)")?;
        let mut seen = HashSet::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            let owner_id = row.owner_id.ok_or_else(|| {
                SearchError::Integrity(format!("owner row {i} has a NULL owner_id"))
            })?;
            if !seen.insert(owner_id) {
                return Err(SearchError::Integrity(format!(
                    "duplicate owner_id {owner_id}"
                )));
            }
            stmt.execute(rusqlite::params![
                owner_id,
                row.n_number,
                row.owner_name_std,
                row.address_all_std,
                row.city_std,
                row.state_std,
                row.zip5,
            ])?;
        }
    }

    conn.execute_batch("COMMIT")?;
    Ok(())
}

/// Create the FTS5 index declared over the base table and bulk-populate it.
///
/// `content=owners, content_rowid=owner_id` links index entries to base
/// rows by owner id. The rowid is written explicitly during population so
/// the correspondence holds even for non-contiguous owner ids.
fn build_fts_index(db: &SearchDb) -> SearchResult<()> {
    db.conn().execute_batch(
        "CREATE VIRTUAL TABLE owners_fts USING fts5(
            owner_name_std,
            address_all_std,
            city_std,
            state_std,
            content=owners,
            content_rowid=owner_id
         );
         INSERT INTO owners_fts(rowid, owner_name_std, address_all_std, city_std, state_std)
         SELECT owner_id, owner_name_std, address_all_std, city_std, state_std
         FROM owners;",
    )?;
    Ok(())
}

/// Sibling temporary path used while building.
fn tmp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map_or_else(|| "owners.sqlite".into(), |n| n.to_os_string());
    name.push(".tmp");
    target.with_file_name(name)
}

/// Delete a leftover temporary file from a previously killed run.
fn remove_stale(tmp: &Path) -> SearchResult<()> {
    if tmp.exists() {
        std::fs::remove_file(tmp).map_err(|source| SearchError::Replace {
            path: tmp.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

/// Move the finished build over the canonical path.
fn replace(tmp: &Path, target: &Path) -> SearchResult<()> {
    std::fs::rename(tmp, target).map_err(|source| SearchError::Replace {
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
