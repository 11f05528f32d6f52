//! Analytical database connection wrapper.
//!
//! [`AnalyticsDb`] owns a DuckDB [`Connection`]. Single-threaded, no
//! `Mutex`, because the publish pipeline is strictly sequential.

use crate::error::{AnalyticsError, AnalyticsResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection to the analytical database.
pub struct AnalyticsDb {
    conn: Connection,
}

impl AnalyticsDb {
    /// Open (or create) the analytical database at `path`.
    pub fn open(path: &Path) -> AnalyticsResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| AnalyticsError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Create an in-memory analytical database.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> AnalyticsResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AnalyticsError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute a statement, discarding the affected-row count.
    pub fn execute(&self, sql: &str) -> AnalyticsResult<()> {
        self.conn
            .execute(sql, [])
            .map_err(|e| AnalyticsError::QueryError(format!("{e}: {sql}")))?;
        Ok(())
    }

    /// Row count of `table`.
    pub fn count(&self, table: &str) -> AnalyticsResult<usize> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .map_err(|e| AnalyticsError::QueryError(e.to_string()))?;
        Ok(n as usize)
    }

    /// Whether a table named `name` exists in the main schema.
    pub fn table_exists(&self, name: &str) -> AnalyticsResult<bool> {
        let n: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = 'main' AND table_name = ?",
                duckdb::params![name],
                |row| row.get(0),
            )
            .map_err(|e| AnalyticsError::QueryError(e.to_string()))?;
        Ok(n > 0)
    }

    /// Close the connection, flushing the database file to disk.
    pub fn close(self) -> AnalyticsResult<()> {
        self.conn
            .close()
            .map_err(|(_, e)| AnalyticsError::ConnectionError(e.to_string()))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
