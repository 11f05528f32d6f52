//! Search database connection wrapper.

use crate::error::{SearchError, SearchResult};
use rusqlite::Connection;
use std::path::Path;

/// Wrapper around a SQLite connection to the owner-search database.
pub struct SearchDb {
    conn: Connection,
}

impl SearchDb {
    /// Open (or create) the search database at `path`.
    pub fn open(path: &Path) -> SearchResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| SearchError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Create an in-memory search database.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> SearchResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| SearchError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Borrow the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Row count of `table`.
    pub fn count(&self, table: &str) -> SearchResult<usize> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .map_err(|e| SearchError::QueryError(e.to_string()))?;
        Ok(n as usize)
    }

    /// Whether a table or index named `name` exists.
    pub fn object_exists(&self, name: &str) -> SearchResult<bool> {
        let n: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = ?1",
                rusqlite::params![name],
                |row| row.get(0),
            )
            .map_err(|e| SearchError::QueryError(e.to_string()))?;
        Ok(n > 0)
    }

    /// Close the connection, flushing the database file to disk.
    pub fn close(self) -> SearchResult<()> {
        self.conn
            .close()
            .map_err(|(_, e)| SearchError::ConnectionError(e.to_string()))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
