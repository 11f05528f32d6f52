//! Error types for the search store builder.

use thiserror::Error;

/// Search store errors.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Failed to open or create the search database (S001).
    #[error("[S001] Search database connection failed: {0}")]
    ConnectionError(String),

    /// SQL execution error inside the search database (S002).
    #[error("[S002] Search database query failed: {0}")]
    QueryError(String),

    /// The snapshot has no owners table to project (S003).
    #[error("[S003] Missing required input: owners is not in the snapshot")]
    MissingOwners,

    /// An owner row violates the index content-link invariant (S004).
    #[error("[S004] Owner data integrity violation: {0}")]
    Integrity(String),

    /// Filesystem error while replacing the output database (S005).
    #[error("[S005] Failed to replace {path}: {source}")]
    Replace {
        path: String,
        source: std::io::Error,
    },

    /// Failed to read owner rows out of the snapshot (S006).
    #[error("[S006] Failed to read owners from snapshot: {0}")]
    SourceRead(String),

    /// SQLite driver error with preserved source chain (S007).
    #[error("[S007] SQLite error")]
    Sqlite(#[source] rusqlite::Error),
}

/// Result type alias for [`SearchError`].
pub type SearchResult<T> = Result<T, SearchError>;

impl From<rusqlite::Error> for SearchError {
    fn from(err: rusqlite::Error) -> Self {
        SearchError::Sqlite(err)
    }
}
