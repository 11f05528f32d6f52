//! Error types for the analytical store builder.

use thiserror::Error;

/// Analytical store errors.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Failed to open or create the analytical database (A001).
    #[error("[A001] Analytical database connection failed: {0}")]
    ConnectionError(String),

    /// SQL execution error inside the analytical database (A002).
    #[error("[A002] Analytical database query failed: {0}")]
    QueryError(String),

    /// A table required for a derived step is absent from the snapshot (A003).
    #[error("[A003] Missing required input: {table} is not in the snapshot")]
    MissingInput { table: String },

    /// Filesystem error while replacing the output database (A004).
    #[error("[A004] Failed to replace {path}: {source}")]
    Replace {
        path: String,
        source: std::io::Error,
    },

    /// DuckDB driver error with preserved source chain (A005).
    #[error("[A005] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`AnalyticsError`].
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<duckdb::Error> for AnalyticsError {
    fn from(err: duckdb::Error) -> Self {
        AnalyticsError::DuckDb(err)
    }
}
