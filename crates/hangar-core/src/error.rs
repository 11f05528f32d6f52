//! Error types for hangar-core

use thiserror::Error;

/// Core error type for Hangar
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Snapshot directory not found
    #[error("[E001] No normalized snapshot at {path}. Run 'hangar normalize' first.")]
    SnapshotNotFound { path: String },

    /// E002: Snapshot is missing a table required for publishing
    #[error("[E002] Snapshot at {path} has no {table} table. Run 'hangar normalize' first.")]
    SnapshotIncomplete { path: String, table: String },

    /// E003: Metadata document could not be written
    #[error("[E003] Failed to write metadata {path}: {source}")]
    MetadataWrite {
        path: String,
        source: std::io::Error,
    },

    /// E004: IO error
    #[error("[E004] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
