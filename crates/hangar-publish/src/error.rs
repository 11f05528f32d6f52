//! Error types for the publish pipeline.

use thiserror::Error;

/// Publish pipeline errors.
///
/// All variants are fatal: a failed run leaves no new outputs published
/// beyond what had already been renamed into place.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Snapshot prerequisite not met; nothing was touched (P001).
    #[error("[P001] {0}")]
    Prerequisite(#[source] hangar_core::CoreError),

    /// Analytical store build failed (P002).
    #[error("[P002] Analytical store build failed: {0}")]
    Analytics(#[from] hangar_analytics::AnalyticsError),

    /// Search store build failed (P003).
    #[error("[P003] Search store build failed: {0}")]
    Search(#[from] hangar_search::SearchError),

    /// Provenance metadata could not be recorded (P004).
    #[error("[P004] Publish metadata failed: {0}")]
    Metadata(#[source] hangar_core::CoreError),
}

/// Result type alias for [`PublishError`].
pub type PublishResult<T> = Result<T, PublishError>;
