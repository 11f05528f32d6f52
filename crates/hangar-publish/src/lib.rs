//! Publish coordinator for Hangar.
//!
//! Validates that a normalized snapshot exists, builds the analytical and
//! search stores in sequence, and records provenance metadata for the run.
//! Execution is synchronous and single-writer: callers must not run two
//! publishes against the same data root concurrently.

pub mod error;
pub mod pipeline;

pub use error::{PublishError, PublishResult};
pub use pipeline::{publish, PublishOptions, PublishOutput, DUCKDB_FILE, METADATA_FILE, SQLITE_FILE};
