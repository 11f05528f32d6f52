//! hangar-core - Core library for Hangar
//!
//! Shared types for the publish pipeline: the snapshot-source model, the
//! publish metadata document, and the core error type.

pub mod error;
pub mod metadata;
pub mod snapshot;

pub use error::{CoreError, CoreResult};
pub use metadata::{file_size_mb, PublishMetadata};
pub use snapshot::{Snapshot, REQUIRED_TABLE, SNAPSHOT_TABLES};
