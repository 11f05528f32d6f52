//! Owner-search store builder for Hangar.
//!
//! Projects the search-relevant owner fields out of a normalized snapshot
//! into a SQLite database and builds an FTS5 inverted index over them,
//! content-linked to the base table by owner id. Rebuilt from scratch on
//! every publish run.

pub mod builder;
pub mod error;
pub mod store;

pub use builder::{build, OwnerRow, SearchReport};
pub use error::{SearchError, SearchResult};
pub use store::SearchDb;
