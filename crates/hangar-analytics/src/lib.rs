//! Analytical store builder for Hangar.
//!
//! Materializes a normalized snapshot into a DuckDB database: one table per
//! snapshot table, a derived `owners_summary` rollup, and lookup indexes.
//! Rebuilt from scratch on every publish run.

pub mod builder;
pub mod error;
pub mod store;

pub use builder::{build, BuildReport, TableCount};
pub use error::{AnalyticsError, AnalyticsResult};
pub use store::AnalyticsDb;
