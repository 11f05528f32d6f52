//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Hangar - aircraft-registry data pipeline
#[derive(Parser, Debug)]
#[command(name = "hangar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root data directory
    #[arg(short, long, global = true, default_value = "data")]
    pub data_root: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish the normalized snapshot to DuckDB and SQLite FTS
    Publish(PublishArgs),

    /// Remove previously published outputs
    Clean(CleanArgs),
}

/// Arguments for the publish command
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Snapshot date to record in the publish metadata (default: read from
    /// the normalize metadata if present)
    #[arg(short, long)]
    pub snapshot_date: Option<String>,
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Show what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
