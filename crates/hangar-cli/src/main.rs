//! Hangar CLI - publish aircraft-registry snapshots to query-optimized stores

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{clean, publish};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Publish(args) => publish::execute(args, &cli.global),
        cli::Commands::Clean(args) => clean::execute(args, &cli.global),
    }
}
