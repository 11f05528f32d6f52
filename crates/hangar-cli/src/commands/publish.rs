//! Publish command implementation

use anyhow::Result;
use hangar_publish::{publish, PublishOptions};
use std::path::PathBuf;

use crate::cli::{GlobalArgs, PublishArgs};

/// Execute the publish command
pub fn execute(args: &PublishArgs, global: &GlobalArgs) -> Result<()> {
    let options = PublishOptions {
        data_root: PathBuf::from(&global.data_root),
        snapshot_date: args.snapshot_date.clone(),
    };

    if global.verbose {
        eprintln!(
            "[verbose] Publishing snapshot from {}",
            options.data_root.join("publish").display()
        );
    }

    let output = publish(&options)?;

    println!("Published snapshot from {}\n", output.publish_dir.display());
    for table in &output.analytics.loaded {
        println!("  ✓ {} ({} rows)", table.table, table.rows);
    }
    println!(
        "  ✓ owners_summary ({} rows)",
        output.analytics.summary_rows
    );
    for table in &output.analytics.skipped {
        println!("  ✗ {table} - source file missing, skipped");
    }
    println!("  ✓ owner search index ({} rows)", output.search.owner_rows);

    println!();
    println!(
        "DuckDB: {} ({:.2} MB)",
        output.duckdb_path.display(),
        output.metadata.duckdb_size_mb
    );
    println!(
        "SQLite: {} ({:.2} MB)",
        output.sqlite_path.display(),
        output.metadata.sqlite_size_mb
    );

    Ok(())
}
