//! Clean command implementation

use anyhow::Result;
use hangar_publish::{DUCKDB_FILE, METADATA_FILE, SQLITE_FILE};
use std::fs;
use std::path::Path;

use crate::cli::{CleanArgs, GlobalArgs};

/// Execute the clean command
pub fn execute(args: &CleanArgs, global: &GlobalArgs) -> Result<()> {
    let publish_dir = Path::new(&global.data_root).join("publish");

    let targets = [
        publish_dir.join(DUCKDB_FILE),
        publish_dir.join(SQLITE_FILE),
        publish_dir.join(METADATA_FILE),
    ];

    let mut removed_count = 0;
    let mut skipped_count = 0;

    for target in &targets {
        if !target.exists() {
            if global.verbose {
                println!("  Skipping (not found): {}", target.display());
            }
            skipped_count += 1;
            continue;
        }

        if args.dry_run {
            println!("  Would remove: {}", target.display());
            removed_count += 1;
            continue;
        }

        match fs::remove_file(target) {
            Ok(_) => {
                println!("  Removed: {}", target.display());
                removed_count += 1;
            }
            Err(e) => {
                eprintln!("  Failed to remove {}: {}", target.display(), e);
            }
        }
    }

    println!();
    if args.dry_run {
        println!(
            "Would remove {} file{}, {} not found",
            removed_count,
            if removed_count == 1 { "" } else { "s" },
            skipped_count
        );
    } else {
        println!(
            "Removed {} file{}, {} not found",
            removed_count,
            if removed_count == 1 { "" } else { "s" },
            skipped_count
        );
    }

    Ok(())
}
