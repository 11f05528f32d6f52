//! Tests for CLI argument parsing.

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn publish_defaults() {
    let cli = Cli::try_parse_from(["hangar", "publish"]).unwrap();
    assert_eq!(cli.global.data_root, "data");
    assert!(!cli.global.verbose);
    match cli.command {
        Commands::Publish(args) => assert_eq!(args.snapshot_date, None),
        other => panic!("expected publish, got {other:?}"),
    }
}

#[test]
fn publish_with_snapshot_date_and_data_root() {
    let cli = Cli::try_parse_from([
        "hangar",
        "publish",
        "--snapshot-date",
        "2024-01-15",
        "--data-root",
        "/tmp/registry",
    ])
    .unwrap();
    assert_eq!(cli.global.data_root, "/tmp/registry");
    match cli.command {
        Commands::Publish(args) => {
            assert_eq!(args.snapshot_date.as_deref(), Some("2024-01-15"));
        }
        other => panic!("expected publish, got {other:?}"),
    }
}

#[test]
fn global_flags_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["hangar", "clean", "--verbose"]).unwrap();
    assert!(cli.global.verbose);
    assert!(matches!(cli.command, Commands::Clean(_)));
}

#[test]
fn clean_dry_run() {
    let cli = Cli::try_parse_from(["hangar", "clean", "--dry-run"]).unwrap();
    match cli.command {
        Commands::Clean(args) => assert!(args.dry_run),
        other => panic!("expected clean, got {other:?}"),
    }
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["hangar"]).is_err());
}
