//! Argument parsing tests

use clap::Parser;
use docvec::cli::{Cli, Commands, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_run_defaults() {
    let cli = Cli::try_parse_from(["docvec", "run"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    assert!(!cli.log_json);
    match cli.command {
        Commands::Run(args) => {
            assert!(args.dir.is_none());
            assert!(!args.skip_health_check);
        }
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_run_with_directory_and_globals() {
    let cli =
        Cli::try_parse_from(["docvec", "run", "/srv/papers", "--format", "json", "--log-json"])
            .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.log_json);
    match cli.command {
        Commands::Run(args) => assert_eq!(args.dir, Some(PathBuf::from("/srv/papers"))),
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_chunk_overrides() {
    let cli = Cli::try_parse_from([
        "docvec",
        "chunk",
        "report.pdf",
        "--chunk-size",
        "500",
        "--overlap",
        "50",
        "--preview",
        "0",
    ])
    .unwrap();

    match cli.command {
        Commands::Chunk(args) => {
            assert_eq!(args.file, PathBuf::from("report.pdf"));
            assert_eq!(args.chunk_size, Some(500));
            assert_eq!(args.overlap, Some(50));
            assert_eq!(args.preview, 0);
        }
        other => panic!("expected chunk, got {other:?}"),
    }
}

#[test]
fn test_chunk_requires_file() {
    assert!(Cli::try_parse_from(["docvec", "chunk"]).is_err());
}

#[test]
fn test_show_config_name() {
    let cli = Cli::try_parse_from(["docvec", "show-config"]).unwrap();
    assert!(matches!(cli.command, Commands::ShowConfig(_)));
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["docvec", "health", "--format", "yaml"]).is_err());
}
