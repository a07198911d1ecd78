//! CLI adapter for docvec
//!
//! Provides the command-line interface over `core/`. The CLI owns
//! argument parsing and output formatting; all ingestion behaviour
//! lives in `core/`.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +--------+---------+
//!          |
//!          v
//! +------------------+      +------------------+
//! |     core/        | ---> | vectorization    |
//! |  (domain logic)  | HTTP |    service       |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// docvec - feed documents to a vectorization service
///
/// Extracts text from PDF, DOCX, TXT and Markdown files, splits it into
/// overlapping chunks and submits each chunk for embedding.
#[derive(Parser, Debug)]
#[command(name = "docvec")]
#[command(version)]
#[command(about = "Document ingestion for a vectorization service", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest every supported document under a directory
    Run(commands::RunArgs),

    /// Extract and chunk one file without contacting the service
    Chunk(commands::ChunkArgs),

    /// Check that the vectorization service is reachable
    Health(commands::HealthArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docvec completions bash > ~/.local/share/bash-completion/completions/docvec
    ///   zsh:   docvec completions zsh > ~/.zfunc/_docvec
    ///   fish:  docvec completions fish > ~/.config/fish/completions/docvec.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, &services, cli.format).await,
        Commands::Chunk(args) => commands::chunk::execute(args, &services, cli.format).await,
        Commands::Health(args) => commands::health::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
