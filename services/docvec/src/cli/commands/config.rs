//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    pub extractors: Vec<String>,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        extractors: crate::core::types::DocumentFormat::ALL
            .iter()
            .filter(|f| services.extractors.is_available(**f))
            .map(|f| f.to_string())
            .collect(),
        config,
    };

    match format {
        OutputFormat::Human => {
            let ingest = &config.ingest;
            let api = &config.api;
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  extractors: {:?}", response.extractors);
            println!("  ingest:");
            println!("    documents_dir: {}", ingest.documents_dir.display());
            println!("    chunk_size: {}", ingest.chunk_size);
            println!("    overlap: {}", ingest.overlap);
            println!("    extensions: {:?}", ingest.extensions);
            println!("    exclude_patterns: {:?}", ingest.exclude_patterns);
            println!("    max_file_size_mb: {}", ingest.max_file_size_mb);
            println!("  api:");
            println!("    base_url: {}", api.base_url);
            println!("    submit_timeout_sec: {}", api.submit_timeout_sec);
            println!("    health_timeout_sec: {}", api.health_timeout_sec);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
