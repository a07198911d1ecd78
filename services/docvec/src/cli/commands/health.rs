//! Health command - check the vectorization service

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub base_url: String,
    pub healthy: bool,
    pub status: Option<String>,
    pub error: Option<String>,
}

/// Execute the health command
///
/// An unreachable service is reported and turned into an error so the
/// exit status is non-zero.
pub async fn execute(
    _args: HealthArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = services.client.base_url().to_string();

    let response = match services.client.health_status().await {
        Ok(status) => HealthResponse {
            base_url: base_url.clone(),
            healthy: true,
            status: Some(status.status_or_unknown().to_string()),
            error: None,
        },
        Err(e) => HealthResponse {
            base_url: base_url.clone(),
            healthy: false,
            status: None,
            error: Some(e.message()),
        },
    };

    match format {
        OutputFormat::Human => {
            if let Some(status) = &response.status {
                println!(
                    "{} {} ({})",
                    colors::success("API Health:"),
                    status,
                    colors::dim(&base_url)
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    match response.error {
        Some(error) => Err(format!(
            "API health check failed: {error}. \
             Make sure the vectorization service is running at {base_url}."
        )
        .into()),
        None => Ok(()),
    }
}
