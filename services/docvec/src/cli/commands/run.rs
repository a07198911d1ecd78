//! Run command - ingest a directory of documents

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::IngestReport;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory to ingest (defaults to `ingest.documents_dir`)
    pub dir: Option<PathBuf>,

    /// Skip the service health check
    #[arg(long)]
    pub skip_health_check: bool,
}

/// Execute the run command
pub async fn execute(
    args: RunArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = services.client.base_url().to_string();

    if format == OutputFormat::Human {
        eprintln!("{}", colors::label("docvec document ingestion"));
    }

    if !args.skip_health_check && !services.client.is_healthy().await {
        return Err(format!(
            "Vectorization service is not reachable at {base_url}. \
             Start the service and try again."
        )
        .into());
    }

    let formats = services.config.ingest.formats()?;
    services.extractors.log_capabilities();
    services.extractors.ensure_available(&formats)?;

    let dir = args
        .dir
        .unwrap_or_else(|| services.config.ingest.documents_dir.clone());

    let mut ingestor = services.create_ingestor()?;
    let report = ingestor.ingest_directory(&dir).await?;

    match format {
        OutputFormat::Human => print_human(&report, &base_url),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_human(report: &IngestReport, base_url: &str) {
    if report.files_total == 0 {
        print_warning(&format!(
            "No supported files found in {}",
            report.root.display()
        ));
    }

    println!(
        "\nProcessing complete: {}/{} files successful",
        colors::number(&report.files_succeeded.to_string()),
        colors::number(&report.files_total.to_string())
    );
    println!(
        "Chunks: {} submitted, {} failed ({} duplicate files skipped) in {}",
        colors::number(&report.chunks_submitted.to_string()),
        colors::number(&report.chunks_failed.to_string()),
        colors::number(&report.files_duplicate.to_string()),
        colors::number(&format_duration(report.duration_ms))
    );

    for failure in &report.failures {
        println!(
            "  {} {}: {}",
            colors::error("failed"),
            colors::file_path(&failure.path.display().to_string()),
            failure.reason
        );
    }

    if report.files_succeeded > 0 {
        println!(
            "\n{}",
            colors::success("You can now query your documents through the service.")
        );
        println!(
            "Example: curl -X POST {base_url}/query -H 'Content-Type: application/json' \
             -d '{{\"query\":\"your question here\"}}'"
        );
    }
}
