//! Chunk command - preview extraction and chunking of one file

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::ingest::Chunker;
use crate::core::services::Services;
use crate::core::types::{Chunk, Document};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// File to extract and chunk
    pub file: PathBuf,

    /// Characters per chunk (defaults to `ingest.chunk_size`)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between chunks (defaults to `ingest.overlap`)
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Characters of each chunk to show in human output (0 = all)
    #[arg(long, default_value = "80")]
    pub preview: usize,
}

/// Chunking preview response
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub file: String,
    pub format: String,
    pub fingerprint: String,
    pub extracted_chars: usize,
    pub chunk_size: usize,
    pub overlap: usize,
    pub chunks: Vec<Chunk>,
}

/// Execute the chunk command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let ingest = &services.config.ingest;
    let chunker = Chunker::new(
        args.chunk_size.unwrap_or(ingest.chunk_size),
        args.overlap.unwrap_or(ingest.overlap),
    )?;

    let document = Document::load(&args.file)?;
    let extracted = services.extractors.extract(&document)?;
    let text = extracted.trim();

    let name = document.file_name();
    let response = ChunkResponse {
        file: args.file.display().to_string(),
        format: document.format.to_string(),
        fingerprint: document.fingerprint.to_string(),
        extracted_chars: text.chars().count(),
        chunk_size: chunker.chunk_size(),
        overlap: chunker.overlap(),
        chunks: chunker.chunk_text(text, &name),
    };

    match format {
        OutputFormat::Human => print_human(&response, args.preview),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn print_human(response: &ChunkResponse, preview: usize) {
    println!(
        "{} ({}, {} chars, sha256 {})",
        colors::file_path(&response.file),
        response.format,
        colors::number(&response.extracted_chars.to_string()),
        colors::dim(&response.fingerprint)
    );
    println!(
        "{} chunks (size {}, overlap {})",
        colors::number(&response.chunks.len().to_string()),
        response.chunk_size,
        response.overlap
    );

    for chunk in &response.chunks {
        println!(
            "\n{} {} [{}..{})",
            colors::label(&chunk.label()),
            colors::dim(&format!("{} chars", chunk.char_len())),
            chunk.start_offset,
            chunk.end_offset
        );
        println!("{}", truncate_chars(&chunk.text, preview));
    }
}

/// First `max` characters of `text` with an ellipsis when cut
fn truncate_chars(text: &str, max: usize) -> String {
    if max == 0 || text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}
