//! Ingestion pipeline orchestration.
//!
//! Coordinates the per-file workflow:
//! 1. Detect format and read the file
//! 2. Fingerprint the raw bytes and skip content seen this run
//! 3. Extract text
//! 4. Chunk text
//! 5. Submit chunks to the service, one at a time, in order
//!
//! Everything runs sequentially. A failed chunk is logged and the next
//! chunk is still attempted; a failed file is recorded and the next
//! file is still processed.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::core::client::ChunkSink;
use crate::core::error::{DocvecError, Result};
use crate::core::extract::ExtractorRegistry;
use crate::core::ingest::fingerprint::FingerprintStore;
use crate::core::ingest::{Chunker, FileWalker};
use crate::core::types::{display_name, Document, DocumentFormat, FileOutcome, IngestReport};

/// Extracts, chunks and dispatches documents
pub struct DocumentIngestor {
    chunker: Chunker,
    walker: FileWalker,
    extractors: Arc<ExtractorRegistry>,
    sink: Arc<dyn ChunkSink>,
    processed: Box<dyn FingerprintStore>,
}

impl DocumentIngestor {
    /// Create a new ingestor
    ///
    /// # Arguments
    ///
    /// * `chunker` - Chunking policy
    /// * `walker` - Discovers files for `ingest_directory`
    /// * `extractors` - Format to extractor mapping
    /// * `sink` - Where chunks are submitted
    /// * `processed` - Fingerprints of content already handled
    pub fn new(
        chunker: Chunker,
        walker: FileWalker,
        extractors: Arc<ExtractorRegistry>,
        sink: Arc<dyn ChunkSink>,
        processed: Box<dyn FingerprintStore>,
    ) -> Self {
        Self {
            chunker,
            walker,
            extractors,
            sink,
            processed,
        }
    }

    /// Fingerprints recorded so far
    pub fn processed(&self) -> &dyn FingerprintStore {
        self.processed.as_ref()
    }

    /// Chunking policy applied to every file
    pub fn chunker(&self) -> &Chunker {
        &self.chunker
    }

    /// Process a single file
    ///
    /// Returns `Ok` with `success == false` when every chunk was
    /// rejected. Errors before any chunk is attempted (unsupported
    /// format, unreadable file, extraction failure, empty text) come
    /// back as `Err`.
    pub async fn process_file(&mut self, path: &Path) -> Result<FileOutcome> {
        let filename = display_name(path);
        tracing::info!("Processing: {}", filename);

        let document = Document::load(path)?;
        tracing::debug!(
            "  {} document, {} bytes, fingerprint {}",
            document.format,
            document.bytes.len(),
            document.fingerprint.short()
        );

        if self.processed.contains(&document.fingerprint) {
            tracing::info!("  Skipping (already processed): {}", filename);
            return Ok(FileOutcome::duplicate(path));
        }

        let extracted = self.extractors.extract(&document)?;
        let text = extracted.trim();
        if text.is_empty() {
            tracing::warn!("  No text extracted from {}", filename);
            return Err(DocvecError::EmptyContent(filename));
        }

        tracing::info!("  Extracted {} characters", text.chars().count());

        let chunks = self.chunker.chunk_text(text, &filename);
        let total = chunks.len();
        tracing::info!("  Split into {} chunks", total);

        let mut successful_chunks = 0;
        for chunk in &chunks {
            tracing::info!(
                "    Processing chunk {}/{} ({} chars)",
                chunk.chunk_index + 1,
                total,
                chunk.char_len()
            );

            match self.sink.submit(&chunk.label(), &chunk.text).await {
                Ok(response) => {
                    tracing::info!("      Success: {}", response.message_or_default());
                    successful_chunks += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        "      Error processing chunk {}: {}",
                        chunk.chunk_index + 1,
                        e
                    );
                }
            }
        }

        let success = successful_chunks > 0;
        if success {
            tracing::info!(
                "  Successfully processed {}/{} chunks",
                successful_chunks,
                total
            );
            self.processed.insert(document.fingerprint);
        } else {
            tracing::warn!("  Failed to process any chunks of {}", filename);
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            success,
            chunk_count: total,
            successful_chunks,
            duplicate: false,
        })
    }

    /// Process every candidate file under `root`
    ///
    /// # Errors
    ///
    /// Only `DirectoryNotFound`; per-file errors are recorded in the
    /// report.
    pub async fn ingest_directory(&mut self, root: &Path) -> Result<IngestReport> {
        let start = Instant::now();
        let mut report = IngestReport::new(root);

        tracing::info!("Starting file collection from {:?}", root);
        let files = self.walker.collect_files(root)?;
        report.files_total = files.len();

        if files.is_empty() {
            let supported = DocumentFormat::ALL
                .iter()
                .map(|f| format!(".{}", f.extension()))
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!("No supported files found in {:?}", root);
            tracing::info!("Supported formats: {}", supported);
            report.duration_ms = start.elapsed().as_millis() as u64;
            return Ok(report);
        }

        tracing::info!("Found {} files to process", files.len());

        for (idx, file_path) in files.iter().enumerate() {
            tracing::debug!("File {}/{}", idx + 1, files.len());

            match self.process_file(file_path).await {
                Ok(outcome) => report.record_outcome(&outcome),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    if !e.is_soft() {
                        tracing::warn!("  Error processing {:?}: {}", file_path, e);
                    }
                    report.record_failure(file_path, e.message());
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Ingestion complete: {}/{} files successful, {} chunks submitted, \
             {} chunks failed in {}ms",
            report.files_succeeded,
            report.files_total,
            report.chunks_submitted,
            report.chunks_failed,
            report.duration_ms
        );

        Ok(report)
    }
}
