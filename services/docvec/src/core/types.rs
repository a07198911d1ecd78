//! Core data types for docvec.
//!
//! Documents, chunks, per-file outcomes and run reports, plus the
//! JSON shapes exchanged with the vectorization service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{DocvecError, Result};
use crate::core::ingest::fingerprint::Fingerprint;

/// Document formats docvec knows how to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
    Markdown,
}

impl DocumentFormat {
    /// Every supported format, in the order they are reported to users
    pub const ALL: [DocumentFormat; 4] = [
        DocumentFormat::Pdf,
        DocumentFormat::Docx,
        DocumentFormat::Txt,
        DocumentFormat::Markdown,
    ];

    /// Map a file extension (with or without the leading dot, any case)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::Txt),
            "md" => Some(DocumentFormat::Markdown),
            _ => None,
        }
    }

    /// Detect the format of a path from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::from_extension(ext).ok_or_else(|| {
            DocvecError::UnsupportedFormat(format!(
                "'.{}' ({})",
                ext.to_ascii_lowercase(),
                path.display()
            ))
        })
    }

    /// Canonical extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
            DocumentFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
            DocumentFormat::Txt => "TXT",
            DocumentFormat::Markdown => "MD",
        };
        write!(f, "{name}")
    }
}

/// A file read from disk, fingerprinted before extraction
#[derive(Debug, Clone)]
pub struct Document {
    /// Source file path
    pub path: PathBuf,

    /// Raw file contents
    pub bytes: Vec<u8>,

    /// Format detected from the extension
    pub format: DocumentFormat,

    /// SHA-256 of the raw bytes
    pub fingerprint: Fingerprint,
}

impl Document {
    /// Read a document from disk.
    ///
    /// The format is checked first so unsupported files fail without
    /// touching the filesystem.
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(path, format, bytes))
    }

    /// Build a document from bytes already in memory
    pub fn from_bytes(path: &Path, format: DocumentFormat, bytes: Vec<u8>) -> Self {
        let fingerprint = Fingerprint::of(&bytes);
        Self {
            path: path.to_path_buf(),
            bytes,
            format,
            fingerprint,
        }
    }

    /// File name used in chunk labels
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// File name of a path, falling back to the full path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A single text chunk from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Trimmed text content
    pub text: String,

    /// Name of the document the chunk came from
    pub source: String,

    /// Byte offset where the chunk window starts
    pub start_offset: usize,

    /// Byte offset where the chunk window ends
    pub end_offset: usize,

    /// Sequential chunk number within the document (0-based)
    pub chunk_index: usize,
}

impl Chunk {
    /// Display label sent to the service, e.g. `report.pdf [Chunk 3]`
    pub fn label(&self) -> String {
        format!("{} [Chunk {}]", self.source, self.chunk_index + 1)
    }

    /// Length of the chunk text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Source file path
    pub path: PathBuf,

    /// At least one chunk reached the service (or the file was a duplicate)
    pub success: bool,

    /// Chunks produced from the extracted text
    pub chunk_count: usize,

    /// Chunks the service accepted
    pub successful_chunks: usize,

    /// Skipped because the fingerprint was already processed this run
    pub duplicate: bool,
}

impl FileOutcome {
    /// Outcome for a file whose content was already processed
    pub fn duplicate(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            success: true,
            chunk_count: 0,
            successful_chunks: 0,
            duplicate: true,
        }
    }
}

/// A file that could not be processed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregate statistics from a directory run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    /// Directory that was ingested
    pub root: PathBuf,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Candidate files found by the walker
    pub files_total: usize,

    /// Files with at least one submitted chunk, duplicates included
    pub files_succeeded: usize,

    /// Files skipped because identical content was already processed
    pub files_duplicate: usize,

    /// Files that failed, with reasons
    pub failures: Vec<FileFailure>,

    /// Chunks produced across all files
    pub chunks_created: usize,

    /// Chunks the service accepted
    pub chunks_submitted: usize,

    /// Chunks the service rejected or that failed in transit
    pub chunks_failed: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

impl IngestReport {
    /// Empty report for a run starting now
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            started_at: Utc::now(),
            files_total: 0,
            files_succeeded: 0,
            files_duplicate: 0,
            failures: Vec::new(),
            chunks_created: 0,
            chunks_submitted: 0,
            chunks_failed: 0,
            duration_ms: 0,
        }
    }

    /// Fold one file outcome into the totals
    pub fn record_outcome(&mut self, outcome: &FileOutcome) {
        if outcome.duplicate {
            self.files_duplicate += 1;
        }
        if outcome.success {
            self.files_succeeded += 1;
        } else {
            self.failures.push(FileFailure {
                path: outcome.path.clone(),
                reason: "no chunks were accepted by the service".to_string(),
            });
        }
        self.chunks_created += outcome.chunk_count;
        self.chunks_submitted += outcome.successful_chunks;
        self.chunks_failed += outcome.chunk_count - outcome.successful_chunks;
    }

    /// Record a file that errored before any chunk was attempted
    pub fn record_failure(&mut self, path: &Path, reason: String) {
        self.failures.push(FileFailure {
            path: path.to_path_buf(),
            reason,
        });
    }

    /// Files that did not succeed
    pub fn files_failed(&self) -> usize {
        self.failures.len()
    }
}

/// Body of `POST /process-document`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDocumentRequest {
    pub filename: String,
    pub content: String,
}

/// Response from `POST /process-document`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// Human-readable result message
    #[serde(default)]
    pub message: Option<String>,

    /// Any other fields the service returns
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ServiceResponse {
    /// Message to log, with the service's default wording
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("Processed successfully")
    }
}

/// Response from `GET /health`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
}

impl HealthStatus {
    pub fn status_or_unknown(&self) -> &str {
        self.status.as_deref().unwrap_or("Unknown")
    }
}
