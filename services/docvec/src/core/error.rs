//! Error types and error handling for docvec.
//!
//! Per-chunk and per-file errors are recoverable: the ingestion loop
//! records them and moves on. Only configuration problems and a missing
//! documents directory abort a run.

use thiserror::Error;

/// Result type alias for docvec operations
pub type Result<T> = std::result::Result<T, DocvecError>;

/// Main error type for docvec
#[derive(Error, Debug)]
pub enum DocvecError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("No text extracted from {0}")]
    EmptyContent(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocvecError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Errors that abort a whole run instead of skipping one file
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DocvecError::ConfigError(_) | DocvecError::DirectoryNotFound(_)
        )
    }

    /// Soft failures: reported, but nothing was attempted
    pub fn is_soft(&self) -> bool {
        matches!(self, DocvecError::EmptyContent(_))
    }
}

impl From<reqwest::Error> for DocvecError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DocvecError::TransportError(format!("Request timed out: {err}"))
        } else {
            DocvecError::TransportError(err.to_string())
        }
    }
}
