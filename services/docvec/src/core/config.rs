//! Configuration management for docvec.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocvecError, Result};
use crate::core::types::DocumentFormat;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Ingestion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Directory scanned by `docvec run` when none is given
    #[serde(default = "default_documents_dir")]
    pub documents_dir: PathBuf,

    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// File extensions to ingest
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Paths to skip (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Vectorization service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for `POST /process-document` in seconds
    #[serde(default = "default_submit_timeout")]
    pub submit_timeout_sec: u64,

    /// Timeout for `GET /health` in seconds
    #[serde(default = "default_health_timeout")]
    pub health_timeout_sec: u64,
}

// Default value functions
fn default_documents_dir() -> PathBuf {
    PathBuf::from("./documents")
}

fn default_chunk_size() -> usize {
    1000
}

fn default_overlap() -> usize {
    200
}

fn default_extensions() -> Vec<String> {
    DocumentFormat::ALL
        .iter()
        .map(|f| f.extension().to_string())
        .collect()
}

fn default_max_file_size() -> usize {
    100
}

fn default_base_url() -> String {
    "http://localhost:9101".to_string()
}

fn default_submit_timeout() -> u64 {
    300
}

fn default_health_timeout() -> u64 {
    10
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            extensions: default_extensions(),
            exclude_patterns: Vec::new(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            submit_timeout_sec: default_submit_timeout(),
            health_timeout_sec: default_health_timeout(),
        }
    }
}

impl IngestConfig {
    /// Formats named by the configured extensions
    pub fn formats(&self) -> Result<Vec<DocumentFormat>> {
        let mut formats = Vec::new();
        for ext in &self.extensions {
            let format = DocumentFormat::from_extension(ext).ok_or_else(|| {
                DocvecError::ConfigError(format!(
                    "Unsupported extension '{ext}' (supported: {})",
                    default_extensions().join(", ")
                ))
            })?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocvecError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCVEC_CONFIG env var
    /// 2. XDG config file (~/.config/docvec/config.toml)
    /// 3. ./docvec.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCVEC_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("docvec.toml").exists() {
                Self::from_file("docvec.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Ingest configuration
        if let Ok(dir) = env::var("DOCVEC_DOCUMENTS_DIR") {
            self.ingest.documents_dir = PathBuf::from(dir);
        }
        if let Ok(chunk_size) = env::var("DOCVEC_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.ingest.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("DOCVEC_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.ingest.overlap = o;
            }
        }
        if let Ok(max_size) = env::var("DOCVEC_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.ingest.max_file_size_mb = size;
            }
        }

        // API configuration
        if let Ok(url) = env::var("DOCVEC_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = env::var("DOCVEC_SUBMIT_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.api.submit_timeout_sec = t;
            }
        }
        if let Ok(timeout) = env::var("DOCVEC_HEALTH_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.api.health_timeout_sec = t;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ingest.chunk_size == 0 {
            return Err(DocvecError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.ingest.extensions.is_empty() {
            return Err(DocvecError::ConfigError(
                "At least one file extension is required".to_string(),
            ));
        }
        self.ingest.formats()?;

        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DocvecError::ConfigError(format!(
                "API base URL must start with http:// or https:// (got '{url}')"
            )));
        }

        if self.api.submit_timeout_sec == 0 {
            return Err(DocvecError::ConfigError(
                "Submit timeout must be non-zero".to_string(),
            ));
        }

        if self.api.health_timeout_sec == 0 {
            return Err(DocvecError::ConfigError(
                "Health timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Documents dir: {:?}", self.ingest.documents_dir);
        tracing::info!("  Chunk size: {} chars", self.ingest.chunk_size);
        tracing::info!("  Overlap: {} chars", self.ingest.overlap);
        if self.ingest.overlap >= self.ingest.chunk_size {
            tracing::warn!(
                "  Overlap >= chunk size: chunks will advance one character at a time"
            );
        }
        tracing::info!("  Extensions: {}", self.ingest.extensions.join(", "));
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.ingest.exclude_patterns.len()
        );
        tracing::info!("  Max file size: {} MB", self.ingest.max_file_size_mb);
        tracing::info!("  API base URL: {}", self.api.base_url);
        tracing::info!("  Submit timeout: {}s", self.api.submit_timeout_sec);
        tracing::info!("  Health timeout: {}s", self.api.health_timeout_sec);
    }
}
