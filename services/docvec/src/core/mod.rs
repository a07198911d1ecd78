//! Core domain logic (independent of the CLI)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: Config directory resolution
//! - **extract**: Per-format text extraction
//! - **ingest**: File walking, chunking and the ingestion pipeline
//! - **client**: HTTP client for the vectorization service
//! - **services**: Unified service container

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocvecError, Result};
pub use services::Services;
