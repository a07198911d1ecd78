//! docvec - document ingestion for a vectorization service
//!
//! Walks a directory of PDF, DOCX, TXT and Markdown files, extracts
//! their text, splits it into overlapping sentence-aware chunks and
//! submits each chunk to an HTTP service that embeds and stores it.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - extract (per-format text extraction)
//!   - ingest (walking, fingerprinting, chunking, pipeline)
//!   - client (vectorization service HTTP client)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)

pub mod cli;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{DocvecError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
