//! Document ingestion module.
//!
//! Turns a directory of documents into chunks submitted to the
//! vectorization service:
//!
//! - Recursive discovery filtered by extension
//! - Content fingerprinting to skip duplicate files within a run
//! - Sentence-aware character chunking with overlap
//! - Sequential per-file pipeline with per-chunk failure isolation
//!
//! # Safety
//!
//! The chunker works on character positions and only slices at char
//! boundaries, so multi-byte text never panics.

pub mod chunker;
pub mod fingerprint;
pub mod pipeline;
pub mod walker;

pub use chunker::Chunker;
pub use fingerprint::{Fingerprint, FingerprintStore, ProcessedSet};
pub use pipeline::DocumentIngestor;
pub use walker::FileWalker;
