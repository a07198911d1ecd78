//! Content fingerprints and the processed-set used for deduplication.
//!
//! A fingerprint is the SHA-256 of a file's raw bytes. The ingestor
//! consults a [`FingerprintStore`] before extracting anything and
//! records a fingerprint once at least one chunk of the file has been
//! accepted. [`ProcessedSet`] is the in-memory store that lives for
//! one run.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;

/// Hex-encoded SHA-256 of a document's raw bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hash raw bytes
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex digits, for log lines
    pub fn short(&self) -> &str {
        &self.0[..12.min(self.0.len())]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage for fingerprints of documents already handled
pub trait FingerprintStore: Send {
    /// Whether this content was already processed
    fn contains(&self, fingerprint: &Fingerprint) -> bool;

    /// Mark content as processed
    fn insert(&mut self, fingerprint: Fingerprint);

    /// Number of fingerprints recorded
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory fingerprint set scoped to a single run
#[derive(Debug, Clone, Default)]
pub struct ProcessedSet {
    seen: HashSet<Fingerprint>,
}

impl ProcessedSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FingerprintStore for ProcessedSet {
    fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.seen.contains(fingerprint)
    }

    fn insert(&mut self, fingerprint: Fingerprint) {
        self.seen.insert(fingerprint);
    }

    fn len(&self) -> usize {
        self.seen.len()
    }
}
