//! Unified service container for docvec
//!
//! Provides shared access to all core services.

use crate::core::client::{ApiClient, ChunkSink};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::extract::ExtractorRegistry;
use crate::core::ingest::{Chunker, DocumentIngestor, FileWalker, ProcessedSet};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Format to extractor mapping
    pub extractors: Arc<ExtractorRegistry>,

    /// Vectorization service client
    pub client: Arc<ApiClient>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(ApiClient::new(&config.api)?);

        Ok(Self {
            config: Arc::new(config),
            extractors: Arc::new(ExtractorRegistry::with_defaults()),
            client,
        })
    }

    /// Create a chunker from the ingest settings
    pub fn create_chunker(&self) -> Result<Chunker> {
        Chunker::new(self.config.ingest.chunk_size, self.config.ingest.overlap)
    }

    /// Create an ingestor submitting to the service client
    ///
    /// Each ingestor starts with an empty processed set, so duplicate
    /// detection spans exactly one run.
    pub fn create_ingestor(&self) -> Result<DocumentIngestor> {
        let sink: Arc<dyn ChunkSink> = self.client.clone();
        self.create_ingestor_with_sink(sink)
    }

    /// Create an ingestor submitting to an arbitrary sink
    pub fn create_ingestor_with_sink(&self, sink: Arc<dyn ChunkSink>) -> Result<DocumentIngestor> {
        let ingest = &self.config.ingest;
        let walker = FileWalker::new(
            ingest.extensions.clone(),
            ingest.exclude_patterns.clone(),
            ingest.max_file_size_mb,
        )?;

        Ok(DocumentIngestor::new(
            self.create_chunker()?,
            walker,
            Arc::clone(&self.extractors),
            sink,
            Box::new(ProcessedSet::new()),
        ))
    }
}
