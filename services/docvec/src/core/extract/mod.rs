//! Text extraction providers.
//!
//! Each document format maps to at most one [`TextExtractor`]. Which
//! providers exist depends on the build: PDF and DOCX support sit
//! behind the `pdf` and `docx` cargo features. The registry is queried
//! at startup so a missing provider is reported before any file is
//! touched, instead of failing halfway through a run.

#[cfg(feature = "docx")]
pub mod docx;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod text;

use std::collections::HashMap;

use crate::core::error::{DocvecError, Result};
use crate::core::types::{Document, DocumentFormat};

pub use text::PlainTextExtractor;

#[cfg(feature = "docx")]
pub use self::docx::DocxExtractor;
#[cfg(feature = "pdf")]
pub use self::pdf::PdfExtractor;

/// Turns a document's raw bytes into text
pub trait TextExtractor: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Extract the document's text
    fn extract(&self, document: &Document) -> Result<String>;
}

/// Format to provider mapping
#[derive(Default)]
pub struct ExtractorRegistry {
    providers: HashMap<DocumentFormat, Box<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Registry with no providers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every provider this build includes
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        registry.register(DocumentFormat::Txt, Box::new(PlainTextExtractor));
        registry.register(DocumentFormat::Markdown, Box::new(PlainTextExtractor));

        #[cfg(feature = "pdf")]
        registry.register(DocumentFormat::Pdf, Box::new(PdfExtractor));

        #[cfg(feature = "docx")]
        registry.register(DocumentFormat::Docx, Box::new(DocxExtractor));

        registry
    }

    /// Add or replace the provider for a format
    pub fn register(&mut self, format: DocumentFormat, extractor: Box<dyn TextExtractor>) {
        self.providers.insert(format, extractor);
    }

    pub fn is_available(&self, format: DocumentFormat) -> bool {
        self.providers.contains_key(&format)
    }

    /// Formats without a provider
    pub fn missing(&self) -> Vec<DocumentFormat> {
        DocumentFormat::ALL
            .into_iter()
            .filter(|f| !self.is_available(*f))
            .collect()
    }

    /// Provider for a format
    ///
    /// # Errors
    ///
    /// `ExtractionFailed` naming the cargo feature that provides it.
    pub fn get(&self, format: DocumentFormat) -> Result<&dyn TextExtractor> {
        self.providers
            .get(&format)
            .map(|p| &**p)
            .ok_or_else(|| missing_provider(format))
    }

    /// Check that every format in `formats` has a provider
    pub fn ensure_available(&self, formats: &[DocumentFormat]) -> Result<()> {
        match formats.iter().find(|f| !self.is_available(**f)) {
            Some(format) => Err(missing_provider(*format)),
            None => Ok(()),
        }
    }

    /// Extract text with the provider registered for the document's format
    pub fn extract(&self, document: &Document) -> Result<String> {
        let extractor = self.get(document.format)?;
        tracing::debug!(
            "Extracting {:?} with {} extractor",
            document.path,
            extractor.name()
        );
        extractor.extract(document)
    }

    /// Log which formats can be extracted
    pub fn log_capabilities(&self) {
        for format in DocumentFormat::ALL {
            if let Some(p) = self.providers.get(&format) {
                tracing::info!("  {} extractor: {}", format, p.name());
            }
        }

        let missing = self.missing();
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            tracing::warn!("  No extractor for: {}", names.join(", "));
        }
    }
}

fn missing_provider(format: DocumentFormat) -> DocvecError {
    let hint = match format {
        DocumentFormat::Pdf => "rebuild with `--features pdf`",
        DocumentFormat::Docx => "rebuild with `--features docx`",
        DocumentFormat::Txt | DocumentFormat::Markdown => "register a plain text extractor",
    };
    DocvecError::ExtractionFailed(format!("no {format} extractor available ({hint})"))
}
