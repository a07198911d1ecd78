//! Plain text and Markdown extraction.

use crate::core::error::{DocvecError, Result};
use crate::core::types::Document;

use super::TextExtractor;

const UTF8_BOM: &str = "\u{feff}";

/// Reads the file as UTF-8. Markdown is passed through unrendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn extract(&self, document: &Document) -> Result<String> {
        let text = std::str::from_utf8(&document.bytes).map_err(|e| {
            DocvecError::ExtractionFailed(format!(
                "{} is not valid UTF-8: {e}",
                document.path.display()
            ))
        })?;

        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
    }
}
