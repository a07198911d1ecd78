//! PDF text extraction via `pdf-extract`.

use crate::core::error::{DocvecError, Result};
use crate::core::types::Document;

use super::TextExtractor;

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, document: &Document) -> Result<String> {
        // pdf-extract panics on some malformed font tables
        let bytes = document.bytes.as_slice();
        let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| {
                DocvecError::ExtractionFailed(format!(
                    "PDF parser crashed on {}",
                    document.path.display()
                ))
            })?;

        result.map_err(|e| {
            DocvecError::ExtractionFailed(format!(
                "failed to read PDF {}: {e}",
                document.path.display()
            ))
        })
    }
}
