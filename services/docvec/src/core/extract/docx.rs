//! DOCX text extraction via `docx-rs`.
//!
//! Only body paragraphs are read; each paragraph becomes one line.
//! Tables, headers and footers are ignored.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::core::error::{DocvecError, Result};
use crate::core::types::Document;

use super::TextExtractor;

#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx-rs"
    }

    fn extract(&self, document: &Document) -> Result<String> {
        let docx = docx_rs::read_docx(&document.bytes).map_err(|e| {
            DocvecError::ExtractionFailed(format!(
                "failed to read DOCX {}: {e}",
                document.path.display()
            ))
        })?;

        let mut content = String::new();

        for child in docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                for child in paragraph.children {
                    if let ParagraphChild::Run(run) = child {
                        for child in run.children {
                            if let RunChild::Text(t) = child {
                                content.push_str(&t.text);
                            }
                        }
                    }
                }
                content.push('\n');
            }
        }

        Ok(content)
    }
}
