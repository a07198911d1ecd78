//! Boundary-aware, UTF-8 safe text chunking.
//!
//! Splits text into windows of at most `chunk_size` characters,
//! pulling each window end back to the nearest sentence or paragraph
//! boundary when one is close enough. Consecutive windows overlap by
//! `overlap` characters so context survives the split.
//!
//! All sizes are measured in characters. Windows are cut on
//! `char_indices()` boundaries, so multi-byte sequences are never
//! split.
//!
//! # Example
//!
//! ```
//! use docvec::core::ingest::Chunker;
//!
//! let chunker = Chunker::new(1000, 200).unwrap();
//! let text = "A. ".repeat(500);
//! let chunks = chunker.chunk_text(&text, "letters.txt");
//!
//! // The first window ends on ". " instead of a hard cut at 1000
//! assert_eq!(chunks[0].end_offset, 999);
//! assert_eq!(chunks[0].label(), "letters.txt [Chunk 1]");
//! ```

use crate::core::error::{DocvecError, Result};
use crate::core::types::Chunk;

/// Break markers, in priority order.
///
/// The first marker with an acceptable match wins, even if a later
/// marker occurs closer to the window end.
pub const BOUNDARY_MARKERS: [&str; 4] = [". ", "! ", "? ", "\n\n"];

/// How far back from the tentative end to look for a marker
pub const BOUNDARY_SEARCH_WINDOW: usize = 200;

/// A marker must start less than this many characters before the
/// tentative end to be used
pub const MAX_BOUNDARY_BACKTRACK: usize = 100;

/// Boundary-aware text chunker.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Maximum number of characters per chunk
    chunk_size: usize,

    /// Number of characters repeated at the start of the next chunk
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker.
    ///
    /// `overlap >= chunk_size` is accepted: every window still
    /// advances by at least one character.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `chunk_size` is 0.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(DocvecError::ConfigError(
                "chunk_size must be > 0".to_string(),
            ));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Get the chunk size in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap size in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Chunk text into overlapping, trimmed segments.
    ///
    /// Text no longer than `chunk_size` comes back as one chunk. Longer
    /// text is cut into windows; windows that are blank after trimming
    /// are dropped but still advance the cursor.
    ///
    /// Offsets on the returned chunks are byte offsets of the window
    /// each chunk was cut from (before trimming), so they are strictly
    /// increasing and always fall on character boundaries.
    pub fn chunk_text(&self, text: &str, source: &str) -> Vec<Chunk> {
        // (byte offset, char) pairs; every index into this vector is a
        // character position
        let char_indices: Vec<(usize, char)> = text.char_indices().collect();
        let len = char_indices.len();

        let byte_at = |idx: usize| -> usize {
            if idx < len {
                char_indices[idx].0
            } else {
                text.len()
            }
        };

        let mut chunks = Vec::new();

        if len <= self.chunk_size {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                chunks.push(Chunk {
                    text: trimmed.to_string(),
                    source: source.to_string(),
                    start_offset: 0,
                    end_offset: text.len(),
                    chunk_index: 0,
                });
            }
            return chunks;
        }

        let mut start = 0;
        while start < len {
            let mut end = start + self.chunk_size;
            if end < len {
                end = find_break(&char_indices, start, end);
            }

            // `end` may run past the text; only the slice is clamped,
            // the advance below uses the unclamped value
            let byte_start = byte_at(start);
            let byte_end = byte_at(end.min(len));
            let window = text[byte_start..byte_end].trim();

            if !window.is_empty() {
                chunks.push(Chunk {
                    text: window.to_string(),
                    source: source.to_string(),
                    start_offset: byte_start,
                    end_offset: byte_end,
                    chunk_index: chunks.len(),
                });
            }

            start = (start + 1).max(end.saturating_sub(self.overlap));
        }

        chunks
    }

    /// Chunk text and keep only the strings.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.chunk_text(text, "")
            .into_iter()
            .map(|chunk| chunk.text)
            .collect()
    }
}

/// Split `text` into chunks of at most `chunk_size` characters with
/// `overlap` characters of shared context.
pub fn chunk(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>> {
    Ok(Chunker::new(chunk_size, overlap)?.split(text))
}

/// Pick the window end for `[start, end)`, `end` being before the end
/// of the text.
fn find_break(chars: &[(usize, char)], start: usize, end: usize) -> usize {
    let search_start = start.max(end.saturating_sub(BOUNDARY_SEARCH_WINDOW));

    for marker in BOUNDARY_MARKERS {
        let marker: Vec<char> = marker.chars().collect();
        if let Some(pos) = rfind_chars(chars, &marker, search_start, end) {
            if pos + MAX_BOUNDARY_BACKTRACK > end {
                return pos + marker.len();
            }
        }
    }

    end
}

/// Last position `p` in `[from, to)` where `marker` occurs entirely
/// within `[from, to)`.
fn rfind_chars(chars: &[(usize, char)], marker: &[char], from: usize, to: usize) -> Option<usize> {
    if to < from + marker.len() {
        return None;
    }

    (from..=to - marker.len()).rev().find(|&pos| {
        marker
            .iter()
            .enumerate()
            .all(|(k, c)| chars[pos + k].1 == *c)
    })
}
