//! Fixed-size character window chunker.

use super::base::{char_count, Chunker, RawChunk};
use crate::types::ChunkingOptions;

/// Character-based chunker producing a fixed-size sliding window.
///
/// The window starts at offset 0, takes `chunk_size` characters, and
/// advances by `chunk_size - chunk_overlap` until the cursor passes the end
/// of the text. This is the only strategy where the overlap is used
/// literally as a stride reduction. Windows that are empty or
/// all-whitespace after trimming are dropped; index renumbering happens at
/// formatting time, so gaps are never exposed.
pub struct CharacterChunker;

impl CharacterChunker {
    /// Create a new character chunker.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CharacterChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for CharacterChunker {
    fn name(&self) -> &'static str {
        "character"
    }

    fn description(&self) -> &'static str {
        "Fixed-size character windows with literal overlap"
    }

    fn effective_overlap(&self, options: &ChunkingOptions) -> usize {
        options.chunk_overlap
    }

    fn split(&self, text: &str, options: &ChunkingOptions) -> Vec<RawChunk> {
        if text.is_empty() {
            return vec![];
        }

        // Byte offset of every character plus a sentinel end, so windows
        // measured in characters can be sliced without walking the text
        // again.
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain([text.len()])
            .collect();
        let total_chars = offsets.len() - 1;

        // Options are validated before dispatch; the guard keeps a direct
        // call with a degenerate overlap from underflowing.
        let stride = if options.chunk_overlap >= options.chunk_size {
            options.chunk_size
        } else {
            options.chunk_size - options.chunk_overlap
        };

        let mut chunks = Vec::new();
        let mut cursor = 0;
        while cursor < total_chars {
            let window_end = (cursor + options.chunk_size).min(total_chars);
            if let Some(chunk) = RawChunk::trimmed(text, offsets[cursor], offsets[window_end]) {
                chunks.push(chunk);
            }
            cursor += stride;
        }

        chunks
    }
}
