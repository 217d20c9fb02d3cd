//! Sentence-based chunker that respects sentence boundaries.

use lazy_static::lazy_static;
use regex::Regex;

use super::base::{accumulate_units, Chunker, PositionInfo, RawChunk, Unit};
use crate::types::ChunkingOptions;

lazy_static! {
    /// Terminal punctuation followed by whitespace or end of text.
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?](\s+|$)").unwrap();
}

/// Sentence-based chunker.
///
/// Splits text into sentences at terminal punctuation and greedily
/// accumulates them: when adding the next sentence would push the chunk
/// past `chunk_size` characters, the accumulated chunk is flushed and a new
/// one starts with that sentence. Sentences are never split internally, so
/// a single oversized sentence becomes its own chunk. Sentence boundaries
/// already supply cross-chunk context, so no character overlap is applied.
pub struct SentenceChunker;

impl SentenceChunker {
    /// Create a new sentence chunker.
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentence units with absolute offsets.
    fn sentence_units(text: &str) -> Vec<Unit> {
        let mut units = Vec::new();
        let mut cursor = 0;
        let mut number = 0;

        for boundary in SENTENCE_END.find_iter(text) {
            let end = boundary.end();
            if !text[cursor..end].trim().is_empty() {
                number += 1;
                units.push(Unit {
                    start: cursor,
                    end,
                    number,
                });
            }
            cursor = end;
        }

        // Trailing text without terminal punctuation forms a final sentence.
        if cursor < text.len() && !text[cursor..].trim().is_empty() {
            number += 1;
            units.push(Unit {
                start: cursor,
                end: text.len(),
                number,
            });
        }

        units
    }
}

impl Default for SentenceChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for SentenceChunker {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn description(&self) -> &'static str {
        "Accumulates whole sentences up to the chunk size"
    }

    fn split(&self, text: &str, options: &ChunkingOptions) -> Vec<RawChunk> {
        if text.is_empty() {
            return vec![];
        }

        let units = Self::sentence_units(text);
        accumulate_units(text, &units, options.chunk_size)
            .into_iter()
            .filter_map(|(start, end, number)| {
                RawChunk::trimmed(text, start, end).map(|chunk| {
                    chunk.with_position(PositionInfo {
                        sentence_number: Some(number),
                        ..Default::default()
                    })
                })
            })
            .collect()
    }
}
