//! Paragraph-based chunker that respects blank-line boundaries.

use lazy_static::lazy_static;
use regex::Regex;

use super::base::{accumulate_units, Chunker, PositionInfo, RawChunk, Unit};
use crate::types::ChunkingOptions;

lazy_static! {
    /// A blank line: two or more consecutive line breaks.
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"(?:\r?\n){2,}").unwrap();
}

/// Paragraph-based chunker.
///
/// Splits text at blank lines and greedily accumulates whole paragraphs,
/// flushing when the next paragraph would push the chunk past `chunk_size`
/// characters. A single oversized paragraph becomes its own chunk.
/// Paragraph boundaries already supply context, so no character overlap is
/// applied.
pub struct ParagraphChunker;

impl ParagraphChunker {
    /// Create a new paragraph chunker.
    pub fn new() -> Self {
        Self
    }

    /// Split text into paragraph units with absolute offsets.
    fn paragraph_units(text: &str) -> Vec<Unit> {
        let mut units = Vec::new();
        let mut cursor = 0;
        let mut number = 0;

        for separator in PARAGRAPH_BREAK.find_iter(text) {
            if !text[cursor..separator.start()].trim().is_empty() {
                number += 1;
                units.push(Unit {
                    start: cursor,
                    end: separator.start(),
                    number,
                });
            }
            cursor = separator.end();
        }

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

impl Default for ParagraphChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for ParagraphChunker {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn description(&self) -> &'static str {
        "Accumulates whole paragraphs up to the chunk size"
    }

    fn split(&self, text: &str, options: &ChunkingOptions) -> Vec<RawChunk> {
        if text.is_empty() {
            return vec![];
        }

        let units = Self::paragraph_units(text);
        accumulate_units(text, &units, options.chunk_size)
            .into_iter()
            .filter_map(|(start, end, number)| {
                RawChunk::trimmed(text, start, end).map(|chunk| {
                    chunk.with_position(PositionInfo {
                        paragraph_number: Some(number),
                        ..Default::default()
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = ParagraphChunker::new();
        assert!(chunker.split("", &ChunkingOptions::with_size(100)).is_empty());
        assert!(chunker
            .split("\n\n\n\n", &ChunkingOptions::with_size(100))
            .is_empty());
    }

    #[test]
    fn test_single_paragraph_single_chunk() {
        let chunker = ParagraphChunker::new();
        let text = "Just one paragraph\nspanning two lines.";
        let chunks = chunker.split(text, &ChunkingOptions::with_size(100));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert_eq!(chunks[0].position.paragraph_number, Some(1));
    }

    #[test]
    fn test_paragraphs_accumulate_until_full() {
        let chunker = ParagraphChunker::new();
        let text = "First paragraph here.\n\nSecond paragraph here.\n\nThird paragraph here.";
        let chunks = chunker.split(text, &ChunkingOptions::with_size(50));

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].text.contains("First paragraph"));
        assert!(chunks[0].text.contains("Second paragraph"));
        assert_eq!(chunks[1].text, "Third paragraph here.");
        assert_eq!(chunks[1].position.paragraph_number, Some(3));
    }

    #[test]
    fn test_crlf_blank_lines_split_paragraphs() {
        let chunker = ParagraphChunker::new();
        let text = "Windows paragraph one.\r\n\r\nWindows paragraph two.";
        let chunks = chunker.split(text, &ChunkingOptions::with_size(25));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "Windows paragraph one.");
        assert_eq!(chunks[1].text, "Windows paragraph two.");
    }

    #[test]
    fn test_offsets_reslice_the_original_text() {
        let chunker = ParagraphChunker::new();
        let text = "Alpha.\n\n\nBeta gamma.\n\nDelta.";
        let chunks = chunker.split(text, &ChunkingOptions::with_size(12));

        for chunk in &chunks {
            assert_eq!(&text[chunk.start_index..chunk.end_index], chunk.text);
        }
    }
}
