//! Markdown chunker that splits on header lines.

use lazy_static::lazy_static;
use regex::Regex;

use super::base::{Chunker, PositionInfo, RawChunk};
use super::paragraph_chunker::ParagraphChunker;
use crate::types::ChunkingOptions;

lazy_static! {
    /// A header line: one or more `#` at the start of a line, followed by
    /// whitespace.
    static ref HEADER_LINE: Regex = Regex::new(r"(?m)^#+\s").unwrap();
}

/// Markdown chunker producing one chunk per header-delimited section.
///
/// Each section runs from one header line to the next (or to the end of
/// text); the text before the first header forms a preamble section. When
/// the document yields fewer than two sections there is no structure worth
/// keeping, and the chunker delegates entirely to [`ParagraphChunker`].
pub struct MarkdownChunker {
    paragraph_fallback: ParagraphChunker,
}

impl MarkdownChunker {
    /// Create a new markdown chunker.
    pub fn new() -> Self {
        Self {
            paragraph_fallback: ParagraphChunker::new(),
        }
    }

    /// Section boundaries as `(start, header_level)`; the preamble has no
    /// header level.
    fn section_starts(text: &str) -> Vec<(usize, Option<usize>)> {
        let mut starts: Vec<(usize, Option<usize>)> = Vec::new();

        let headers: Vec<(usize, usize)> = HEADER_LINE
            .find_iter(text)
            .map(|m| {
                let level = m.as_str().chars().take_while(|&c| c == '#').count();
                (m.start(), level)
            })
            .collect();

        let preamble_end = headers.first().map(|(start, _)| *start).unwrap_or(text.len());
        if !text[..preamble_end].trim().is_empty() {
            starts.push((0, None));
        }
        for (start, level) in headers {
            starts.push((start, Some(level)));
        }

        starts
    }
}

impl Default for MarkdownChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for MarkdownChunker {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn description(&self) -> &'static str {
        "Header-delimited markdown sections, with paragraph fallback"
    }

    fn split(&self, text: &str, options: &ChunkingOptions) -> Vec<RawChunk> {
        if text.is_empty() {
            return vec![];
        }

        let starts = Self::section_starts(text);
        if starts.len() < 2 {
            return self.paragraph_fallback.split(text, options);
        }

        let mut chunks = Vec::new();
        let mut section_number = 0;
        for (position, &(start, header_level)) in starts.iter().enumerate() {
            let end = starts
                .get(position + 1)
                .map(|(next_start, _)| *next_start)
                .unwrap_or(text.len());

            if let Some(chunk) = RawChunk::trimmed(text, start, end) {
                section_number += 1;
                chunks.push(chunk.with_position(PositionInfo {
                    section_number: Some(section_number),
                    header_level,
                    is_header: header_level.map(|_| true),
                    ..Default::default()
                }));
            }
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = MarkdownChunker::new();
        assert!(chunker.split("", &ChunkingOptions::with_size(100)).is_empty());
    }

    #[test]
    fn test_sections_split_at_headers() {
        let chunker = MarkdownChunker::new();
        let text = "# Introduction\n\nThe intro text.\n\n## Usage\n\nHow to use it.\n\n# Appendix\n\nExtra notes.";
        let chunks = chunker.split(text, &ChunkingOptions::with_size(1000));

        assert_eq!(chunks.len(), 3);
        assert!(chunks[0].text.starts_with("# Introduction"));
        assert!(chunks[1].text.starts_with("## Usage"));
        assert!(chunks[2].text.starts_with("# Appendix"));

        assert_eq!(chunks[0].position.section_number, Some(1));
        assert_eq!(chunks[0].position.header_level, Some(1));
        assert_eq!(chunks[1].position.header_level, Some(2));
        assert_eq!(chunks[1].position.is_header, Some(true));
    }

    #[test]
    fn test_preamble_before_first_header_is_a_section() {
        let chunker = MarkdownChunker::new();
        let text = "Leading text before any header.\n\n# First\n\nBody.";
        let chunks = chunker.split(text, &ChunkingOptions::with_size(1000));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "Leading text before any header.");
        assert_eq!(chunks[0].position.header_level, None);
        assert_eq!(chunks[0].position.is_header, None);
        assert_eq!(chunks[1].position.section_number, Some(2));
    }

    #[test]
    fn test_no_headers_falls_back_to_paragraphs() {
        let chunker = MarkdownChunker::new();
        let paragraph_chunker = ParagraphChunker::new();
        let text = "Plain paragraph one.\n\nPlain paragraph two.\n\nPlain paragraph three.";
        let options = ChunkingOptions::with_size(45);

        let markdown_chunks = chunker.split(text, &options);
        let paragraph_chunks = paragraph_chunker.split(text, &options);

        assert_eq!(markdown_chunks.len(), paragraph_chunks.len());
        for (md, para) in markdown_chunks.iter().zip(&paragraph_chunks) {
            assert_eq!(md.text, para.text);
            assert_eq!(md.start_index, para.start_index);
            assert_eq!(md.end_index, para.end_index);
        }
    }

    #[test]
    fn test_hash_inside_line_is_not_a_header() {
        let chunker = MarkdownChunker::new();
        let text = "Issue #42 is fixed.\n\nSee tag #release for details.";
        let chunks = chunker.split(text, &ChunkingOptions::with_size(1000));

        // No line-leading headers, so the paragraph fallback kicks in.
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].position.section_number.is_none());
    }

    #[test]
    fn test_offsets_reslice_the_original_text() {
        let chunker = MarkdownChunker::new();
        let text = "intro\n\n# A\naaa\n\n## B\nbbb\n";
        let chunks = chunker.split(text, &ChunkingOptions::with_size(1000));

        for chunk in &chunks {
            assert_eq!(&text[chunk.start_index..chunk.end_index], chunk.text);
        }
    }
}
