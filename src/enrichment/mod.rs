//! Uniform chunk metadata enrichment.
//!
//! Applied after any splitting strategy, never strategy-specific. The
//! enricher computes content flags, language classification, readability
//! and adjacency links; position fields set by a strategy are left alone.

mod language;

pub use language::{classify_language, has_arabic, has_latin_script, Language};

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::TextChunk;

lazy_static! {
    static ref URL_PATTERN: Regex = Regex::new(r"(?i)https?://|www\.").unwrap();
    static ref DIGIT_PATTERN: Regex = Regex::new(r"[0-9]").unwrap();
}

/// Count whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Cheap ease-of-reading heuristic in `[0, 100]`.
///
/// Longer and denser chunks score lower; this is not a calibrated
/// readability formula.
pub fn readability_score(text: &str) -> f32 {
    let words = word_count(text);
    if words == 0 {
        return 100.0;
    }

    let non_whitespace = text.chars().filter(|c| !c.is_whitespace()).count();
    let average_word_length = non_whitespace as f32 / words as f32;

    (100.0 - words as f32 / 10.0 - average_word_length / 10.0).clamp(0.0, 100.0)
}

/// Enrich every chunk in place.
///
/// Relationship links are derived purely from the chunk's position in the
/// final ordered list, independent of the strategy that produced it.
pub fn enrich_chunks(chunks: &mut [TextChunk]) {
    let total = chunks.len();

    for index in 0..total {
        let chunk = &mut chunks[index];

        chunk.word_count = word_count(&chunk.text);

        chunk.metadata.has_arabic = has_arabic(&chunk.text);
        chunk.metadata.has_latin_script = has_latin_script(&chunk.text);
        chunk.metadata.language = classify_language(&chunk.text);
        chunk.metadata.contains_urls = URL_PATTERN.is_match(&chunk.text);
        chunk.metadata.contains_numbers = DIGIT_PATTERN.is_match(&chunk.text);
        chunk.metadata.readability_score = readability_score(&chunk.text);

        chunk.metadata.previous_chunk_index = index.checked_sub(1);
        chunk.metadata.next_chunk_index = if index + 1 < total {
            Some(index + 1)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChunkMetadata, ChunkingOptions, DocumentInfo};
    use chrono::Utc;
    use uuid::Uuid;

    fn chunk_with_text(index: usize, text: &str) -> TextChunk {
        let document = DocumentInfo {
            file_id: Uuid::new_v4(),
            file_name: "doc.txt".to_string(),
            file_type: "txt".to_string(),
            uploaded_at: Utc::now(),
            extraction_confidence: None,
        };
        let options = ChunkingOptions::with_size(500);
        TextChunk {
            index,
            text: text.to_string(),
            character_count: text.chars().count(),
            word_count: 0,
            start_index: 0,
            end_index: text.len(),
            metadata: ChunkMetadata::stamp(&document, &options, 0),
        }
    }

    #[test]
    fn test_word_count_is_whitespace_delimited() {
        assert_eq!(word_count("one two  three\n four"), 4);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_readability_score_stays_in_range() {
        assert!((0.0..=100.0).contains(&readability_score("Short text.")));

        let dense = "pneumonoultramicroscopicsilicovolcanoconiosis ".repeat(1200);
        assert!((0.0..=100.0).contains(&readability_score(&dense)));
        assert_eq!(readability_score(&dense), 0.0);
    }

    #[test]
    fn test_readability_penalizes_longer_chunks() {
        let short = readability_score("A few small words.");
        let long = readability_score(&"several reasonably sized words here ".repeat(20));
        assert!(short > long);
    }

    #[test]
    fn test_content_flags() {
        let mut chunks = vec![chunk_with_text(
            0,
            "Visit https://example.com or www.example.org, room 42.",
        )];
        enrich_chunks(&mut chunks);

        assert!(chunks[0].metadata.contains_urls);
        assert!(chunks[0].metadata.contains_numbers);
        assert!(chunks[0].metadata.has_latin_script);
        assert!(!chunks[0].metadata.has_arabic);

        let mut plain = vec![chunk_with_text(0, "no links here")];
        enrich_chunks(&mut plain);
        assert!(!plain[0].metadata.contains_urls);
        assert!(!plain[0].metadata.contains_numbers);
    }

    #[test]
    fn test_adjacency_links_at_boundaries() {
        let mut chunks = vec![
            chunk_with_text(0, "first"),
            chunk_with_text(1, "second"),
            chunk_with_text(2, "third"),
        ];
        enrich_chunks(&mut chunks);

        assert_eq!(chunks[0].metadata.previous_chunk_index, None);
        assert_eq!(chunks[0].metadata.next_chunk_index, Some(1));
        assert_eq!(chunks[1].metadata.previous_chunk_index, Some(0));
        assert_eq!(chunks[1].metadata.next_chunk_index, Some(2));
        assert_eq!(chunks[2].metadata.previous_chunk_index, Some(1));
        assert_eq!(chunks[2].metadata.next_chunk_index, None);
    }

    #[test]
    fn test_single_chunk_has_no_neighbors() {
        let mut chunks = vec![chunk_with_text(0, "alone")];
        enrich_chunks(&mut chunks);

        assert_eq!(chunks[0].metadata.previous_chunk_index, None);
        assert_eq!(chunks[0].metadata.next_chunk_index, None);
    }

    #[test]
    fn test_position_fields_are_not_touched() {
        let mut chunks = vec![chunk_with_text(0, "section body")];
        chunks[0].metadata.section_number = Some(7);
        chunks[0].metadata.header_level = Some(2);
        enrich_chunks(&mut chunks);

        assert_eq!(chunks[0].metadata.section_number, Some(7));
        assert_eq!(chunks[0].metadata.header_level, Some(2));
    }

    #[test]
    fn test_arabic_chunk_classification() {
        let mut chunks = vec![chunk_with_text(0, "هذا نص عربي بالكامل")];
        enrich_chunks(&mut chunks);

        assert_eq!(chunks[0].metadata.language, Language::Arabic);
        assert!(chunks[0].metadata.has_arabic);
        assert!(!chunks[0].metadata.has_latin_script);
    }
}
