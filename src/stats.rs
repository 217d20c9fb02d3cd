//! Aggregate statistics over an enriched chunk list.

use serde::{Deserialize, Serialize};

use crate::enrichment::Language;
use crate::types::TextChunk;

/// Summary of one chunking run, handed downstream alongside the chunks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkStatistics {
    /// Number of chunks produced
    pub total_chunks: usize,

    /// Sum of per-chunk character counts
    pub total_characters: usize,

    /// Sum of per-chunk word counts
    pub total_words: usize,

    /// Mean characters per chunk; 0 when there are no chunks
    pub average_chunk_size: f64,

    /// Mean words per chunk; 0 when there are no chunks
    pub average_word_count: f64,

    /// Distinct detected languages, sorted by tag
    pub languages: Vec<Language>,

    /// Chunks flagged as containing Arabic script
    pub arabic_chunks: usize,

    /// Chunks flagged as containing Latin script
    pub latin_chunks: usize,
}

/// Reduce an enriched chunk list to its summary statistics.
pub fn aggregate(chunks: &[TextChunk]) -> ChunkStatistics {
    let total_chunks = chunks.len();
    let total_characters: usize = chunks.iter().map(|c| c.character_count).sum();
    let total_words: usize = chunks.iter().map(|c| c.word_count).sum();

    let (average_chunk_size, average_word_count) = if total_chunks == 0 {
        (0.0, 0.0)
    } else {
        (
            total_characters as f64 / total_chunks as f64,
            total_words as f64 / total_chunks as f64,
        )
    };

    let mut languages: Vec<Language> = Vec::new();
    for chunk in chunks {
        if !languages.contains(&chunk.metadata.language) {
            languages.push(chunk.metadata.language);
        }
    }
    languages.sort_by_key(|language| language.as_str());

    ChunkStatistics {
        total_chunks,
        total_characters,
        total_words,
        average_chunk_size,
        average_word_count,
        languages,
        arabic_chunks: chunks.iter().filter(|c| c.metadata.has_arabic).count(),
        latin_chunks: chunks.iter().filter(|c| c.metadata.has_latin_script).count(),
    }
}
