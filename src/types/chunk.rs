//! Chunk type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChunkingMethod, ChunkingOptions};
use crate::chunkers::PositionInfo;
use crate::enrichment::Language;

/// Identity of the document a chunk list is produced from.
///
/// Handed in by the upstream extraction layer and copied verbatim onto
/// every chunk; invariant across all chunks of one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Upload-assigned document id
    pub file_id: Uuid,

    /// Original file name
    pub file_name: String,

    /// Declared file type (e.g. "pdf", "txt", "png")
    pub file_type: String,

    /// When the document was uploaded
    pub uploaded_at: DateTime<Utc>,

    /// Extraction confidence reported upstream (e.g. OCR), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_confidence: Option<f32>,
}

/// One contiguous, annotated slice of a document's extracted text.
///
/// Chunks are immutable once enriched; ownership passes entirely to the
/// caller, which is responsible for persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChunk {
    /// Order of this chunk within its document (0-indexed, no gaps)
    pub index: usize,

    /// Trimmed chunk text. Always equal to the original text sliced by
    /// `start_index..end_index`.
    pub text: String,

    /// Character count of the trimmed text
    pub character_count: usize,

    /// Whitespace-delimited token count
    pub word_count: usize,

    /// Absolute byte offset of the chunk start in the original text
    pub start_index: usize,

    /// Absolute byte offset one past the chunk end in the original text
    pub end_index: usize,

    /// Annotations from the splitting strategy and the metadata enricher
    pub metadata: ChunkMetadata,
}

impl TextChunk {
    /// Check if the chunk is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Metadata attached to a chunk.
///
/// Position fields are owned by the splitting strategies: a strategy sets
/// only the fields it has a structural notion of, and the enricher never
/// invents or overwrites them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkMetadata {
    // Document info, copied verbatim from the caller input
    pub file_id: Uuid,
    pub file_name: String,
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,

    // Chunking info
    pub splitting_method: ChunkingMethod,
    pub chunk_size: usize,
    /// Overlap the caller asked for
    pub requested_overlap: usize,
    /// Overlap the strategy actually applied; boundary-based strategies
    /// always report 0 here
    pub effective_overlap: usize,

    // Position info, set only by strategies with that structural notion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_level: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_header: Option<bool>,

    // Content info
    pub language: Language,
    pub has_arabic: bool,
    pub has_latin_script: bool,
    pub contains_numbers: bool,
    pub contains_urls: bool,

    // Quality
    pub readability_score: f32,
    /// Extraction confidence inherited from the document, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    // Relationships, derived from the chunk's position in the final list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_chunk_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_chunk_index: Option<usize>,

    /// When this chunk was produced
    pub processed_at: DateTime<Utc>,
}

impl ChunkMetadata {
    /// Stamp baseline metadata for a chunk of `document`.
    ///
    /// Content and relationship fields start at their defaults and are
    /// filled in by the enricher.
    pub fn stamp(
        document: &DocumentInfo,
        options: &ChunkingOptions,
        effective_overlap: usize,
    ) -> Self {
        Self {
            file_id: document.file_id,
            file_name: document.file_name.clone(),
            file_type: document.file_type.clone(),
            uploaded_at: document.uploaded_at,
            splitting_method: options.method,
            chunk_size: options.chunk_size,
            requested_overlap: options.chunk_overlap,
            effective_overlap,
            page_number: None,
            paragraph_number: None,
            sentence_number: None,
            section_number: None,
            header_level: None,
            is_header: None,
            language: Language::English,
            has_arabic: false,
            has_latin_script: false,
            contains_numbers: false,
            contains_urls: false,
            readability_score: 0.0,
            confidence: document.extraction_confidence,
            previous_chunk_index: None,
            next_chunk_index: None,
            processed_at: Utc::now(),
        }
    }

    /// Merge position fields reported by a strategy. Fields that already
    /// hold a value win over the incoming ones.
    pub fn merge_position(&mut self, position: &PositionInfo) {
        if self.page_number.is_none() {
            self.page_number = position.page_number;
        }
        if self.paragraph_number.is_none() {
            self.paragraph_number = position.paragraph_number;
        }
        if self.sentence_number.is_none() {
            self.sentence_number = position.sentence_number;
        }
        if self.section_number.is_none() {
            self.section_number = position.section_number;
        }
        if self.header_level.is_none() {
            self.header_level = position.header_level;
        }
        if self.is_header.is_none() {
            self.is_header = position.is_header;
        }
    }
}
