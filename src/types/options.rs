//! Chunking options and strategy selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ChunkingError;
use crate::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// The splitting strategy applied to a document.
///
/// The set is closed; there is no dynamic strategy registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ChunkingMethod {
    /// Fixed-size sliding window over characters
    Character,
    /// Whole sentences accumulated up to the chunk size
    Sentence,
    /// Whole paragraphs accumulated up to the chunk size
    Paragraph,
    /// Header-delimited markdown sections
    Markdown,
    /// Structure-aware splitting with hard-cut fallback
    Recursive,
}

impl ChunkingMethod {
    /// Parse a method tag. Unrecognized tags resolve to `Recursive`.
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "character" => Self::Character,
            "sentence" => Self::Sentence,
            "paragraph" => Self::Paragraph,
            "markdown" => Self::Markdown,
            _ => Self::Recursive,
        }
    }

    /// Get the wire tag for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
            Self::Markdown => "markdown",
            Self::Recursive => "recursive",
        }
    }
}

impl From<String> for ChunkingMethod {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl fmt::Display for ChunkingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling a single chunking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChunkingOptions {
    /// Target chunk length in characters
    pub chunk_size: usize,

    /// Characters repeated between consecutive chunks.
    ///
    /// Consumed literally only by the character strategy (as a stride
    /// reduction) and by the recursive strategy's forced hard cuts; the
    /// boundary-based strategies ignore it and report an effective overlap
    /// of zero.
    pub chunk_overlap: usize,

    /// Strategy used to split the text
    pub method: ChunkingMethod,
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            method: ChunkingMethod::Recursive,
        }
    }
}

impl ChunkingOptions {
    /// Create options with the given chunk size.
    pub fn with_size(size: usize) -> Self {
        Self {
            chunk_size: size,
            chunk_overlap: 0,
            ..Default::default()
        }
    }

    /// Set the overlap.
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = overlap;
        self
    }

    /// Set the method.
    pub fn with_method(mut self, method: ChunkingMethod) -> Self {
        self.method = method;
        self
    }

    /// Check that the options describe a terminating chunking run.
    ///
    /// Fails with the offending parameter named; values are never silently
    /// clamped.
    pub fn validate(&self) -> Result<(), ChunkingError> {
        if self.chunk_size == 0 {
            return Err(ChunkingError::InvalidChunkSize {
                value: self.chunk_size,
            });
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkingError::InvalidChunkOverlap {
                overlap: self.chunk_overlap,
                chunk_size: self.chunk_size,
            });
        }
        Ok(())
    }
}
