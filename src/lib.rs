//! Document chunking engine.
//!
//! Splits extracted document text into annotated chunks using one of five
//! strategies (character, sentence, paragraph, markdown, recursive),
//! enriches every chunk with language/script detection, readability
//! scoring and adjacency metadata, and reduces the result to aggregate
//! statistics for downstream storage.

pub mod api;
pub mod chunkers;
pub mod enrichment;
pub mod pipeline;
pub mod router;
pub mod stats;
pub mod types;

pub use chunkers::{Chunker, RawChunk};
pub use enrichment::Language;
pub use pipeline::{process_document, ChunkingOutcome};
pub use router::ChunkingRouter;
pub use stats::ChunkStatistics;
pub use types::{
    ChunkMetadata, ChunkingError, ChunkingMethod, ChunkingOptions, DocumentInfo, TextChunk,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::chunkers::{Chunker, PositionInfo, RawChunk};
    pub use crate::enrichment::Language;
    pub use crate::pipeline::{process_document, ChunkingOutcome};
    pub use crate::router::ChunkingRouter;
    pub use crate::stats::ChunkStatistics;
    pub use crate::types::*;
}

/// Default chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default chunk overlap in characters
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;
