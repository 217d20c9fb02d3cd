//! End-to-end chunking pipeline.
//!
//! Dispatch, enrichment and aggregation wired together: caller → router →
//! one strategy → metadata enricher → statistics aggregator → caller. The
//! whole pipeline is synchronous, performs no I/O, and holds no shared
//! mutable state, so callers may process documents in parallel without
//! coordination.

use tracing::info;

use crate::enrichment::enrich_chunks;
use crate::router::ChunkingRouter;
use crate::stats::{aggregate, ChunkStatistics};
use crate::types::{ChunkMetadata, ChunkingError, ChunkingOptions, DocumentInfo, TextChunk};

/// Everything one chunking run produces.
#[derive(Debug)]
pub struct ChunkingOutcome {
    /// Enriched chunks in document order
    pub chunks: Vec<TextChunk>,
    /// Aggregate statistics over the chunk list
    pub statistics: ChunkStatistics,
}

/// Chunk a document's extracted text.
///
/// The only failure surface is option validation; any well-formed text —
/// including the empty string — splits successfully. The returned chunk
/// list is final: indices are contiguous, adjacency links are consistent,
/// and ownership passes to the caller.
pub fn process_document(
    text: &str,
    document: &DocumentInfo,
    options: &ChunkingOptions,
) -> Result<ChunkingOutcome, ChunkingError> {
    let router = ChunkingRouter::new();
    let split = router.split(text, options)?;

    let mut chunks: Vec<TextChunk> = split
        .chunks
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let mut metadata = ChunkMetadata::stamp(document, options, split.effective_overlap);
            metadata.merge_position(&raw.position);

            TextChunk {
                index,
                character_count: raw.text.chars().count(),
                word_count: crate::enrichment::word_count(&raw.text),
                start_index: raw.start_index,
                end_index: raw.end_index,
                text: raw.text,
                metadata,
            }
        })
        .collect();

    enrich_chunks(&mut chunks);
    let statistics = aggregate(&chunks);

    info!(
        file_id = %document.file_id,
        method = %options.method,
        chunks = statistics.total_chunks,
        characters = statistics.total_characters,
        "chunked document"
    );

    Ok(ChunkingOutcome { chunks, statistics })
}
