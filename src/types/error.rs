//! Error types for the chunking core.

use thiserror::Error;

/// Validation failures for chunking options.
///
/// Splitting itself cannot fail for any well-formed string input, so option
/// validation is the only failure surface of the core. Invalid values are
/// rejected up front instead of being clamped: a zero chunk size or an
/// overlap at or above the chunk size would produce a non-advancing stride
/// in the sliding-window paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkingError {
    /// `chunkSize` must be a positive number of characters.
    #[error("invalid chunkSize {value}: must be greater than 0")]
    InvalidChunkSize { value: usize },

    /// `chunkOverlap` must stay strictly below `chunkSize`.
    #[error("invalid chunkOverlap {overlap}: must be in [0, {chunk_size})")]
    InvalidChunkOverlap { overlap: usize, chunk_size: usize },
}
