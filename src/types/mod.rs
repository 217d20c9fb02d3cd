//! Core types for the chunking service.

mod chunk;
mod config;
mod error;
mod options;

pub use chunk::{ChunkMetadata, DocumentInfo, TextChunk};
pub use config::ServiceConfig;
pub use error::ChunkingError;
pub use options::{ChunkingMethod, ChunkingOptions};
