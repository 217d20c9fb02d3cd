//! Splitting strategies for document text.

mod base;
mod character_chunker;
mod markdown_chunker;
mod paragraph_chunker;
mod recursive_chunker;
mod sentence_chunker;

pub use base::{char_count, Chunker, PositionInfo, RawChunk};
pub use character_chunker::CharacterChunker;
pub use markdown_chunker::MarkdownChunker;
pub use paragraph_chunker::ParagraphChunker;
pub use recursive_chunker::RecursiveChunker;
pub use sentence_chunker::SentenceChunker;
