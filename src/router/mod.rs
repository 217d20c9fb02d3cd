//! Chunking strategy dispatch.

use tracing::debug;

use crate::chunkers::{
    CharacterChunker, Chunker, MarkdownChunker, ParagraphChunker, RawChunk, RecursiveChunker,
    SentenceChunker,
};
use crate::types::{ChunkingError, ChunkingMethod, ChunkingOptions};

/// Output of a routed strategy run.
#[derive(Debug)]
pub struct StrategySplit {
    /// Raw chunks in document order, exactly as the strategy produced them
    pub chunks: Vec<RawChunk>,
    /// Overlap the strategy actually applied
    pub effective_overlap: usize,
}

/// Router that selects the splitting strategy for a chunking run.
///
/// The strategy set is fixed and small, so routing is a closed enum match;
/// unrecognized method tags have already collapsed to `Recursive` at the
/// parsing layer. The router owns no state across calls.
pub struct ChunkingRouter {
    character: CharacterChunker,
    sentence: SentenceChunker,
    paragraph: ParagraphChunker,
    markdown: MarkdownChunker,
    recursive: RecursiveChunker,
}

impl ChunkingRouter {
    /// Create a new chunking router.
    pub fn new() -> Self {
        Self {
            character: CharacterChunker::new(),
            sentence: SentenceChunker::new(),
            paragraph: ParagraphChunker::new(),
            markdown: MarkdownChunker::new(),
            recursive: RecursiveChunker::new(),
        }
    }

    /// Get the strategy for the given method.
    pub fn chunker_for(&self, method: ChunkingMethod) -> &dyn Chunker {
        match method {
            ChunkingMethod::Character => &self.character,
            ChunkingMethod::Sentence => &self.sentence,
            ChunkingMethod::Paragraph => &self.paragraph,
            ChunkingMethod::Markdown => &self.markdown,
            ChunkingMethod::Recursive => &self.recursive,
        }
    }

    /// Validate the options and run the selected strategy.
    ///
    /// Fails fast on invalid options — naming the offending parameter —
    /// instead of clamping them. The strategy output is returned with its
    /// ordering untouched.
    pub fn split(
        &self,
        text: &str,
        options: &ChunkingOptions,
    ) -> Result<StrategySplit, ChunkingError> {
        options.validate()?;

        let chunker = self.chunker_for(options.method);
        debug!(
            method = chunker.name(),
            chunk_size = options.chunk_size,
            chunk_overlap = options.chunk_overlap,
            text_len = text.len(),
            "dispatching chunking request"
        );

        Ok(StrategySplit {
            chunks: chunker.split(text, options),
            effective_overlap: chunker.effective_overlap(options),
        })
    }

    /// List all available strategies as `(name, description)` pairs.
    pub fn list_methods(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (self.character.name(), self.character.description()),
            (self.sentence.name(), self.sentence.description()),
            (self.paragraph.name(), self.paragraph.description()),
            (self.markdown.name(), self.markdown.description()),
            (self.recursive.name(), self.recursive.description()),
        ]
    }
}

impl Default for ChunkingRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_method_routes_to_its_chunker() {
        let router = ChunkingRouter::new();

        assert_eq!(router.chunker_for(ChunkingMethod::Character).name(), "character");
        assert_eq!(router.chunker_for(ChunkingMethod::Sentence).name(), "sentence");
        assert_eq!(router.chunker_for(ChunkingMethod::Paragraph).name(), "paragraph");
        assert_eq!(router.chunker_for(ChunkingMethod::Markdown).name(), "markdown");
        assert_eq!(router.chunker_for(ChunkingMethod::Recursive).name(), "recursive");
    }

    #[test]
    fn test_unrecognized_tag_routes_to_recursive() {
        let router = ChunkingRouter::new();
        let method = ChunkingMethod::parse("flux-capacitor");
        assert_eq!(router.chunker_for(method).name(), "recursive");
    }

    #[test]
    fn test_split_rejects_invalid_options() {
        let router = ChunkingRouter::new();

        let err = router
            .split("text", &ChunkingOptions::with_size(0))
            .unwrap_err();
        assert!(matches!(err, ChunkingError::InvalidChunkSize { .. }));

        let err = router
            .split("text", &ChunkingOptions::with_size(10).with_overlap(10))
            .unwrap_err();
        assert!(matches!(err, ChunkingError::InvalidChunkOverlap { .. }));
    }

    #[test]
    fn test_boundary_strategies_report_zero_effective_overlap() {
        let router = ChunkingRouter::new();
        let text = "Some text. More text.";

        for method in [
            ChunkingMethod::Sentence,
            ChunkingMethod::Paragraph,
            ChunkingMethod::Markdown,
        ] {
            let options = ChunkingOptions::with_size(100)
                .with_overlap(40)
                .with_method(method);
            let split = router.split(text, &options).unwrap();
            assert_eq!(split.effective_overlap, 0, "method {method} applied overlap");
        }

        let options = ChunkingOptions::with_size(100)
            .with_overlap(40)
            .with_method(ChunkingMethod::Character);
        assert_eq!(router.split(text, &options).unwrap().effective_overlap, 40);
    }

    #[test]
    fn test_empty_text_yields_no_chunks_for_every_method() {
        let router = ChunkingRouter::new();

        for method in [
            ChunkingMethod::Character,
            ChunkingMethod::Sentence,
            ChunkingMethod::Paragraph,
            ChunkingMethod::Markdown,
            ChunkingMethod::Recursive,
        ] {
            let options = ChunkingOptions::with_size(100).with_method(method);
            let split = router.split("", &options).unwrap();
            assert!(split.chunks.is_empty(), "method {method} chunked empty text");
        }
    }
}
