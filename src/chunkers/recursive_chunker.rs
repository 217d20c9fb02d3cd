//! Recursive chunker with hierarchical splitting and positional tracking.

use super::base::{char_count, Chunker, RawChunk};
use crate::types::ChunkingOptions;

/// Separator priority, coarsest structure first.
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

/// Recursive chunker that splits text hierarchically.
///
/// For each segment the first separator (in priority order) actually
/// present wins. The segment is split into fragments whose absolute
/// offsets are derived from the separator positions themselves — offsets
/// are carried structurally through every split and merge, never
/// rediscovered by searching for fragment text, since repeated content
/// would make such a search ambiguous.
///
/// Fragments individually smaller than `chunk_size` are greedily merged
/// back together (spanning the original text, which reinstates the
/// separators between them); a fragment at or above `chunk_size` recurses
/// with the next separator. Only when every separator is exhausted does the
/// chunker fall back to forced hard cuts of exactly `chunk_size`
/// characters, and only there is the configured overlap consumed.
pub struct RecursiveChunker;

impl RecursiveChunker {
    /// Create a new recursive chunker.
    pub fn new() -> Self {
        Self
    }

    /// Split the segment `text[start..end]`, appending `(start, end)` byte
    /// ranges of the resulting pieces to `out` in document order.
    ///
    /// `depth` indexes into [`SEPARATORS`]; recursion is bounded by the
    /// separator list length.
    fn split_segment(
        &self,
        text: &str,
        start: usize,
        end: usize,
        options: &ChunkingOptions,
        depth: usize,
        out: &mut Vec<(usize, usize)>,
    ) {
        let segment = &text[start..end];
        if segment.trim().is_empty() {
            return;
        }
        if char_count(segment) <= options.chunk_size {
            out.push((start, end));
            return;
        }

        // First separator actually present in this segment wins, by
        // priority rather than frequency.
        let mut level = depth;
        let separator = loop {
            match SEPARATORS.get(level) {
                Some(candidate) if segment.contains(candidate) => break Some(*candidate),
                Some(_) => level += 1,
                None => break None,
            }
        };
        let Some(separator) = separator else {
            self.hard_cut(text, start, end, options, out);
            return;
        };

        // Structural split: fragment offsets fall out of the separator
        // match positions.
        let mut fragments: Vec<(usize, usize)> = Vec::new();
        let mut cursor = start;
        for (position, _) in segment.match_indices(separator) {
            let fragment_end = start + position;
            if fragment_end > cursor {
                fragments.push((cursor, fragment_end));
            }
            cursor = start + position + separator.len();
        }
        if cursor < end {
            fragments.push((cursor, end));
        }

        // Greedily merge consecutive small fragments; recurse into
        // oversized ones with the next separator.
        let mut group: Option<(usize, usize)> = None;
        for &(fragment_start, fragment_end) in &fragments {
            if char_count(&text[fragment_start..fragment_end]) >= options.chunk_size {
                if let Some(pending) = group.take() {
                    out.push(pending);
                }
                self.split_segment(text, fragment_start, fragment_end, options, level + 1, out);
                continue;
            }

            group = match group {
                None => Some((fragment_start, fragment_end)),
                Some((group_start, group_end)) => {
                    if char_count(&text[group_start..fragment_end]) <= options.chunk_size {
                        Some((group_start, fragment_end))
                    } else {
                        out.push((group_start, group_end));
                        Some((fragment_start, fragment_end))
                    }
                }
            };
        }
        if let Some(pending) = group {
            out.push(pending);
        }
    }

    /// Forced fixed-length cuts for a segment with no usable separator.
    ///
    /// Emits exactly `chunk_size` characters per cut and resumes
    /// `chunk_overlap` characters back, so consecutive cuts share context.
    /// Iterative on purpose: the number of cuts grows with the text, and
    /// must not grow the stack with it.
    fn hard_cut(
        &self,
        text: &str,
        start: usize,
        end: usize,
        options: &ChunkingOptions,
        out: &mut Vec<(usize, usize)>,
    ) {
        let offsets: Vec<usize> = text[start..end]
            .char_indices()
            .map(|(i, _)| start + i)
            .chain([end])
            .collect();
        let total_chars = offsets.len() - 1;

        // Positive after option validation.
        let stride = (options.chunk_size - options.chunk_overlap).max(1);

        let mut cursor = 0;
        while cursor < total_chars {
            let cut_end = (cursor + options.chunk_size).min(total_chars);
            out.push((offsets[cursor], offsets[cut_end]));
            if cut_end >= total_chars {
                break;
            }
            cursor += stride;
        }
    }
}

impl Default for RecursiveChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for RecursiveChunker {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn description(&self) -> &'static str {
        "Hierarchical splitting along document structure, hard cuts as a last resort"
    }

    fn effective_overlap(&self, options: &ChunkingOptions) -> usize {
        options.chunk_overlap
    }

    fn split(&self, text: &str, options: &ChunkingOptions) -> Vec<RawChunk> {
        if text.trim().is_empty() {
            return vec![];
        }

        let mut pieces = Vec::new();
        self.split_segment(text, 0, text.len(), options, 0, &mut pieces);

        pieces
            .into_iter()
            .filter_map(|(start, end)| RawChunk::trimmed(text, start, end))
            .collect()
    }
}
