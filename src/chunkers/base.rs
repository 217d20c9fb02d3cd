//! Base trait and shared helpers for all chunkers.

use crate::types::ChunkingOptions;

/// The core trait every splitting strategy implements.
///
/// A chunker partitions a document's extracted text into ordered raw chunks
/// carrying absolute offsets into the original text. Metadata enrichment
/// happens later and uniformly; a strategy only sets the position fields it
/// has a structural notion of.
pub trait Chunker: Send + Sync {
    /// Get the name of this chunker.
    fn name(&self) -> &'static str;

    /// Get the description of this chunker.
    fn description(&self) -> &'static str {
        "A text chunker"
    }

    /// Split `text` into ordered raw chunks.
    ///
    /// Splitting never fails: the empty string yields zero chunks, and any
    /// other well-formed input yields a list in document order.
    fn split(&self, text: &str, options: &ChunkingOptions) -> Vec<RawChunk>;

    /// Overlap this strategy actually applies between consecutive chunks.
    ///
    /// Boundary-based strategies already supply context through whole
    /// sentences, paragraphs or sections, so they report 0 regardless of
    /// the requested value.
    fn effective_overlap(&self, options: &ChunkingOptions) -> usize {
        let _ = options;
        0
    }
}

/// Strategy output before metadata enrichment.
///
/// The text is the trimmed slice `original[start_index..end_index]`;
/// offsets are byte offsets into the original document text and stay valid
/// through any recursive splitting or merging because they are carried
/// structurally, never rediscovered by searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    /// Trimmed chunk text
    pub text: String,

    /// Absolute byte offset of the chunk start in the original text
    pub start_index: usize,

    /// Absolute byte offset one past the chunk end in the original text
    pub end_index: usize,

    /// Structural position reported by the strategy
    pub position: PositionInfo,
}

impl RawChunk {
    /// Build a chunk from a slice of the original text, trimming
    /// surrounding whitespace and adjusting the offsets to match.
    ///
    /// Returns `None` when nothing but whitespace remains, so callers can
    /// drop empty windows without special-casing.
    pub fn trimmed(original: &str, start: usize, end: usize) -> Option<Self> {
        let slice = &original[start..end];
        let stripped = slice.trim();
        if stripped.is_empty() {
            return None;
        }

        let leading = slice.len() - slice.trim_start().len();
        let start = start + leading;
        Some(Self {
            text: stripped.to_string(),
            start_index: start,
            end_index: start + stripped.len(),
            position: PositionInfo::default(),
        })
    }

    /// Attach position information.
    pub fn with_position(mut self, position: PositionInfo) -> Self {
        self.position = position;
        self
    }
}

/// Structural position fields a strategy may attach to a chunk.
///
/// Every field is optional; a strategy fills in only what it actually
/// derives from the document structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionInfo {
    pub page_number: Option<usize>,
    pub paragraph_number: Option<usize>,
    pub sentence_number: Option<usize>,
    pub section_number: Option<usize>,
    pub header_level: Option<usize>,
    pub is_header: Option<bool>,
}

/// Count the characters of a text segment.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// A structural unit (sentence or paragraph) with absolute byte offsets
/// and its 1-based number within the document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unit {
    pub start: usize,
    pub end: usize,
    pub number: usize,
}

/// Greedily pack consecutive units into groups whose trimmed combined
/// length stays within `chunk_size` characters.
///
/// A group is flushed when adding the next unit would overflow; a single
/// unit larger than `chunk_size` still forms its own group, since units are
/// never split internally. Returns `(start, end, first_unit_number)` per
/// group, spanning the original text so the units stay joined exactly as
/// they appear in the document.
pub(crate) fn accumulate_units(
    text: &str,
    units: &[Unit],
    chunk_size: usize,
) -> Vec<(usize, usize, usize)> {
    let mut groups = Vec::new();
    let mut current: Option<(usize, usize, usize)> = None;

    for unit in units {
        current = match current {
            None => Some((unit.start, unit.end, unit.number)),
            Some((start, end, number)) => {
                let combined = text[start..unit.end].trim();
                if char_count(combined) > chunk_size {
                    groups.push((start, end, number));
                    Some((unit.start, unit.end, unit.number))
                } else {
                    Some((start, unit.end, number))
                }
            }
        };
    }

    if let Some(group) = current {
        groups.push(group);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_adjusts_offsets() {
        let text = "ab  hello world  cd";
        let chunk = RawChunk::trimmed(text, 2, 17).unwrap();
        assert_eq!(chunk.text, "hello world");
        assert_eq!(chunk.start_index, 4);
        assert_eq!(chunk.end_index, 15);
        assert_eq!(&text[chunk.start_index..chunk.end_index], "hello world");
    }

    #[test]
    fn test_trimmed_drops_whitespace_only_slices() {
        assert!(RawChunk::trimmed("a   b", 1, 4).is_none());
        assert!(RawChunk::trimmed("", 0, 0).is_none());
    }

    #[test]
    fn test_accumulate_units_flushes_on_overflow() {
        let text = "aaaa bbbb cccc";
        let units = vec![
            Unit { start: 0, end: 5, number: 1 },
            Unit { start: 5, end: 10, number: 2 },
            Unit { start: 10, end: 14, number: 3 },
        ];

        let groups = accumulate_units(text, &units, 9);
        assert_eq!(groups, vec![(0, 10, 1), (10, 14, 3)]);
    }

    #[test]
    fn test_accumulate_units_keeps_oversized_unit_whole() {
        let text = "tiny enormous-unit-text tiny";
        let units = vec![
            Unit { start: 0, end: 5, number: 1 },
            Unit { start: 5, end: 24, number: 2 },
            Unit { start: 24, end: 28, number: 3 },
        ];

        let groups = accumulate_units(text, &units, 8);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1], (5, 24, 2));
    }
}
