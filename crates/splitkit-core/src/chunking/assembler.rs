//! Greedy merge of units into bounded, overlapping spans

use super::offsets::CharIndex;
use super::unit::Unit;
use std::collections::VecDeque;
use tracing::warn;

/// Packs consecutive units into spans of at most `chunk_size` characters
///
/// A span covers the source text from its first unit's start to its last
/// unit's end, so text between units (dropped separators) is kept inside a
/// chunk and only lost at chunk boundaries.
pub struct ChunkAssembler<'a> {
    text: &'a str,
    index: &'a CharIndex,
    chunk_size: usize,
    chunk_overlap: usize,
    skip_blank: bool,
}

impl<'a> ChunkAssembler<'a> {
    pub fn new(text: &'a str, index: &'a CharIndex, chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            text,
            index,
            chunk_size,
            chunk_overlap,
            skip_blank: false,
        }
    }

    /// Ignore whitespace-only units (they would be stripped anyway)
    pub fn skip_blank(mut self, skip: bool) -> Self {
        self.skip_blank = skip;
        self
    }

    pub fn assemble(&self, units: Vec<Unit>) -> Vec<Unit> {
        let mut spans = Vec::new();
        let mut window: VecDeque<Unit> = VecDeque::new();

        for unit in units {
            if unit.is_empty() || (self.skip_blank && unit.is_blank(self.text)) {
                continue;
            }

            if let Some(first) = window.front() {
                if self.index.span_len(first.start, unit.end) > self.chunk_size {
                    spans.push(self.close(&window));

                    // Keep trailing units as overlap while they fit both the
                    // overlap bound and the room needed for `unit`.
                    while let Some(first) = window.front() {
                        let held = self.span_len(&window);
                        let with_next = self.index.span_len(first.start, unit.end);
                        if held > self.chunk_overlap || with_next > self.chunk_size {
                            window.pop_front();
                        } else {
                            break;
                        }
                    }
                }
            }

            window.push_back(unit);
        }

        if !window.is_empty() {
            spans.push(self.close(&window));
        }

        spans
    }

    fn span_len(&self, window: &VecDeque<Unit>) -> usize {
        match (window.front(), window.back()) {
            (Some(first), Some(last)) => self.index.span_len(first.start, last.end),
            _ => 0,
        }
    }

    fn close(&self, window: &VecDeque<Unit>) -> Unit {
        let len = self.span_len(window);
        if len > self.chunk_size {
            warn!(
                len,
                chunk_size = self.chunk_size,
                "Created a chunk longer than the configured chunk size"
            );
        }
        match (window.front(), window.back()) {
            (Some(first), Some(last)) => Unit::new(first.start, last.end),
            _ => Unit::new(0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::unit::UnitSplitter;
    use pretty_assertions::assert_eq;
    use splitkit_config::KeepSeparator;

    fn assemble<'t>(text: &'t str, separator: &str, size: usize, overlap: usize) -> Vec<&'t str> {
        let index = CharIndex::new(text);
        let units = UnitSplitter::split(text, separator, KeepSeparator::Never);
        ChunkAssembler::new(text, &index, size, overlap)
            .assemble(units)
            .iter()
            .map(|span| span.as_str(text))
            .collect()
    }

    #[test]
    fn test_packs_greedily() {
        assert_eq!(
            assemble("a b c d e", " ", 3, 0),
            vec!["a b", "c d", "e"]
        );
    }

    #[test]
    fn test_overlap_seeds_next_chunk() {
        assert_eq!(
            assemble("one two three four", " ", 8, 3),
            vec!["one two", "three", "four"]
        );
        assert_eq!(
            assemble("a b c d e f", " ", 5, 2),
            vec!["a b c", "c d e", "e f"]
        );
    }

    #[test]
    fn test_overlap_never_exceeds_bound() {
        // "bb cc" would be 5 characters of overlap; only "cc" fits under 4
        assert_eq!(
            assemble("aa bb cc dd", " ", 8, 4),
            vec!["aa bb cc", "cc dd"]
        );
    }

    #[test]
    fn test_oversized_unit_kept_whole() {
        assert_eq!(
            assemble("ab|abcdefgh|cd", "|", 4, 0),
            vec!["ab", "abcdefgh", "cd"]
        );
    }

    #[test]
    fn test_empty_units_skipped() {
        assert_eq!(assemble("a,,,b", ",", 1, 0), vec!["a", "b"]);
    }

    #[test]
    fn test_blank_units_skipped_on_request() {
        let text = "a| |b";
        let index = CharIndex::new(text);
        let units = UnitSplitter::split(text, "|", KeepSeparator::Never);
        let spans = ChunkAssembler::new(text, &index, 1, 0)
            .skip_blank(true)
            .assemble(units);
        let texts: Vec<&str> = spans.iter().map(|s| s.as_str(text)).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_no_units_no_spans() {
        let index = CharIndex::new("");
        assert!(ChunkAssembler::new("", &index, 5, 0).assemble(Vec::new()).is_empty());
    }

    #[test]
    fn test_character_units() {
        assert_eq!(
            assemble("AAAAABBBBBCCCCC", "", 5, 0),
            vec!["AAAAA", "BBBBB", "CCCCC"]
        );
        assert_eq!(assemble("abcdefg", "", 4, 2), vec!["abcd", "cdef", "efg"]);
    }
}
