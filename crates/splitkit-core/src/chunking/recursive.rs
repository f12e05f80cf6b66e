//! Recursive subdivision by successively finer separators

use super::offsets::CharIndex;
use super::unit::{Unit, UnitSplitter};
use splitkit_config::KeepSeparator;
use tracing::trace;

/// What to do with a segment that is still too long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStep<'p> {
    /// Split on `separator`, leaving `rest` for pieces that stay oversized
    TryNextSeparator {
        separator: &'p str,
        rest: &'p [&'p str],
    },
    /// No separator left; cut into fixed-length pieces
    FallbackToCharacters,
}

impl<'p> SplitStep<'p> {
    /// First separator in `separators` usable on `segment`
    ///
    /// Separators that never occur in the segment are skipped: splitting on
    /// them would hand back the same segment.
    pub fn next(segment: &str, separators: &'p [&'p str]) -> Self {
        for (i, &separator) in separators.iter().enumerate() {
            if separator.is_empty() || segment.contains(separator) {
                return SplitStep::TryNextSeparator {
                    separator,
                    rest: &separators[i + 1..],
                };
            }
        }
        SplitStep::FallbackToCharacters
    }
}

/// Breaks text into units no longer than `chunk_size` characters
pub struct RecursiveSplitter<'a> {
    text: &'a str,
    index: &'a CharIndex,
    chunk_size: usize,
    keep: KeepSeparator,
}

impl<'a> RecursiveSplitter<'a> {
    pub fn new(text: &'a str, index: &'a CharIndex, chunk_size: usize, keep: KeepSeparator) -> Self {
        Self {
            text,
            index,
            chunk_size,
            keep,
        }
    }

    /// Split the whole text using `separators`, coarsest first
    pub fn split(&self, separators: &[&str]) -> Vec<Unit> {
        let mut units = Vec::new();
        if self.text.is_empty() {
            return units;
        }
        self.split_segment(Unit::new(0, self.text.len()), separators, 0, &mut units);
        units
    }

    fn split_segment(&self, segment: Unit, separators: &[&str], depth: usize, out: &mut Vec<Unit>) {
        if self.index.unit_len(&segment) <= self.chunk_size {
            out.push(segment);
            return;
        }

        match SplitStep::next(segment.as_str(self.text), separators) {
            SplitStep::TryNextSeparator { separator, rest } => {
                trace!(
                    depth,
                    start = segment.start,
                    end = segment.end,
                    separator = ?separator,
                    "splitting segment"
                );
                for unit in UnitSplitter::split_range(self.text, segment, separator, self.keep) {
                    self.split_segment(unit, rest, depth + 1, out);
                }
            }
            SplitStep::FallbackToCharacters => {
                trace!(depth, start = segment.start, end = segment.end, "slicing by characters");
                self.slice(segment, out);
            }
        }
    }

    /// Cut `segment` into consecutive pieces of exactly `chunk_size`
    /// characters; the last piece takes the remainder
    fn slice(&self, segment: Unit, out: &mut Vec<Unit>) {
        let slice = segment.as_str(self.text);
        let mut piece_start = segment.start;

        for (count, (offset, _)) in slice.char_indices().enumerate() {
            if count > 0 && count % self.chunk_size == 0 {
                let boundary = segment.start + offset;
                out.push(Unit::new(piece_start, boundary));
                piece_start = boundary;
            }
        }
        out.push(Unit::new(piece_start, segment.end));
    }
}
