//! Byte-to-character offset mapping and final chunk annotation

use super::unit::Unit;
use crate::models::Chunk;

/// Maps byte offsets of one text to character offsets
///
/// Built once per request. ASCII text maps one-to-one and stores nothing.
pub struct CharIndex {
    /// Byte offset of every character start; empty for ASCII text
    boundaries: Vec<usize>,
    len_bytes: usize,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        let boundaries = if text.is_ascii() {
            Vec::new()
        } else {
            text.char_indices().map(|(i, _)| i).collect()
        };
        Self {
            boundaries,
            len_bytes: text.len(),
        }
    }

    /// Character offset of the char boundary at byte `byte`
    pub fn char_offset(&self, byte: usize) -> usize {
        if self.boundaries.is_empty() {
            return byte.min(self.len_bytes);
        }
        self.boundaries.partition_point(|&b| b < byte)
    }

    /// Length in characters of the byte range `[start, end)`
    pub fn span_len(&self, start: usize, end: usize) -> usize {
        self.char_offset(end) - self.char_offset(start)
    }

    pub fn unit_len(&self, unit: &Unit) -> usize {
        self.span_len(unit.start, unit.end)
    }
}

/// Turns assembled spans into output chunks
pub struct OffsetTracker<'a> {
    text: &'a str,
    index: &'a CharIndex,
}

impl<'a> OffsetTracker<'a> {
    pub fn new(text: &'a str, index: &'a CharIndex) -> Self {
        Self { text, index }
    }

    /// Cut each span out of the text, optionally trimming it and recording
    /// where its first retained character sits
    ///
    /// Spans left empty by trimming are dropped.
    pub fn annotate(
        &self,
        spans: Vec<Unit>,
        strip_whitespace: bool,
        add_start_index: bool,
    ) -> Vec<Chunk> {
        spans
            .into_iter()
            .filter_map(|span| {
                let raw = span.as_str(self.text);
                let (content, lead) = if strip_whitespace {
                    let left = raw.trim_start();
                    (left.trim_end(), raw.len() - left.len())
                } else {
                    (raw, 0)
                };

                if content.is_empty() {
                    return None;
                }

                let start_index =
                    add_start_index.then(|| self.index.char_offset(span.start + lead));
                Some(Chunk::new(content, start_index))
            })
            .collect()
    }
}
