use splitkit_config::KeepSeparator;

/// Fragment of the input addressed by byte range `[start, end)`
///
/// Offsets are always absolute into the top-level text, never relative to
/// the segment that produced the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub start: usize,
    pub end: usize,
}

impl Unit {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// True when the unit holds nothing but whitespace
    pub fn is_blank(&self, text: &str) -> bool {
        self.as_str(text).trim().is_empty()
    }
}

/// Splits one segment of a text by one separator
pub struct UnitSplitter;

impl UnitSplitter {
    /// Split the whole of `text`
    pub fn split(text: &str, separator: &str, keep: KeepSeparator) -> Vec<Unit> {
        Self::split_range(text, Unit::new(0, text.len()), separator, keep)
    }

    /// Split `segment` of `text` at every occurrence of `separator`
    ///
    /// An empty separator yields one unit per character. Empty units are
    /// kept; callers decide what to do with them.
    pub fn split_range(
        text: &str,
        segment: Unit,
        separator: &str,
        keep: KeepSeparator,
    ) -> Vec<Unit> {
        let slice = segment.as_str(text);
        let base = segment.start;

        if separator.is_empty() {
            return slice
                .char_indices()
                .map(|(i, c)| Unit::new(base + i, base + i + c.len_utf8()))
                .collect();
        }

        let mut units = Vec::new();
        let mut piece_start = base;

        for (offset, matched) in slice.match_indices(separator) {
            let sep_start = base + offset;
            let sep_end = sep_start + matched.len();
            match keep {
                KeepSeparator::Never => {
                    units.push(Unit::new(piece_start, sep_start));
                    piece_start = sep_end;
                }
                KeepSeparator::AtChunkStart => {
                    units.push(Unit::new(piece_start, sep_start));
                    piece_start = sep_start;
                }
                KeepSeparator::AtChunkEnd => {
                    units.push(Unit::new(piece_start, sep_end));
                    piece_start = sep_end;
                }
            }
        }
        units.push(Unit::new(piece_start, segment.end));

        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts<'a>(text: &'a str, units: &[Unit]) -> Vec<&'a str> {
        units.iter().map(|u| u.as_str(text)).collect()
    }

    #[test]
    fn test_never_drops_separator() {
        let text = "a,b,,c";
        let units = UnitSplitter::split(text, ",", KeepSeparator::Never);
        assert_eq!(texts(text, &units), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_at_chunk_start_prefixes() {
        let text = "one\ntwo\nthree";
        let units = UnitSplitter::split(text, "\n", KeepSeparator::AtChunkStart);
        assert_eq!(texts(text, &units), vec!["one", "\ntwo", "\nthree"]);
    }

    #[test]
    fn test_at_chunk_end_suffixes() {
        let text = "one. two. three";
        let units = UnitSplitter::split(text, ". ", KeepSeparator::AtChunkEnd);
        assert_eq!(texts(text, &units), vec!["one. ", "two. ", "three"]);
    }

    #[test]
    fn test_empty_separator_per_character() {
        let text = "héllo";
        let units = UnitSplitter::split(text, "", KeepSeparator::Never);
        assert_eq!(texts(text, &units), vec!["h", "é", "l", "l", "o"]);
        assert_eq!(units[1], Unit::new(1, 3));
    }

    #[test]
    fn test_absent_separator_yields_segment() {
        let text = "no breaks here";
        let units = UnitSplitter::split(text, "\n\n", KeepSeparator::Never);
        assert_eq!(units, vec![Unit::new(0, text.len())]);
    }

    #[test]
    fn test_range_offsets_are_absolute() {
        let text = "skip|a b";
        let units = UnitSplitter::split_range(text, Unit::new(5, 8), " ", KeepSeparator::Never);
        assert_eq!(units, vec![Unit::new(5, 6), Unit::new(7, 8)]);
    }

    #[test]
    fn test_keeping_separators_covers_segment() {
        let text = "x--y--z--";
        for keep in [KeepSeparator::AtChunkStart, KeepSeparator::AtChunkEnd] {
            let units = UnitSplitter::split(text, "--", keep);
            let joined: String = texts(text, &units).concat();
            assert_eq!(joined, text);
        }
    }

    #[test]
    fn test_blank_unit() {
        let text = "a \n b";
        assert!(Unit::new(1, 3).is_blank(text));
        assert!(!Unit::new(0, 2).is_blank(text));
        assert!(Unit::new(2, 2).is_empty());
    }
}
