//! Separator profiles: ordered separator tables per content kind

use splitkit_config::Language;
use std::fmt;

/// What kind of content a profile is tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Generic,
    Markdown,
    Code(Language),
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Generic => f.write_str("generic"),
            ContentKind::Markdown => f.write_str("markdown"),
            ContentKind::Code(language) => write!(f, "{}", language),
        }
    }
}

/// Separators tried coarsest first, ending with `""` (split anywhere)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorProfile {
    pub kind: ContentKind,
    pub separators: &'static [&'static str],
}

impl SeparatorProfile {
    pub const fn new(kind: ContentKind, separators: &'static [&'static str]) -> Self {
        Self { kind, separators }
    }
}

/// Paragraph, line, word, character
pub static GENERIC: SeparatorProfile =
    SeparatorProfile::new(ContentKind::Generic, &["\n\n", "\n", " ", ""]);
