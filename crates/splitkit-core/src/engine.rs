//! One entry point per splitting mode

use crate::chunking::languages::{self, markdown};
use crate::chunking::{
    CharIndex, ChunkAssembler, OffsetTracker, RecursiveSplitter, SeparatorProfile, TextSplitter,
    UnitSplitter, GENERIC,
};
use crate::models::Chunk;
use rayon::prelude::*;
use splitkit_config::{ConfigError, EngineConfig, Language, Result, SplitConfig, SplitMode, Validate};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Splitting mode with the language resolved for code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Generic profile: paragraphs, lines, words, characters
    Recursive,
    /// Caller separators joined into one, no recursion
    Character,
    Markdown,
    Code(Language),
}

impl Mode {
    /// Every mode, in the order reports are produced
    pub const ALL: [Mode; 5] = [
        Mode::Recursive,
        Mode::Character,
        Mode::Markdown,
        Mode::Code(Language::Python),
        Mode::Code(Language::JavaScript),
    ];

    pub const OPTIONS: &'static [&'static str] = &[
        "recursive",
        "character",
        "markdown",
        "python",
        "javascript",
        "code:<language>",
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Recursive => "recursive",
            Mode::Character => "character",
            Mode::Markdown => "markdown",
            Mode::Code(language) => language.name(),
        }
    }

    /// Separator profile driving recursion; `None` for fixed-separator mode
    pub fn profile(&self) -> Option<&'static SeparatorProfile> {
        match self {
            Mode::Recursive => Some(&GENERIC),
            Mode::Character => None,
            Mode::Markdown => Some(&markdown::PROFILE),
            Mode::Code(language) => Some(languages::code_profile(*language)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        if let Some(language) = name.strip_prefix("code:") {
            return Ok(Mode::Code(language.parse()?));
        }
        match name.as_str() {
            "recursive" => Ok(Mode::Recursive),
            "character" | "fixed" | "fixed-separator" => Ok(Mode::Character),
            "markdown" | "md" => Ok(Mode::Markdown),
            other => other
                .parse::<Language>()
                .map(Mode::Code)
                .map_err(|_| ConfigError::invalid_enum("mode", s, Self::OPTIONS)),
        }
    }
}

impl From<&EngineConfig> for Mode {
    fn from(config: &EngineConfig) -> Self {
        match config.mode {
            SplitMode::Recursive => Mode::Recursive,
            SplitMode::Character => Mode::Character,
            SplitMode::Markdown => Mode::Markdown,
            SplitMode::Code => Mode::Code(config.language),
        }
    }
}

/// A validated mode and config pair
#[derive(Debug, Clone)]
pub struct Splitter {
    mode: Mode,
    config: SplitConfig,
}

impl Splitter {
    /// Fails with a configuration error before any text is touched
    pub fn new(mode: Mode, config: SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { mode, config })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }
}

impl TextSplitter for Splitter {
    fn split_text(&self, text: &str) -> Result<Vec<Chunk>> {
        let config = &self.config;
        let index = CharIndex::new(text);

        debug!(
            mode = %self.mode,
            bytes = text.len(),
            chunk_size = config.chunk_size,
            chunk_overlap = config.chunk_overlap,
            "Splitting text"
        );

        let units = match self.mode.profile() {
            Some(profile) => {
                RecursiveSplitter::new(text, &index, config.chunk_size, config.keep_separator)
                    .split(profile.separators)
            }
            None => UnitSplitter::split(text, &config.joined_separator(), config.keep_separator),
        };

        let spans = ChunkAssembler::new(text, &index, config.chunk_size, config.chunk_overlap)
            .skip_blank(config.strip_whitespace)
            .assemble(units);

        let chunks = OffsetTracker::new(text, &index).annotate(
            spans,
            config.strip_whitespace,
            config.add_start_index,
        );

        debug!(mode = %self.mode, chunks = chunks.len(), "Split complete");
        Ok(chunks)
    }
}

/// Split `text` with the given mode
pub fn split(text: &str, mode: Mode, config: &SplitConfig) -> Result<Vec<Chunk>> {
    Splitter::new(mode, config.clone())?.split_text(text)
}

/// Paragraph, line, word, then character boundaries
pub fn split_recursive(text: &str, config: &SplitConfig) -> Result<Vec<Chunk>> {
    split(text, Mode::Recursive, config)
}

/// Split on `config.separators` only; chunks may exceed `chunk_size`
pub fn split_character(text: &str, config: &SplitConfig) -> Result<Vec<Chunk>> {
    split(text, Mode::Character, config)
}

pub fn split_markdown(text: &str, config: &SplitConfig) -> Result<Vec<Chunk>> {
    split(text, Mode::Markdown, config)
}

pub fn split_code(text: &str, language: Language, config: &SplitConfig) -> Result<Vec<Chunk>> {
    split(text, Mode::Code(language), config)
}

/// Result of one mode in [`split_all_modes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeReport {
    pub mode: Mode,
    pub count: usize,
    pub chunks: Vec<Chunk>,
}

impl ModeReport {
    pub fn new(mode: Mode, chunks: Vec<Chunk>) -> Self {
        Self {
            mode,
            count: chunks.len(),
            chunks,
        }
    }

    pub fn summary(&self) -> String {
        format!("Number of chunks: {}", self.count)
    }
}

/// Run every mode over the same text in parallel
///
/// Reports come back in [`Mode::ALL`] order.
pub fn split_all_modes(text: &str, config: &SplitConfig) -> Result<Vec<ModeReport>> {
    config.validate()?;

    Mode::ALL
        .par_iter()
        .map(|&mode| split(text, mode, config).map(|chunks| ModeReport::new(mode, chunks)))
        .collect()
}
