//! Chunking configuration shared by every splitting mode

use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size, overlap, and separator handling for one chunking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Maximum chunk length in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters shared between consecutive chunks
    ///
    /// Must be strictly smaller than `chunk_size`.
    #[serde(default)]
    pub chunk_overlap: usize,

    /// Literal separators for fixed-separator mode
    ///
    /// Several entries are joined into one composite separator. Ignored by
    /// the profile-driven modes.
    #[serde(default = "default_separators")]
    pub separators: Vec<String>,

    /// Where separator text goes once a split has been made
    #[serde(default)]
    pub keep_separator: KeepSeparator,

    /// Record each chunk's character offset in its metadata
    #[serde(default = "default_true")]
    pub add_start_index: bool,

    /// Trim leading and trailing whitespace from every chunk
    #[serde(default = "default_true")]
    pub strip_whitespace: bool,
}

impl SplitConfig {
    /// Config with the given size and overlap and defaults elsewhere
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            ..Default::default()
        }
    }

    /// The composite separator used by fixed-separator mode
    pub fn joined_separator(&self) -> String {
        self.separators.concat()
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: 0,
            separators: default_separators(),
            keep_separator: KeepSeparator::default(),
            add_start_index: true,
            strip_whitespace: true,
        }
    }
}

impl crate::validation::Validate for SplitConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{validate_below, validate_positive};

        validate_positive("chunking.chunk_size", self.chunk_size, 0)?;
        validate_below(
            "chunking.chunk_overlap",
            self.chunk_overlap,
            "chunk_size",
            self.chunk_size,
        )?;

        Ok(())
    }
}

/// Placement of separator text relative to the pieces it separated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeepSeparator {
    /// Drop the separator at split points
    #[default]
    Never,
    /// Prefix each piece (except the first) with the separator before it
    AtChunkStart,
    /// Suffix each piece (except the last) with the separator after it
    AtChunkEnd,
}

impl KeepSeparator {
    pub const OPTIONS: &'static [&'static str] = &["never", "start", "end", "true", "false"];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeepSeparator::Never => "never",
            KeepSeparator::AtChunkStart => "start",
            KeepSeparator::AtChunkEnd => "end",
        }
    }
}

impl fmt::Display for KeepSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for KeepSeparator {
    fn from(keep: bool) -> Self {
        if keep {
            KeepSeparator::AtChunkStart
        } else {
            KeepSeparator::Never
        }
    }
}

impl FromStr for KeepSeparator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "never" | "false" => Ok(KeepSeparator::Never),
            "start" | "true" => Ok(KeepSeparator::AtChunkStart),
            "end" => Ok(KeepSeparator::AtChunkEnd),
            _ => Err(ConfigError::invalid_enum(
                "chunking.keep_separator",
                s,
                Self::OPTIONS,
            )),
        }
    }
}

impl Serialize for KeepSeparator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KeepSeparator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(keep) => Ok(keep.into()),
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Expand `\n`, `\r`, `\t` and `\\` escapes typed on a command line or in an env var
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn default_chunk_size() -> usize {
    250
}

fn default_separators() -> Vec<String> {
    vec!["\n\n".to_string()]
}

fn default_true() -> bool {
    true
}
