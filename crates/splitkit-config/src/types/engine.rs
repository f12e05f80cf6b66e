//! Engine selection: which splitting mode runs by default

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default mode and code language for the splitting engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Splitting mode used when the caller does not pick one
    #[serde(default)]
    pub mode: SplitMode,

    /// Language table used by `code` mode
    #[serde(default)]
    pub language: Language,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: SplitMode::default(),
            language: Language::default(),
        }
    }
}

impl crate::validation::Validate for EngineConfig {
    fn validate(&self) -> crate::error::Result<()> {
        // Both fields are closed enums; serde already rejected anything else.
        Ok(())
    }
}

/// Splitting strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Paragraph, line, word, character fallback
    #[default]
    Recursive,
    /// Caller-supplied literal separators, no recursion
    Character,
    /// Markdown structure first, then the generic fallback
    Markdown,
    /// Per-language code structure first
    Code,
}

impl SplitMode {
    pub const OPTIONS: &'static [&'static str] = &["recursive", "character", "markdown", "code"];
}

impl FromStr for SplitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recursive" => Ok(SplitMode::Recursive),
            "character" | "fixed" => Ok(SplitMode::Character),
            "markdown" | "md" => Ok(SplitMode::Markdown),
            "code" => Ok(SplitMode::Code),
            _ => Err(ConfigError::invalid_enum("engine.mode", s, Self::OPTIONS)),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SplitMode::Recursive => "recursive",
            SplitMode::Character => "character",
            SplitMode::Markdown => "markdown",
            SplitMode::Code => "code",
        };
        f.write_str(name)
    }
}

/// Programming languages with a separator table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    JavaScript,
}

impl Language {
    pub const ALL: &'static [Language] = &[Language::Python, Language::JavaScript];
    pub const OPTIONS: &'static [&'static str] = &["python", "javascript"];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(ConfigError::invalid_enum(
                "engine.language",
                s,
                Self::OPTIONS,
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
