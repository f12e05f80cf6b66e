//! Configuration type definitions
//!
//! Each section is self-contained with validation and defaults.

pub mod chunking;
pub mod engine;

// Re-export all types for convenience
pub use chunking::{unescape_separator, KeepSeparator, SplitConfig};
pub use engine::{EngineConfig, Language, SplitMode};

use serde::{Deserialize, Serialize};

/// Top-level configuration aggregating all sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Chunk size, overlap, and separator handling
    #[serde(default)]
    pub chunking: SplitConfig,

    /// Default splitting mode
    #[serde(default)]
    pub engine: EngineConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.chunking.validate()?;
        self.engine.validate()?;

        Ok(())
    }
}
