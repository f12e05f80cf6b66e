//! Hierarchical text chunking
//!
//! Splits a text into bounded, optionally overlapping chunks while keeping
//! the character offset of every chunk in the original input.
//!
//! ```
//! use splitkit_core::{split, Mode, SplitConfig};
//!
//! let config = SplitConfig::new(8, 3);
//! let chunks = split("one two three four", Mode::Recursive, &config)?;
//! assert_eq!(chunks[1].content, "three");
//! assert_eq!(chunks[1].start_index(), Some(8));
//! # Ok::<(), splitkit_config::ConfigError>(())
//! ```

pub mod chunking;
pub mod engine;
pub mod models;

pub use chunking::TextSplitter;
pub use engine::{
    split, split_all_modes, split_character, split_code, split_markdown, split_recursive, Mode,
    ModeReport, Splitter,
};
pub use models::{Chunk, ChunkMetadata};
pub use splitkit_config::{KeepSeparator, Language, SplitConfig};
