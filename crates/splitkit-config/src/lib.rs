//! Configuration management for splitkit
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Config merging (file + environment + CLI)
//! - Type-safe configuration structs shared with the splitting engine
//!
//! # Example
//!
//! ```no_run
//! use splitkit_config::Config;
//!
//! // Load from default location (.splitkit.{toml,yml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! // Access config values
//! let chunk_size = config.chunking.chunk_size;
//! let mode = config.engine.mode;
//! # Ok::<(), splitkit_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::ConfigBuilder;
pub use types::*;

/// Trait for config validation
pub use validation::Validate;
