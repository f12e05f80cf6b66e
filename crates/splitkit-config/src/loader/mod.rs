//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

use crate::{Config, Result, Validate};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names searched by [`Config::load`], in order
pub const DEFAULT_PATHS: &[&str] = &[
    ".splitkit.toml",
    ".splitkit.yml",
    ".splitkit.yaml",
    ".splitkit.json",
];

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Load from a file
    File(PathBuf),
    /// Load from environment variables
    Environment,
    /// Explicit config object (command-line overrides, programmatic use)
    Explicit(Config),
}

/// Builder for loading and merging configurations
///
/// Supports layered configuration with proper precedence:
/// defaults < file < environment < explicit overrides
///
/// # Example
///
/// ```no_run
/// use splitkit_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".splitkit.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), splitkit_config::error::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    /// Create a new config builder starting with defaults
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Add environment variable overlay
    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    /// Add explicit config overlay
    pub fn with_config(mut self, config: Config) -> Self {
        self.sources.push(ConfigSource::Explicit(config));
        self
    }

    /// Build and validate the final configuration
    ///
    /// Merges all sources in order, with later sources taking precedence.
    pub fn build(self) -> Result<Config> {
        let config = self.build_unvalidated()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge all sources without checking cross-field invariants
    ///
    /// For callers that apply further overrides and validate afterwards.
    /// Files are still parsed strictly; only the final `Validate` pass is
    /// skipped.
    pub fn build_unvalidated(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            match source {
                ConfigSource::File(path) => {
                    debug!("Loading config from {}", path.display());
                    let file_config = file::parse_file(&path)?;
                    config = merge::merge(config, file_config);
                }
                ConfigSource::Environment => {
                    // Applied in place so a variable can restore a default value
                    if env::apply_env(&mut config)? {
                        debug!("Applied environment overrides");
                    }
                }
                ConfigSource::Explicit(explicit_config) => {
                    config = merge::merge(config, explicit_config);
                }
            }
        }

        Ok(config)
    }

    /// Load from a single file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        Self::new().with_file(path).build()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// First default config file present in `dir`
pub fn find_default_file(dir: &Path) -> Option<PathBuf> {
    DEFAULT_PATHS
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Uses the first of `.splitkit.toml`, `.splitkit.yml`, `.splitkit.yaml`
    /// and `.splitkit.json` found in the working directory, falling back to
    /// defaults. Environment overlays are applied on top.
    pub fn load() -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = find_default_file(Path::new(".")) {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }

    /// Load configuration from a specific file
    ///
    /// Also applies environment variable overlays.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
