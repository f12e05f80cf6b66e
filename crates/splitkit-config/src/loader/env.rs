//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `SPLITKIT_<section>_<field>=value`
//!
//! Examples:
//! - `SPLITKIT_CHUNKING_CHUNK_SIZE=500`
//! - `SPLITKIT_CHUNKING_KEEP_SEPARATOR=end`
//! - `SPLITKIT_CHUNKING_SEPARATORS=\n\n`
//! - `SPLITKIT_ENGINE_MODE=markdown`

use crate::{error::ConfigError, types::*, Config, Result};
use std::env;
use tracing::warn;

const PREFIX: &str = "SPLITKIT_";

/// Overlay the process environment onto `config`
pub fn apply_env(config: &mut Config) -> Result<bool> {
    apply_vars(config, env::vars())
}

/// Overlay an explicit set of variables onto `config`
///
/// Every recognised variable overwrites its field, including values equal to
/// the default. Variables without the `SPLITKIT_` prefix are ignored. Unknown
/// sections or fields are skipped with a warning; malformed values are
/// errors. Returns whether any prefixed variable was seen.
pub fn apply_vars<I>(config: &mut Config, vars: I) -> Result<bool>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut found_any = false;

    for (key, value) in vars.into_iter().filter(|(k, _)| k.starts_with(PREFIX)) {
        found_any = true;
        match apply_env_var(config, &key, &value) {
            Ok(()) => {}
            Err(e @ ConfigError::EnvVarError { .. }) => {
                warn!("Ignoring {}: {}", key, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(found_any)
}

/// Parse configuration from an explicit set of variables on top of defaults
pub fn from_vars<I>(vars: I) -> Result<Option<Config>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut config = Config::default();
    let found_any = apply_vars(&mut config, vars)?;
    Ok(found_any.then_some(config))
}

/// Apply a single environment variable to config
fn apply_env_var(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let key = key.strip_prefix(PREFIX).unwrap_or(key);

    let Some((section, field)) = key.split_once('_') else {
        return Err(ConfigError::EnvVarError {
            var: format!("{}{}", PREFIX, key),
            message: "Expected format: SPLITKIT_<section>_<field>".to_string(),
        });
    };

    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "chunking" => apply_chunking_var(&mut config.chunking, &field, value),
        "engine" => apply_engine_var(&mut config.engine, &field, value),
        _ => Err(ConfigError::EnvVarError {
            var: format!("{}{}", PREFIX, key),
            message: format!("Unknown section: {}", section),
        }),
    }
}

fn apply_chunking_var(config: &mut SplitConfig, field: &str, value: &str) -> Result<()> {
    let var = format!("{}CHUNKING_{}", PREFIX, field.to_uppercase());
    match field {
        "chunk_size" => config.chunk_size = parse_usize(&var, value)?,
        "chunk_overlap" => config.chunk_overlap = parse_usize(&var, value)?,
        "separators" => config.separators = parse_separators(&var, value)?,
        "keep_separator" => config.keep_separator = value.parse()?,
        "add_start_index" => config.add_start_index = parse_bool(&var, value)?,
        "strip_whitespace" => config.strip_whitespace = parse_bool(&var, value)?,
        _ => {
            return Err(ConfigError::EnvVarError {
                var,
                message: format!("Unknown field: {}", field),
            })
        }
    }
    Ok(())
}

fn apply_engine_var(config: &mut EngineConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "mode" => config.mode = value.parse()?,
        "language" => config.language = value.parse()?,
        _ => {
            return Err(ConfigError::EnvVarError {
                var: format!("{}ENGINE_{}", PREFIX, field.to_uppercase()),
                message: format!("Unknown field: {}", field),
            })
        }
    }
    Ok(())
}

fn parse_usize(var: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| ConfigError::ValidationError {
        field: var.to_string(),
        message: format!("Invalid integer: {}", value),
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::ValidationError {
            field: var.to_string(),
            message: format!("Invalid boolean: {}", value),
        }),
    }
}

/// A JSON array of separators, or one escaped literal separator
fn parse_separators(var: &str, value: &str) -> Result<Vec<String>> {
    if value.trim_start().starts_with('[') {
        return serde_json::from_str(value).map_err(|e| ConfigError::ValidationError {
            field: var.to_string(),
            message: format!("Invalid separator list: {}", e),
        });
    }
    Ok(vec![unescape_separator(value)])
}
