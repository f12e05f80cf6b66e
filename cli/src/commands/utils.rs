use anyhow::{Context, Result};
use splitkit_config::{loader::find_default_file, Config, ConfigBuilder};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read the whole input file, or stdin when no path is given
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            debug!("Reading input from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Load `path` if given, otherwise the first default file; env overlays
/// apply in both cases
///
/// Not validated here: command-line overrides still have to be applied, and
/// the splitter validates the final config.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut builder = ConfigBuilder::new();
    match path {
        Some(path) => builder = builder.with_file(path),
        None => {
            if let Some(found) = find_default_file(Path::new(".")) {
                debug!("Using config file {}", found.display());
                builder = builder.with_file(found);
            }
        }
    }
    Ok(builder.with_env().build_unvalidated()?)
}

/// Escape control characters so separators print on one line
pub fn escape_separator(separator: &str) -> String {
    separator.escape_debug().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hello\nworld").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "hello\nworld");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = read_input(Some(Path::new("/nonexistent/input.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input.txt"));
    }

    #[test]
    fn test_load_config_leaves_validation_to_caller() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("wide.toml");
        std::fs::write(&path, "[chunking]\nchunk_overlap = 300\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.chunking.chunk_overlap, 300);
    }

    #[test]
    fn test_escape_separator() {
        assert_eq!(escape_separator("\n## "), "\\n## ");
        assert_eq!(escape_separator(""), "");
    }
}
