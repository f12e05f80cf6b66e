//! JSON format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from JSON string
pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse configuration from JSON string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    serde_json::from_str(content).map_err(|e| ConfigError::from_json_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_json() {
        let json = r#" {
            "chunking": {
                "separators": [".", "!"],
                "add_start_index": false
            }
        }"#;
        let config = parse(json).unwrap();
        assert_eq!(config.chunking.separators, vec![".", "!"]);
        assert!(!config.chunking.add_start_index);
        assert!(config.chunking.strip_whitespace);
    }

    #[test]
    fn test_parse_error_points_at_column() {
        let json = "{\n  \"chunking\": {\n    \"chunk_size\": ,\n  }\n}";
        let err = parse(json).unwrap_err();
        match err {
            ConfigError::JsonError { context, .. } => assert!(context.contains('^')),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
