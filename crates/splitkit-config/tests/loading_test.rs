use anyhow::Result;
use pretty_assertions::assert_eq;
use splitkit_config::{
    loader::{env, merge},
    Config, ConfigBuilder, ErrorFormatter, KeepSeparator, Language, SplitMode,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_same_config_in_every_format() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let toml_path = temp_dir.path().join("a.toml");
    fs::write(
        &toml_path,
        r#"
[chunking]
chunk_size = 120
chunk_overlap = 20
separators = ["\n", " "]
keep_separator = "end"

[engine]
mode = "code"
language = "javascript"
"#,
    )?;

    let yaml_path = temp_dir.path().join("a.yaml");
    fs::write(
        &yaml_path,
        r#"
chunking:
  chunk_size: 120
  chunk_overlap: 20
  separators: ["\n", " "]
  keep_separator: end
engine:
  mode: code
  language: javascript
"#,
    )?;

    let json_path = temp_dir.path().join("a.json");
    fs::write(
        &json_path,
        r#"{
  "chunking": {
    "chunk_size": 120,
    "chunk_overlap": 20,
    "separators": ["\n", " "],
    "keep_separator": "end"
  },
  "engine": { "mode": "code", "language": "javascript" }
}"#,
    )?;

    let from_toml = ConfigBuilder::from_file(&toml_path)?;
    let from_yaml = ConfigBuilder::from_file(&yaml_path)?;
    let from_json = ConfigBuilder::from_file(&json_path)?;

    assert_eq!(from_toml, from_yaml);
    assert_eq!(from_yaml, from_json);
    assert_eq!(from_toml.chunking.joined_separator(), "\n ");
    assert_eq!(from_toml.chunking.keep_separator, KeepSeparator::AtChunkEnd);
    assert_eq!(from_toml.engine.mode, SplitMode::Code);
    assert_eq!(from_toml.engine.language, Language::JavaScript);

    Ok(())
}

#[test]
fn test_layer_precedence() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("layers.yml");
    fs::write(
        &path,
        "chunking:\n  chunk_size: 300\n  chunk_overlap: 30\nengine:\n  mode: markdown\n",
    )?;

    let mut config = ConfigBuilder::from_file(&path)?;

    env::apply_vars(
        &mut config,
        vec![
            ("SPLITKIT_CHUNKING_CHUNK_OVERLAP".to_string(), "45".to_string()),
            ("SPLITKIT_ENGINE_MODE".to_string(), "recursive".to_string()),
        ],
    )?;

    let mut explicit = Config::default();
    explicit.chunking.chunk_size = 200;

    let merged = merge::merge(config, explicit);

    assert_eq!(merged.chunking.chunk_size, 200);
    assert_eq!(merged.chunking.chunk_overlap, 45);
    assert_eq!(merged.engine.mode, SplitMode::Recursive);

    Ok(())
}

#[test]
fn test_env_restores_default_values_over_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("custom.toml");
    fs::write(
        &path,
        "[chunking]\nchunk_overlap = 20\nadd_start_index = false\n",
    )?;

    let mut config = ConfigBuilder::from_file(&path)?;
    assert_eq!(config.chunking.chunk_overlap, 20);
    assert!(!config.chunking.add_start_index);

    let found = env::apply_vars(
        &mut config,
        vec![
            ("SPLITKIT_CHUNKING_CHUNK_OVERLAP".to_string(), "0".to_string()),
            ("SPLITKIT_CHUNKING_ADD_START_INDEX".to_string(), "true".to_string()),
        ],
    )?;

    assert!(found);
    assert_eq!(config.chunking.chunk_overlap, 0);
    assert!(config.chunking.add_start_index);

    Ok(())
}

#[test]
fn test_invalid_file_reports_location() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[chunking]\nchunk_size = \"big\"\n")?;

    let err = ConfigBuilder::from_file(&path).unwrap_err();
    let rendered = ErrorFormatter::plain(&err).format();
    assert!(rendered.contains("broken.toml"), "{}", rendered);

    Ok(())
}

#[test]
fn test_overlap_not_below_size_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("overlap.json");
    fs::write(&path, r#"{"chunking": {"chunk_size": 10, "chunk_overlap": 10}}"#)?;

    let err = ConfigBuilder::from_file(&path).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("chunking.chunk_overlap"));

    Ok(())
}

#[test]
fn test_unknown_mode_suggests_fix() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("mode.yml");
    fs::write(&path, "engine:\n  mode: markdwn\n")?;

    assert!(ConfigBuilder::from_file(&path).is_err());
    assert!("markdwn"
        .parse::<SplitMode>()
        .unwrap_err()
        .to_string()
        .contains("markdown"));

    Ok(())
}
