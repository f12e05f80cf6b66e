use anyhow::Result;
use pretty_assertions::assert_eq;
use splitkit_core::{
    split, split_all_modes, split_character, split_recursive, Chunk, KeepSeparator, Mode,
    SplitConfig,
};

fn contents(chunks: &[Chunk]) -> Vec<&str> {
    chunks.iter().map(|c| c.content.as_str()).collect()
}

#[test]
fn test_character_fallback_slices_evenly() -> Result<()> {
    let config = SplitConfig {
        chunk_size: 5,
        chunk_overlap: 0,
        separators: vec![String::new()],
        ..Default::default()
    };

    let chunks = split_character("AAAAABBBBBCCCCC", &config)?;
    assert_eq!(contents(&chunks), vec!["AAAAA", "BBBBB", "CCCCC"]);

    let starts: Vec<Option<usize>> = chunks.iter().map(Chunk::start_index).collect();
    assert_eq!(starts, vec![Some(0), Some(5), Some(10)]);

    Ok(())
}

#[test]
fn test_recursive_overlap_and_offsets() -> Result<()> {
    let text = "one two three four";
    let config = SplitConfig {
        chunk_size: 8,
        chunk_overlap: 3,
        keep_separator: KeepSeparator::Never,
        add_start_index: true,
        ..Default::default()
    };

    let chunks = split_recursive(text, &config)?;
    assert_eq!(contents(&chunks), vec!["one two", "three", "four"]);

    for chunk in &chunks {
        let start = chunk.start_index().expect("start index requested");
        let source: String = text.chars().skip(start).take(chunk.len()).collect();
        assert_eq!(source, chunk.content);
    }

    Ok(())
}

#[test]
fn test_empty_input_every_mode() -> Result<()> {
    let config = SplitConfig::new(10, 2);
    for mode in Mode::ALL {
        assert!(split("", mode, &config)?.is_empty(), "{}", mode);
    }
    for report in split_all_modes("", &config)? {
        assert_eq!(report.count, 0);
        assert_eq!(report.summary(), "Number of chunks: 0");
    }
    Ok(())
}

#[test]
fn test_overlap_equal_to_size_is_config_error() {
    let config = SplitConfig::new(10, 10);
    for mode in Mode::ALL {
        let err = split("some text", mode, &config).unwrap_err();
        assert!(err.is_validation(), "{}: {}", mode, err);
    }
}

#[test]
fn test_short_text_single_chunk() -> Result<()> {
    let config = SplitConfig::new(100, 0);
    for mode in Mode::ALL {
        let chunks = split("  just a line  ", mode, &config)?;
        assert_eq!(contents(&chunks), vec!["just a line"], "{}", mode);
        assert_eq!(chunks[0].start_index(), Some(2));
    }
    Ok(())
}

#[test]
fn test_start_index_disabled() -> Result<()> {
    let config = SplitConfig {
        chunk_size: 4,
        add_start_index: false,
        ..Default::default()
    };
    let chunks = split_recursive("abc def ghi", &config)?;
    assert_eq!(contents(&chunks), vec!["abc", "def", "ghi"]);
    assert!(chunks.iter().all(|c| c.start_index().is_none()));

    let json = serde_json::to_value(&chunks[0])?;
    assert!(json["metadata"].get("start_index").is_none());

    Ok(())
}

#[test]
fn test_whitespace_kept_without_strip() -> Result<()> {
    let config = SplitConfig {
        chunk_size: 6,
        strip_whitespace: false,
        keep_separator: KeepSeparator::AtChunkEnd,
        separators: vec![" ".to_string()],
        ..Default::default()
    };
    let chunks = split_character("ab cd ef gh", &config)?;
    assert_eq!(contents(&chunks), vec!["ab cd ", "ef gh"]);
    assert_eq!(chunks[1].start_index(), Some(6));
    Ok(())
}

#[test]
fn test_keep_separator_placement() -> Result<()> {
    let text = "x;y;z";
    let mut config = SplitConfig {
        chunk_size: 2,
        separators: vec![";".to_string()],
        ..Default::default()
    };

    config.keep_separator = KeepSeparator::Never;
    assert_eq!(contents(&split_character(text, &config)?), vec!["x", "y", "z"]);

    config.keep_separator = KeepSeparator::AtChunkStart;
    assert_eq!(contents(&split_character(text, &config)?), vec!["x", ";y", ";z"]);

    config.keep_separator = KeepSeparator::AtChunkEnd;
    assert_eq!(contents(&split_character(text, &config)?), vec!["x;", "y;", "z"]);

    Ok(())
}
