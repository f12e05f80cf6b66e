use super::utils::{load_config, read_input};
use super::{CliMode, OutputFormat, SplitOverrides};
use anyhow::Result;
use splitkit_core::{Chunk, Mode, Splitter, TextSplitter};
use std::path::Path;
use tracing::info;

pub fn handle_split(
    config_path: Option<&Path>,
    file: Option<&Path>,
    mode: Option<CliMode>,
    format: OutputFormat,
    overrides: &SplitOverrides,
) -> Result<()> {
    let config = load_config(config_path)?;
    let mode = mode.map(Mode::from).unwrap_or_else(|| Mode::from(&config.engine));

    let mut split_config = config.chunking;
    overrides.apply(&mut split_config);

    let splitter = Splitter::new(mode, split_config)?;
    let text = read_input(file)?;
    let chunks = splitter.split_text(&text)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&chunks)?);
            info!(mode = %mode, "Number of chunks: {}", chunks.len());
        }
        OutputFormat::Text => {
            print!("{}", render_text(&chunks));
            println!("Number of chunks: {}", chunks.len());
        }
    }

    Ok(())
}

fn render_text(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        match chunk.start_index() {
            Some(start) => out.push_str(&format!("--- chunk {} @ {} ---\n", i + 1, start)),
            None => out.push_str(&format!("--- chunk {} ---\n", i + 1)),
        }
        out.push_str(&chunk.content);
        out.push('\n');
    }
    out
}
