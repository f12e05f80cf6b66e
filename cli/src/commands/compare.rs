use super::utils::{load_config, read_input};
use super::SplitOverrides;
use anyhow::Result;
use splitkit_core::split_all_modes;
use std::path::Path;

pub fn handle_compare(
    config_path: Option<&Path>,
    file: Option<&Path>,
    overrides: &SplitOverrides,
) -> Result<()> {
    let mut split_config = load_config(config_path)?.chunking;
    overrides.apply(&mut split_config);

    let text = read_input(file)?;
    for report in split_all_modes(&text, &split_config)? {
        println!("{:<12} {}", report.mode.label(), report.summary());
    }

    Ok(())
}
