use super::utils::escape_separator;
use anyhow::Result;
use splitkit_core::chunking::languages::all_profiles;

pub fn handle_profiles() -> Result<()> {
    for profile in all_profiles() {
        let separators: Vec<String> = profile
            .separators
            .iter()
            .map(|s| format!("\"{}\"", escape_separator(s)))
            .collect();
        println!("{:<12} {}", profile.kind.to_string(), separators.join(", "));
    }
    Ok(())
}
