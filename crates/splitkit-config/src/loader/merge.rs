//! Configuration merging logic
//!
//! Merges configurations from multiple sources with proper precedence.

use crate::{types::*, Config};

/// Merge two configurations, with `overlay` taking precedence
///
/// Only fields where `overlay` differs from the defaults replace the
/// corresponding field in `base`.
pub fn merge(mut base: Config, overlay: Config) -> Config {
    base.chunking = merge_chunking(base.chunking, overlay.chunking);
    base.engine = merge_engine(base.engine, overlay.engine);

    base
}

/// Pick `overlay` when it was set to something other than `default`
fn pick<T: PartialEq>(base: T, overlay: T, default: &T) -> T {
    if overlay != *default {
        overlay
    } else {
        base
    }
}

fn merge_chunking(base: SplitConfig, overlay: SplitConfig) -> SplitConfig {
    let default = SplitConfig::default();
    SplitConfig {
        chunk_size: pick(base.chunk_size, overlay.chunk_size, &default.chunk_size),
        chunk_overlap: pick(base.chunk_overlap, overlay.chunk_overlap, &default.chunk_overlap),
        separators: pick(base.separators, overlay.separators, &default.separators),
        keep_separator: pick(
            base.keep_separator,
            overlay.keep_separator,
            &default.keep_separator,
        ),
        add_start_index: pick(
            base.add_start_index,
            overlay.add_start_index,
            &default.add_start_index,
        ),
        strip_whitespace: pick(
            base.strip_whitespace,
            overlay.strip_whitespace,
            &default.strip_whitespace,
        ),
    }
}

fn merge_engine(base: EngineConfig, overlay: EngineConfig) -> EngineConfig {
    let default = EngineConfig::default();
    EngineConfig {
        mode: pick(base.mode, overlay.mode, &default.mode),
        language: pick(base.language, overlay.language, &default.language),
    }
}
