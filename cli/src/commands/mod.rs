pub mod compare;
pub mod profiles;
pub mod split;
pub mod utils;

pub use compare::handle_compare;
pub use profiles::handle_profiles;
pub use split::handle_split;

use clap::{Args, Parser, Subcommand, ValueEnum};
use splitkit_config::{unescape_separator, KeepSeparator, Language, SplitConfig};
use splitkit_core::Mode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splitkit")]
#[command(about = "Split text into bounded, overlapping chunks with exact source offsets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a file (or stdin) into chunks
    Split {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Splitting mode; defaults to the configured engine mode
        #[arg(long, value_enum)]
        mode: Option<CliMode>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[command(flatten)]
        overrides: SplitOverrides,
    },
    /// Run every mode on the same input and report chunk counts
    Compare {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        #[command(flatten)]
        overrides: SplitOverrides,
    },
    /// List the built-in separator profiles
    Profiles,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliMode {
    Recursive,
    Character,
    Markdown,
    Python,
    Javascript,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Recursive => Mode::Recursive,
            CliMode::Character => Mode::Character,
            CliMode::Markdown => Mode::Markdown,
            CliMode::Python => Mode::Code(Language::Python),
            CliMode::Javascript => Mode::Code(Language::JavaScript),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Command-line overrides for the `chunking` config section
#[derive(Args, Debug, Default, Clone)]
pub struct SplitOverrides {
    /// Maximum chunk length in characters
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Characters shared by consecutive chunks
    #[arg(long)]
    pub chunk_overlap: Option<usize>,

    /// Separator for character mode; repeat to build a composite separator.
    /// Accepts \n, \t and \r escapes.
    #[arg(long = "separator", value_name = "SEP")]
    pub separators: Vec<String>,

    /// never, start, end (or true/false)
    #[arg(long, value_name = "WHERE")]
    pub keep_separator: Option<KeepSeparator>,

    /// Omit start_index from chunk metadata
    #[arg(long)]
    pub no_start_index: bool,

    /// Keep leading and trailing whitespace in chunks
    #[arg(long)]
    pub no_strip: bool,
}

impl SplitOverrides {
    /// Overwrite every field given on the command line
    pub fn apply(&self, config: &mut SplitConfig) {
        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(overlap) = self.chunk_overlap {
            config.chunk_overlap = overlap;
        }
        if !self.separators.is_empty() {
            config.separators = self
                .separators
                .iter()
                .map(|s| unescape_separator(s))
                .collect();
        }
        if let Some(keep) = self.keep_separator {
            config.keep_separator = keep;
        }
        if self.no_start_index {
            config.add_start_index = false;
        }
        if self.no_strip {
            config.strip_whitespace = false;
        }
    }
}
