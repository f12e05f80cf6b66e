pub mod assembler;
pub mod languages;
pub mod offsets;
pub mod profile;
pub mod recursive;
pub mod unit;

pub use assembler::ChunkAssembler;
pub use offsets::{CharIndex, OffsetTracker};
pub use profile::{ContentKind, SeparatorProfile, GENERIC};
pub use recursive::{RecursiveSplitter, SplitStep};
pub use splitkit_config::{KeepSeparator, Language, SplitConfig};
pub use unit::{Unit, UnitSplitter};

use crate::models::Chunk;
use splitkit_config::Result;

pub trait TextSplitter {
    fn split_text(&self, text: &str) -> Result<Vec<Chunk>>;
}
