use crate::chunking::profile::{ContentKind, SeparatorProfile};
use splitkit_config::Language;

/// Class and function definitions, then the generic chain
pub static PROFILE: SeparatorProfile = SeparatorProfile::new(
    ContentKind::Code(Language::Python),
    &["\nclass ", "\ndef ", "\n\tdef ", "\n\n", "\n", " ", ""],
);
