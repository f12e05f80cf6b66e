use crate::chunking::profile::{ContentKind, SeparatorProfile};
use splitkit_config::Language;

/// Declarations, then control flow, then the generic chain
pub static PROFILE: SeparatorProfile = SeparatorProfile::new(
    ContentKind::Code(Language::JavaScript),
    &[
        "\nfunction ",
        "\nconst ",
        "\nlet ",
        "\nvar ",
        "\nclass ",
        "\nif ",
        "\nfor ",
        "\nwhile ",
        "\nswitch ",
        "\ncase ",
        "\ndefault ",
        "\n\n",
        "\n",
        " ",
        "",
    ],
);
