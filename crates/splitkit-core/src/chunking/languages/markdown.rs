use crate::chunking::profile::{ContentKind, SeparatorProfile};

/// Headings largest first, code fences, horizontal rules, list markers,
/// then the generic chain
pub static PROFILE: SeparatorProfile = SeparatorProfile::new(
    ContentKind::Markdown,
    &[
        "\n# ",
        "\n## ",
        "\n### ",
        "\n#### ",
        "\n##### ",
        "\n###### ",
        "```\n",
        "\n***\n",
        "\n---\n",
        "\n___\n",
        "\n- ",
        "\n* ",
        "\n+ ",
        "\n\n",
        "\n",
        " ",
        "",
    ],
);
