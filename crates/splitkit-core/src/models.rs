use serde::{Deserialize, Serialize};

/// One piece of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    #[serde(default)]
    pub metadata: ChunkMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Character offset of `content` in the original text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,
}

impl Chunk {
    pub fn new(content: impl Into<String>, start_index: Option<usize>) -> Self {
        Self {
            content: content.into(),
            metadata: ChunkMetadata { start_index },
        }
    }

    pub fn start_index(&self) -> Option<usize> {
        self.metadata.start_index
    }

    /// Length of the content in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
