use serde::{Deserialize, Serialize};

/// Source attribution carried by every chunk.
///
/// Populated at ingestion time from the page the chunk was cut from and
/// propagated unchanged through retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkMetadata {
    pub page_id: String,
    pub page_title: String,
    pub page_url: String,
    /// Last modification timestamp as reported by the document source.
    pub last_modified: Option<String>,
    pub space_key: Option<String>,
    pub space_name: Option<String>,
    /// Position of this chunk within its page.
    pub chunk_index: usize,
}

/// A bounded slice of a source document: the unit of indexing and retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Globally unique id, conventionally `page_{page_id}_chunk_{n}`.
    pub id: String,
    pub text: String,
    pub metadata: ChunkMetadata,
}

impl DocumentChunk {
    pub fn new(id: impl Into<String>, text: impl Into<String>, metadata: ChunkMetadata) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata,
        }
    }

    /// Canonical chunk id for the `n`th chunk of a page.
    pub fn chunk_id(page_id: &str, n: usize) -> String {
        format!("page_{page_id}_chunk_{n}")
    }
}
