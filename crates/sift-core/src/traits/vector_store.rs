use serde::{Deserialize, Serialize};

use crate::chunk::{ChunkMetadata, DocumentChunk};
use crate::errors::SiftResult;

/// A nearest-neighbor hit from the vector store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub chunk: DocumentChunk,
    /// Cosine distance in [0.0, 2.0].
    pub distance: f64,
}

/// A chunk paired with its embedding, as written by ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedChunk {
    pub chunk: DocumentChunk,
    pub embedding: Vec<f32>,
}

/// Selector for bulk deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataFilter {
    PageId(String),
    SpaceKey(String),
    Ids(Vec<String>),
}

impl MetadataFilter {
    pub fn matches(&self, id: &str, metadata: &ChunkMetadata) -> bool {
        match self {
            MetadataFilter::PageId(page_id) => metadata.page_id == *page_id,
            MetadataFilter::SpaceKey(key) => metadata.space_key.as_deref() == Some(key.as_str()),
            MetadataFilter::Ids(ids) => ids.iter().any(|i| i == id),
        }
    }
}

/// Persistent vector store. Mutation is owned by ingestion; retrieval only
/// calls `search` and `enumerate_corpus`.
pub trait IVectorStore: Send + Sync {
    /// Nearest neighbors by cosine distance, ascending.
    fn search(&self, embedding: &[f32], limit: usize) -> SiftResult<Vec<Neighbor>>;

    /// Every stored chunk, in a stable order.
    fn enumerate_corpus(&self) -> SiftResult<Vec<DocumentChunk>>;

    /// Insert or replace chunks by id. Returns the number written.
    fn upsert(&self, chunks: &[EmbeddedChunk]) -> SiftResult<usize>;

    /// Delete every chunk matching the filter. Returns the number removed.
    fn delete_by(&self, filter: &MetadataFilter) -> SiftResult<usize>;

    /// Remove everything.
    fn clear(&self) -> SiftResult<()>;

    /// Number of stored chunks.
    fn count(&self) -> SiftResult<usize>;
}
