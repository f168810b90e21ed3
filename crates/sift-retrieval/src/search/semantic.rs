//! Semantic signal: embed the variant, ask the vector store for neighbors.

use std::sync::Arc;

use sift_core::models::SignalFailure;
use sift_core::traits::IVectorStore;
use sift_core::DocumentChunk;
use sift_embeddings::QueryEmbedder;
use tracing::debug;

use super::SignalError;

/// A nearest-neighbor hit with similarity `1 - distance`, clamped to [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticHit {
    pub chunk: DocumentChunk,
    pub similarity: f64,
}

/// Adapter over the vector store and the query embedder.
pub struct SemanticRetriever {
    store: Arc<dyn IVectorStore>,
    embedder: QueryEmbedder,
}

impl SemanticRetriever {
    pub fn new(store: Arc<dyn IVectorStore>, embedder: QueryEmbedder) -> Self {
        Self { store, embedder }
    }

    pub fn embedder(&self) -> &QueryEmbedder {
        &self.embedder
    }

    /// Up to `k` neighbors for `variant`, nearest first.
    ///
    /// Neighbors with no positive similarity are not matches and are
    /// dropped. Embedding and store failures come back as a
    /// [`SignalError`] instead of an `Err` of the whole retrieval.
    pub fn search(&self, variant: &str, k: usize) -> Result<Vec<SemanticHit>, SignalError> {
        let _span = sift_observability::embedding_span!(self.embedder.provider_name(), variant)
            .entered();
        let embedding = self
            .embedder
            .embed_query(variant)
            .map_err(|e| SignalError::new(SignalFailure::EmbeddingUnavailable, e.to_string()))?;
        let neighbors = self
            .store
            .search(&embedding, k)
            .map_err(|e| SignalError::new(SignalFailure::StoreUnavailable, e.to_string()))?;

        let hits: Vec<SemanticHit> = neighbors
            .into_iter()
            .map(|n| SemanticHit {
                similarity: (1.0 - n.distance).clamp(0.0, 1.0),
                chunk: n.chunk,
            })
            .filter(|h| h.similarity > 0.0)
            .collect();
        debug!(variant, hits = hits.len(), "semantic search");
        Ok(hits)
    }
}
