use serde::{Deserialize, Serialize};

use crate::chunk::ChunkMetadata;

/// One document under evaluation for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub doc_id: String,
    pub text: String,
    pub metadata: ChunkMetadata,
    /// Unweighted semantic similarity, [0.0, 1.0].
    pub semantic_score: f64,
    /// Unweighted lexical cosine similarity, [0.0, 1.0].
    pub keyword_score: f64,
    /// Weighted fused score, never above `semantic_weight + keyword_weight`.
    pub combined_score: f64,
}

impl ScoredCandidate {
    /// Distance handed to downstream consumers: `1 - combined_score`, kept in [0, 2].
    pub fn distance(&self) -> f64 {
        (1.0 - self.combined_score).clamp(0.0, 2.0)
    }
}
