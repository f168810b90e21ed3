use serde::{Deserialize, Serialize};

use super::defaults;

/// Score fusion and fan-out configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Result width when the caller does not pass one.
    pub top_k: usize,
    /// Multiplier on semantic similarity (`1 - distance`).
    pub semantic_weight: f64,
    /// Multiplier on lexical cosine similarity.
    pub keyword_weight: f64,
    /// Minimum fused score for a non-fallback result.
    pub similarity_threshold: f64,
    /// Each signal fetches `top_k * candidate_multiplier` candidates per variant.
    pub candidate_multiplier: usize,
    /// Per-variant deadline; late signals count as absent.
    pub variant_timeout_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
            variant_timeout_ms: defaults::DEFAULT_VARIANT_TIMEOUT_MS,
        }
    }
}

impl RetrievalConfig {
    /// Upper bound of any fused score under these weights.
    pub fn max_combined_score(&self) -> f64 {
        self.semantic_weight + self.keyword_weight
    }
}
