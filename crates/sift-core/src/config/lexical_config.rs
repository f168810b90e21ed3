use serde::{Deserialize, Serialize};

use super::defaults;

/// TF-IDF vocabulary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalConfig {
    /// Vocabulary cap; the most frequent terms across the corpus are kept.
    pub max_features: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
    /// Terms must appear in at least this many documents.
    pub min_document_frequency: usize,
    /// Terms appearing in more than this fraction of documents are dropped.
    pub max_document_ratio: f64,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            max_features: defaults::DEFAULT_MAX_FEATURES,
            ngram_min: defaults::DEFAULT_NGRAM_MIN,
            ngram_max: defaults::DEFAULT_NGRAM_MAX,
            min_document_frequency: defaults::DEFAULT_MIN_DOCUMENT_FREQUENCY,
            max_document_ratio: defaults::DEFAULT_MAX_DOCUMENT_RATIO,
        }
    }
}
