use serde::{Deserialize, Serialize};

use super::defaults;

/// Query embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Expected vector dimensionality; mismatches are rejected.
    pub dimensions: usize,
    /// Max cached variant embeddings.
    pub query_cache_size: u64,
    pub query_cache_ttl_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
            query_cache_ttl_secs: defaults::DEFAULT_QUERY_CACHE_TTL_SECS,
        }
    }
}
