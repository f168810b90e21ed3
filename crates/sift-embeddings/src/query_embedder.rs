//! QueryEmbedder: the semantic signal's entry point for embedding variants.

use std::sync::Arc;
use std::time::Duration;

use sift_core::config::EmbeddingConfig;
use sift_core::errors::{EmbeddingError, SiftResult};
use sift_core::traits::IEmbeddingProvider;
use tracing::debug;

use crate::cache::QueryCache;

/// Embeds query variants through a provider, with caching and dimension checks.
///
/// Only successful, correctly-sized embeddings are cached, so a transient
/// provider failure is retried on the next query.
pub struct QueryEmbedder {
    provider: Arc<dyn IEmbeddingProvider>,
    cache: QueryCache,
    dimensions: usize,
}

impl QueryEmbedder {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        Self {
            provider,
            cache: QueryCache::new(
                config.query_cache_size,
                Duration::from_secs(config.query_cache_ttl_secs),
            ),
            dimensions: config.dimensions,
        }
    }

    /// Embedding for one query variant.
    ///
    /// Errors when the provider fails, returns an empty vector, or returns
    /// a vector of the wrong dimensionality.
    pub fn embed_query(&self, text: &str) -> SiftResult<Vec<f32>> {
        let key = QueryCache::key(text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(provider = self.provider.name(), "query embedding cache hit");
            return Ok(hit);
        }

        let embedding = self.provider.embed(text)?;
        if embedding.is_empty() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("{} returned an empty vector", self.provider.name()),
            }
            .into());
        }
        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }

        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Drop all cached embeddings, e.g. after swapping the embedding model.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
