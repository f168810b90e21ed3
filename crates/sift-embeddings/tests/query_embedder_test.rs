use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sift_core::config::EmbeddingConfig;
use sift_core::errors::{EmbeddingError, SiftError, SiftResult};
use sift_core::traits::IEmbeddingProvider;
use sift_embeddings::{EmbeddingChain, HashedTermEmbedder, QueryEmbedder};

/// Counts calls and returns a fixed-size vector.
struct CountingProvider {
    calls: AtomicUsize,
    dims: usize,
}

impl IEmbeddingProvider for CountingProvider {
    fn embed(&self, _text: &str) -> SiftResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![0.5; self.dims])
    }
    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
    fn dimensions(&self) -> usize {
        self.dims
    }
    fn name(&self) -> &str {
        "counting"
    }
    fn is_available(&self) -> bool {
        true
    }
}

struct EmptyProvider;

impl IEmbeddingProvider for EmptyProvider {
    fn embed(&self, _text: &str) -> SiftResult<Vec<f32>> {
        Ok(Vec::new())
    }
    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| Vec::new()).collect())
    }
    fn dimensions(&self) -> usize {
        0
    }
    fn name(&self) -> &str {
        "empty"
    }
    fn is_available(&self) -> bool {
        true
    }
}

fn config(dimensions: usize) -> EmbeddingConfig {
    EmbeddingConfig {
        dimensions,
        ..Default::default()
    }
}

#[test]
fn repeated_variants_hit_the_cache() {
    let provider = Arc::new(CountingProvider {
        calls: AtomicUsize::new(0),
        dims: 8,
    });
    let embedder = QueryEmbedder::new(provider.clone(), &config(8));

    let a = embedder.embed_query("install python").unwrap();
    let b = embedder.embed_query("install python").unwrap();
    embedder.embed_query("reset vpn password").unwrap();

    assert_eq!(a, b);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn clear_cache_forces_recompute() {
    let provider = Arc::new(CountingProvider {
        calls: AtomicUsize::new(0),
        dims: 4,
    });
    let embedder = QueryEmbedder::new(provider.clone(), &config(4));
    embedder.embed_query("vpn").unwrap();
    embedder.clear_cache();
    embedder.embed_query("vpn").unwrap();
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn wrong_dimensionality_is_rejected() {
    let embedder = QueryEmbedder::new(Arc::new(HashedTermEmbedder::new(16)), &config(32));
    let err = embedder.embed_query("vpn").unwrap_err();
    assert!(matches!(
        err,
        SiftError::EmbeddingError(EmbeddingError::DimensionMismatch {
            expected: 32,
            actual: 16
        })
    ));
}

#[test]
fn empty_vector_is_a_failure() {
    let embedder = QueryEmbedder::new(Arc::new(EmptyProvider), &config(8));
    assert!(embedder.embed_query("vpn").is_err());
}

#[test]
fn works_over_a_chain() {
    let chain = EmbeddingChain::new(64).with(Box::new(HashedTermEmbedder::new(64)));
    let embedder = QueryEmbedder::new(Arc::new(chain), &config(64));
    assert_eq!(embedder.provider_name(), "embedding-chain");
    assert_eq!(embedder.embed_query("deploy service").unwrap().len(), 64);
}
