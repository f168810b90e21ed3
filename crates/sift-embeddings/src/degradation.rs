//! Ordered provider fallback for embedding generation.
//!
//! Providers are tried in priority order. When a lower-priority provider
//! answers, a `DegradationEvent` is recorded for the session.

use std::sync::Mutex;

use chrono::Utc;
use sift_core::errors::{EmbeddingError, SiftError, SiftResult};
use sift_core::models::DegradationEvent;
use sift_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Embedding provider chain.
///
/// Implements `IEmbeddingProvider` itself, so the retrieval engine treats a
/// chain like any single provider. Events are collected behind a mutex
/// because the trait takes `&self`.
pub struct EmbeddingChain {
    chain: Vec<Box<dyn IEmbeddingProvider>>,
    events: Mutex<Vec<DegradationEvent>>,
    dimensions: usize,
}

impl EmbeddingChain {
    /// Empty chain producing vectors of `dimensions` length.
    pub fn new(dimensions: usize) -> Self {
        Self {
            chain: Vec::new(),
            events: Mutex::new(Vec::new()),
            dimensions,
        }
    }

    /// Append a provider at the lowest priority.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.chain.push(provider);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, provider: Box<dyn IEmbeddingProvider>) -> Self {
        self.push(provider);
        self
    }

    /// Name of the first available provider, or `"none"`.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Take the degradation events recorded so far.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    fn record_fallback(&self, fallback: &str) {
        let primary = self.chain.first().map(|p| p.name()).unwrap_or("unknown");
        if let Ok(mut events) = self.events.lock() {
            events.push(DegradationEvent {
                component: "embeddings".to_string(),
                failure: format!("{primary} unavailable"),
                fallback_used: fallback.to_string(),
                timestamp: Utc::now(),
            });
        }
    }

    fn run<T>(
        &self,
        what: &str,
        call: impl Fn(&dyn IEmbeddingProvider) -> SiftResult<T>,
    ) -> SiftResult<T> {
        let mut last_error: Option<SiftError> = None;

        for (i, provider) in self.chain.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match call(provider.as_ref()) {
                Ok(value) => {
                    if i > 0 {
                        self.record_fallback(provider.name());
                    }
                    return Ok(value);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "{what} failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: "all providers exhausted".to_string(),
            }
            .into()
        }))
    }
}

impl IEmbeddingProvider for EmbeddingChain {
    fn embed(&self, text: &str) -> SiftResult<Vec<f32>> {
        self.run("embed", |p| p.embed(text))
    }

    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        self.run("batch embed", |p| p.embed_batch(texts))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "embedding-chain"
    }

    fn is_available(&self) -> bool {
        self.chain.iter().any(|p| p.is_available())
    }
}
