//! RetrievalEngine: orchestrates the full hybrid retrieval pipeline.
//!
//! expand → lexical snapshot (lazy build) → parallel per-variant fan-out →
//! fusion → threshold filter → soft fallback → hard fallback → format.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use sift_core::config::SiftConfig;
use sift_core::errors::{ConfigError, RetrievalError, SiftResult};
use sift_core::models::{
    IndexHealth, NoResultsHint, RetrievalResult, RetrievalStrategy, SignalDegradation,
    SignalFailure,
};
use sift_core::traits::{IEmbeddingProvider, IVectorStore};
use sift_core::ScoredCandidate;
use sift_embeddings::QueryEmbedder;
use sift_lexical::LexicalIndex;
use sift_observability::tracing_setup::events;
use sift_observability::{QueryLog, QueryLogEntry};
use tracing::{debug, info, warn};

use crate::expansion::{extract_key_terms, QueryExpander};
use crate::fallback;
use crate::formatter::FormattedResult;
use crate::search::{fan_out, fuse, SemanticRetriever, SignalError};

/// Everything one retrieval produced.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalOutcome {
    pub result: RetrievalResult,
    pub formatted: FormattedResult,
    pub strategy: RetrievalStrategy,
    /// Variants searched, in search order.
    pub variants: Vec<String>,
    /// Signals that were absent, per variant.
    pub degradations: Vec<SignalDegradation>,
    /// Present only when the strategy is `Exhausted`.
    pub hint: Option<NoResultsHint>,
    pub latency: Duration,
}

impl RetrievalOutcome {
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.result.ids()
    }
}

/// The hybrid retrieval engine.
///
/// Shareable across threads: queries take `&self`, the lexical index swaps
/// snapshots internally, and the query log sits behind a mutex.
pub struct RetrievalEngine {
    config: SiftConfig,
    lexical: Arc<LexicalIndex>,
    semantic: Arc<SemanticRetriever>,
    expander: QueryExpander,
    /// Semantic search workers. Lexical search never runs here.
    semantic_pool: ThreadPool,
    query_log: Mutex<QueryLog>,
}

impl RetrievalEngine {
    /// Build an engine over a vector store and an embedding provider.
    ///
    /// Fails on invalid configuration, on a provider whose dimensionality
    /// differs from `embedding.dimensions`, or if the worker pool cannot start.
    pub fn new(
        store: Arc<dyn IVectorStore>,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: SiftConfig,
    ) -> SiftResult<Self> {
        config.validate()?;
        if embedder.dimensions() != config.embedding.dimensions {
            return Err(ConfigError::Invalid {
                field: "embedding.dimensions".to_string(),
                reason: format!(
                    "provider {} produces {} dimensions, config expects {}",
                    embedder.name(),
                    embedder.dimensions(),
                    config.embedding.dimensions
                ),
            }
            .into());
        }

        let semantic_pool = ThreadPoolBuilder::new()
            .num_threads(config.expansion.max_variants)
            .thread_name(|i| format!("sift-semantic-{i}"))
            .build()
            .map_err(|e| RetrievalError::WorkerPool {
                reason: e.to_string(),
            })?;

        let lexical = Arc::new(LexicalIndex::new(
            Arc::clone(&store),
            config.lexical.clone(),
        ));
        let semantic = Arc::new(SemanticRetriever::new(
            store,
            QueryEmbedder::new(embedder, &config.embedding),
        ));

        info!(
            provider = semantic.embedder().provider_name(),
            dims = config.embedding.dimensions,
            semantic_workers = config.expansion.max_variants,
            "RetrievalEngine initialized"
        );

        Ok(Self {
            expander: QueryExpander::new(config.expansion.clone()),
            query_log: Mutex::new(QueryLog::with_capacity(
                config.observability.query_log_capacity,
            )),
            config,
            lexical,
            semantic,
            semantic_pool,
        })
    }

    /// Retrieve the most relevant chunks for `question`.
    ///
    /// `top_k` defaults to `retrieval.top_k`. Signal failures never surface
    /// as `Err`; they are listed in [`RetrievalOutcome::degradations`].
    pub fn retrieve(&self, question: &str, top_k: Option<usize>) -> SiftResult<RetrievalOutcome> {
        let question = question.trim();
        if question.is_empty() {
            return Err(RetrievalError::EmptyQuery.into());
        }
        let top_k = top_k.unwrap_or(self.config.retrieval.top_k);
        if top_k == 0 {
            return Err(RetrievalError::InvalidTopK { top_k }.into());
        }

        let _span = sift_observability::retrieval_span!(question, top_k).entered();
        let start = Instant::now();
        let rc = &self.config.retrieval;

        let variants = self.expander.expand(question);
        debug!(?variants, "expanded question");

        let snapshot = self
            .lexical
            .ensure_built()
            .map_err(|e| SignalError::new(SignalFailure::LexicalUnavailable, e.to_string()));

        let fan = fan_out(
            &self.semantic_pool,
            &self.semantic,
            &snapshot,
            &variants,
            top_k.saturating_mul(rc.candidate_multiplier),
            Duration::from_millis(rc.variant_timeout_ms),
        );
        let fused = fuse(&fan.signals, rc);

        let above: Vec<ScoredCandidate> = fused
            .iter()
            .filter(|r| r.candidate.combined_score >= rc.similarity_threshold)
            .take(top_k)
            .map(|r| r.candidate.clone())
            .collect();

        let (candidates, strategy, hint) = if !above.is_empty() {
            (above, RetrievalStrategy::Fusion, None)
        } else if !fused.is_empty() {
            events::fallback_activated(RetrievalStrategy::SoftFallback, &[]);
            (
                fallback::soft(&fused, top_k),
                RetrievalStrategy::SoftFallback,
                None,
            )
        } else {
            let key_terms = extract_key_terms(question);
            let hard_snapshot = match &snapshot {
                Ok(s) => Some(Arc::clone(s)),
                // The lazy build failed before the fan-out; try once more.
                Err(_) => self.lexical.ensure_built().ok(),
            };
            let hard = hard_snapshot
                .map(|s| fallback::hard(&s, &key_terms, top_k, rc.keyword_weight))
                .unwrap_or_default();
            if hard.is_empty() {
                events::retrieval_exhausted(question, &key_terms);
                (
                    Vec::new(),
                    RetrievalStrategy::Exhausted,
                    Some(NoResultsHint { key_terms }),
                )
            } else {
                events::fallback_activated(RetrievalStrategy::HardFallback, &key_terms);
                (hard, RetrievalStrategy::HardFallback, None)
            }
        };

        let result = RetrievalResult::new(candidates);
        let formatted = FormattedResult::from_candidates(&result.candidates);
        let latency = start.elapsed();

        info!(
            strategy = %strategy,
            results = result.len(),
            variants = variants.len(),
            degraded = fan.degradations.len(),
            latency_ms = latency.as_millis() as u64,
            "retrieval complete"
        );
        self.log_query(question, &variants, strategy, latency, &result, &fan.degradations);

        Ok(RetrievalOutcome {
            result,
            formatted,
            strategy,
            variants,
            degradations: fan.degradations,
            hint,
            latency,
        })
    }

    /// Rebuild the lexical index from the store's current corpus.
    ///
    /// On failure the previous snapshot keeps serving.
    pub fn rebuild_lexical_index(&self) -> SiftResult<IndexHealth> {
        let _span = sift_observability::rebuild_span!("admin").entered();
        match self.lexical.rebuild() {
            Ok(snapshot) => Ok(snapshot.health()),
            Err(e) => {
                events::rebuild_failed(&e.to_string());
                Err(e)
            }
        }
    }

    /// Hook for ingestion. Batch ingestors pass `rebuild = false` for every
    /// item but the last so the index is rebuilt once per batch.
    pub fn after_ingest(&self, rebuild: bool) -> SiftResult<Option<IndexHealth>> {
        if !rebuild {
            debug!("lexical rebuild deferred");
            return Ok(None);
        }
        self.rebuild_lexical_index().map(Some)
    }

    /// Health of the lexical snapshot currently served.
    pub fn health(&self) -> SiftResult<IndexHealth> {
        self.lexical.health()
    }

    /// Copy of the query log.
    pub fn query_log(&self) -> QueryLog {
        match self.query_log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn config(&self) -> &SiftConfig {
        &self.config
    }

    pub fn lexical_index(&self) -> &LexicalIndex {
        &self.lexical
    }

    fn log_query(
        &self,
        question: &str,
        variants: &[String],
        strategy: RetrievalStrategy,
        latency: Duration,
        result: &RetrievalResult,
        degradations: &[SignalDegradation],
    ) {
        let entry = QueryLogEntry::new(
            question,
            variants.len(),
            strategy,
            latency,
            result.len(),
            degradations.len(),
        );
        match self.query_log.lock() {
            Ok(mut log) => log.record(entry),
            Err(_) => warn!("query log lock poisoned, entry dropped"),
        }
    }
}
