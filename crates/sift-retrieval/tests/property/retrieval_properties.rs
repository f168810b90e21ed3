use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use proptest::prelude::*;
use sift_core::config::{ExpansionConfig, RetrievalConfig, SiftConfig};
use sift_core::models::RetrievalStrategy;
use sift_core::traits::{EmbeddedChunk, IEmbeddingProvider, IVectorStore};
use sift_core::{ChunkMetadata, DocumentChunk};
use sift_embeddings::HashedTermEmbedder;
use sift_retrieval::search::{fuse, SemanticHit, VariantSignals};
use sift_retrieval::{QueryExpander, RetrievalEngine};
use sift_storage::InMemoryVectorStore;
use test_fixtures::load_corpus;

const DIMS: usize = 128;

const WORDS: &[&str] = &[
    "how", "to", "install", "python", "vpn", "access", "password", "reset", "deploy", "release",
    "pipeline", "backup", "database", "the", "is", "a", "what", "fix", "error", "kubernetes",
];

fn docs_store() -> Arc<InMemoryVectorStore> {
    static STORE: OnceLock<Arc<InMemoryVectorStore>> = OnceLock::new();
    let store = STORE.get_or_init(|| {
        let store = Arc::new(InMemoryVectorStore::new(DIMS));
        let embedder = HashedTermEmbedder::new(DIMS);
        let records: Vec<EmbeddedChunk> = load_corpus("corpus/docs_corpus.json")
            .into_iter()
            .map(|chunk| EmbeddedChunk {
                embedding: embedder.embed(&chunk.text).unwrap(),
                chunk,
            })
            .collect();
        store.upsert(&records).unwrap();
        store
    });
    Arc::clone(store)
}

fn engine_with_threshold(threshold: f64) -> RetrievalEngine {
    let mut config = SiftConfig::default();
    config.embedding.dimensions = DIMS;
    config.retrieval.similarity_threshold = threshold;
    RetrievalEngine::new(docs_store(), Arc::new(HashedTermEmbedder::new(DIMS)), config).unwrap()
}

fn question() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..6).prop_map(|w| w.join(" "))
}

fn sem(id: &str, similarity: f64) -> SemanticHit {
    SemanticHit {
        chunk: DocumentChunk::new(id, "", ChunkMetadata::default()),
        similarity,
    }
}

proptest! {
    #[test]
    fn expansion_is_bounded_unique_and_keeps_the_original(q in "[a-zA-Z ?]{1,60}") {
        prop_assume!(!q.trim().is_empty());
        let variants = QueryExpander::new(ExpansionConfig::default()).expand(&q);
        prop_assert!(!variants.is_empty());
        prop_assert!(variants.len() <= 5);
        prop_assert_eq!(variants[0].as_str(), q.trim());
        let unique: HashSet<&String> = variants.iter().collect();
        prop_assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn retrieval_results_respect_invariants(
        q in question(),
        top_k in 1usize..10,
        threshold in 0.0f64..=1.0,
    ) {
        let engine = engine_with_threshold(threshold);
        let cfg = &engine.config().retrieval;
        prop_assert!(threshold <= cfg.max_combined_score());
        let outcome = engine.retrieve(&q, Some(top_k)).unwrap();

        prop_assert!(outcome.result.len() <= top_k);
        let ids: HashSet<&str> = outcome.ids().into_iter().collect();
        prop_assert_eq!(ids.len(), outcome.result.len());

        for c in &outcome.result.candidates {
            prop_assert!(c.combined_score <= cfg.max_combined_score() + 1e-9);
            if outcome.strategy == RetrievalStrategy::Fusion {
                prop_assert!(c.combined_score >= threshold);
            }
        }
        prop_assert_eq!(outcome.hint.is_some(), outcome.strategy == RetrievalStrategy::Exhausted);
    }

    #[test]
    fn cross_variant_merge_is_a_true_maximum(scores in prop::collection::vec(0.01f64..1.0, 1..5)) {
        let cfg = RetrievalConfig {
            semantic_weight: 1.0,
            keyword_weight: 0.0,
            ..Default::default()
        };
        let signals: Vec<VariantSignals> = scores
            .iter()
            .map(|s| VariantSignals {
                variant: "v".to_string(),
                semantic: vec![sem("doc", *s)],
                lexical: Vec::new(),
            })
            .collect();
        let fused = fuse(&signals, &cfg);
        let max = scores.iter().cloned().fold(f64::MIN, f64::max);
        prop_assert_eq!(fused.len(), 1);
        prop_assert!((fused[0].candidate.combined_score - max).abs() < 1e-12);
    }

    #[test]
    fn semantic_weight_trade_off_is_monotonic(
        similarity in 0.01f64..1.0,
        sw in 0.0f64..0.8,
        shift in 0.0f64..0.2,
    ) {
        let signals = vec![VariantSignals {
            variant: "v".to_string(),
            semantic: vec![sem("semantic-only", similarity)],
            lexical: Vec::new(),
        }];
        let before = RetrievalConfig { semantic_weight: sw, keyword_weight: 1.0 - sw, ..Default::default() };
        let after = RetrievalConfig { semantic_weight: sw + shift, keyword_weight: 1.0 - sw - shift, ..Default::default() };
        let a = fuse(&signals, &before)[0].candidate.combined_score;
        let b = fuse(&signals, &after)[0].candidate.combined_score;
        prop_assert!(b >= a);
    }
}
