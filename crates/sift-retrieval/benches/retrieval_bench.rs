use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use sift_core::config::{ExpansionConfig, SiftConfig};
use sift_core::traits::{EmbeddedChunk, IEmbeddingProvider, IVectorStore};
use sift_embeddings::HashedTermEmbedder;
use sift_retrieval::{QueryExpander, RetrievalEngine};
use sift_storage::InMemoryVectorStore;
use test_fixtures::load_corpus;

const DIMS: usize = 256;

/// Docs corpus repeated `copies` times under distinct page ids.
fn build_engine(copies: usize) -> RetrievalEngine {
    let embedder = HashedTermEmbedder::new(DIMS);
    let store = Arc::new(InMemoryVectorStore::new(DIMS));
    let base = load_corpus("corpus/docs_corpus.json");
    let mut records = Vec::with_capacity(base.len() * copies);
    for copy in 0..copies {
        for chunk in &base {
            let mut chunk = chunk.clone();
            chunk.metadata.page_id = format!("{}-{copy}", chunk.metadata.page_id);
            chunk.id = format!("{}_{copy}", chunk.id);
            records.push(EmbeddedChunk {
                embedding: embedder.embed(&chunk.text).unwrap(),
                chunk,
            });
        }
    }
    store.upsert(&records).unwrap();

    let mut config = SiftConfig::default();
    config.embedding.dimensions = DIMS;
    let engine =
        RetrievalEngine::new(store, Arc::new(HashedTermEmbedder::new(DIMS)), config).unwrap();
    engine.rebuild_lexical_index().unwrap();
    engine
}

fn bench_expand(c: &mut Criterion) {
    let expander = QueryExpander::new(ExpansionConfig::default());
    c.bench_function("expand_question", |b| {
        b.iter(|| expander.expand("How do I install python and fix the deploy error?"));
    });
}

fn bench_retrieve(c: &mut Criterion) {
    let engine = build_engine(40);
    c.bench_function("retrieve_480_chunks", |b| {
        b.iter(|| engine.retrieve("how to reset vpn password", Some(5)).unwrap());
    });
}

fn bench_rebuild(c: &mut Criterion) {
    let engine = build_engine(40);
    c.bench_function("rebuild_lexical_480_chunks", |b| {
        b.iter(|| engine.rebuild_lexical_index().unwrap());
    });
}

criterion_group!(benches, bench_expand, bench_retrieve, bench_rebuild);
criterion_main!(benches);
