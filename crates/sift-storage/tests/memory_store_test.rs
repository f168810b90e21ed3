use sift_core::errors::{SiftError, StoreError};
use sift_core::traits::{EmbeddedChunk, IVectorStore, MetadataFilter};
use sift_core::{ChunkMetadata, DocumentChunk};
use sift_storage::InMemoryVectorStore;

fn embedded(page: &str, n: usize, text: &str, embedding: Vec<f32>) -> EmbeddedChunk {
    EmbeddedChunk {
        chunk: DocumentChunk::new(
            DocumentChunk::chunk_id(page, n),
            text,
            ChunkMetadata {
                page_id: page.to_string(),
                page_title: format!("Page {page}"),
                space_key: Some(if page == "1" { "ENG" } else { "OPS" }.to_string()),
                chunk_index: n,
                ..Default::default()
            },
        ),
        embedding,
    }
}

fn seeded() -> InMemoryVectorStore {
    let store = InMemoryVectorStore::new(3);
    store
        .upsert(&[
            embedded("1", 0, "alpha", vec![1.0, 0.0, 0.0]),
            embedded("1", 1, "beta", vec![0.0, 1.0, 0.0]),
            embedded("2", 0, "gamma", vec![0.7, 0.7, 0.0]),
        ])
        .unwrap();
    store
}

#[test]
fn search_orders_by_ascending_distance() {
    let store = seeded();
    let hits = store.search(&[1.0, 0.1, 0.0], 3).unwrap();
    let ids: Vec<&str> = hits.iter().map(|h| h.chunk.id.as_str()).collect();
    assert_eq!(ids, vec!["page_1_chunk_0", "page_2_chunk_0", "page_1_chunk_1"]);
    for h in &hits {
        assert!((0.0..=2.0).contains(&h.distance));
    }
}

#[test]
fn search_respects_limit() {
    assert_eq!(seeded().search(&[1.0, 0.0, 0.0], 1).unwrap().len(), 1);
}

#[test]
fn query_dimension_mismatch_is_an_error() {
    let err = seeded().search(&[1.0, 0.0], 3).unwrap_err();
    assert!(matches!(
        err,
        SiftError::StoreError(StoreError::DimensionMismatch { .. })
    ));
}

#[test]
fn upsert_replaces_existing_id_in_place() {
    let store = seeded();
    store
        .upsert(&[embedded("1", 0, "alpha v2", vec![0.0, 0.0, 1.0])])
        .unwrap();
    let corpus = store.enumerate_corpus().unwrap();
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus[0].text, "alpha v2");
}

#[test]
fn enumerate_corpus_keeps_insertion_order() {
    let ids: Vec<String> = seeded()
        .enumerate_corpus()
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["page_1_chunk_0", "page_1_chunk_1", "page_2_chunk_0"]);
}

#[test]
fn delete_by_page_and_space() {
    let store = seeded();
    assert_eq!(store.delete_by(&MetadataFilter::PageId("1".into())).unwrap(), 2);
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.delete_by(&MetadataFilter::SpaceKey("OPS".into())).unwrap(), 1);
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn stats_count_distinct_pages() {
    let stats = seeded().stats().unwrap();
    assert_eq!(stats.total_chunks, 3);
    assert_eq!(stats.total_pages, 2);
}

#[test]
fn clear_empties_store() {
    let store = seeded();
    store.clear().unwrap();
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.search(&[1.0, 0.0, 0.0], 5).unwrap().is_empty());
}
