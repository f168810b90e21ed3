use proptest::prelude::*;
use sift_core::config::LexicalConfig;
use sift_core::{ChunkMetadata, DocumentChunk};
use sift_lexical::LexicalSnapshot;

const WORDS: &[&str] = &[
    "python", "install", "vpn", "password", "deploy", "pipeline", "backup", "database",
    "staging", "release", "restore", "portal",
];

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(WORDS), 1..8).prop_map(|w| w.join(" ")),
        0..12,
    )
}

fn build(texts: &[String]) -> LexicalSnapshot {
    let docs = texts
        .iter()
        .enumerate()
        .map(|(i, t)| {
            DocumentChunk::new(
                DocumentChunk::chunk_id(&i.to_string(), 0),
                t.clone(),
                ChunkMetadata {
                    page_id: i.to_string(),
                    ..Default::default()
                },
            )
        })
        .collect();
    LexicalSnapshot::build(docs, &LexicalConfig::default(), 1)
}

proptest! {
    #[test]
    fn results_are_sorted_bounded_and_positive(
        texts in corpus_strategy(),
        query in prop::collection::vec(prop::sample::select(WORDS), 1..4),
        k in 0usize..10,
    ) {
        let snapshot = build(&texts);
        let hits = snapshot.search(&query.join(" "), k);
        prop_assert!(hits.len() <= k);
        for (idx, sim) in &hits {
            prop_assert!(*idx < texts.len());
            prop_assert!(*sim > 0.0 && *sim <= 1.0 + 1e-9, "similarity {} out of range", sim);
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn search_is_deterministic(
        texts in corpus_strategy(),
        query in ".{0,40}",
    ) {
        let a = build(&texts);
        let b = build(&texts);
        prop_assert_eq!(a.search(&query, 10), b.search(&query, 10));
        prop_assert_eq!(a.term_count(), b.term_count());
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,200}", query in ".{0,50}") {
        let snapshot = build(&[text.clone(), text]);
        let _ = snapshot.search(&query, 5);
    }
}
