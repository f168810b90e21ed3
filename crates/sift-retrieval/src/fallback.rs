//! Fallback strategies for when fusion leaves nothing above the threshold.
//!
//! Soft: the unfiltered fused list, best first. Hard: each key term searched
//! alone against the lexical snapshot, keeping each chunk's best single-term
//! score. Multi-word phrase meaning is not preserved by the hard level.

use std::cmp::Ordering;
use std::collections::HashMap;

use sift_core::ScoredCandidate;
use sift_lexical::LexicalSnapshot;
use tracing::debug;

use crate::search::RankedCandidate;

/// Top `top_k` fused candidates regardless of threshold.
pub fn soft(fused: &[RankedCandidate], top_k: usize) -> Vec<ScoredCandidate> {
    fused
        .iter()
        .take(top_k)
        .map(|r| r.candidate.clone())
        .collect()
}

/// Per-key-term keyword search, merged by per-chunk maximum.
///
/// Scores are lexical cosine times `keyword_weight`, so they stay comparable
/// with fused scores. Ordered by score descending, then `doc_id`.
pub fn hard(
    snapshot: &LexicalSnapshot,
    key_terms: &[String],
    top_k: usize,
    keyword_weight: f64,
) -> Vec<ScoredCandidate> {
    let mut by_id: HashMap<String, ScoredCandidate> = HashMap::new();

    for term in key_terms {
        for hit in snapshot.hits(term, top_k) {
            let similarity = hit.similarity.clamp(0.0, 1.0);
            let better = by_id
                .get(&hit.chunk.id)
                .map_or(true, |existing| similarity > existing.keyword_score);
            if better {
                by_id.insert(
                    hit.chunk.id.clone(),
                    ScoredCandidate {
                        doc_id: hit.chunk.id,
                        text: hit.chunk.text,
                        metadata: hit.chunk.metadata,
                        semantic_score: 0.0,
                        keyword_score: similarity,
                        combined_score: similarity * keyword_weight,
                    },
                );
            }
        }
    }
    debug!(terms = key_terms.len(), matched = by_id.len(), "hard fallback");

    let mut merged: Vec<ScoredCandidate> = by_id.into_values().collect();
    merged.sort_by(|a, b| {
        b.keyword_score
            .partial_cmp(&a.keyword_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });
    merged.truncate(top_k);
    merged
}
