//! Weighted score fusion.
//!
//! Per variant: `(1 - distance) * semantic_weight + cosine * keyword_weight`,
//! summed when a chunk is hit by both signals. Across variants a chunk keeps
//! its maximum per-variant score, along with its best rank in each signal.

use std::cmp::Ordering;
use std::collections::HashMap;

use sift_core::config::RetrievalConfig;
use sift_core::ScoredCandidate;

use super::VariantSignals;

/// A fused candidate plus the ranks used to break score ties.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub candidate: ScoredCandidate,
    /// Best (lowest) position in any variant's semantic list.
    pub semantic_rank: Option<usize>,
    /// Best (lowest) position in any variant's lexical list.
    pub lexical_rank: Option<usize>,
}

/// Fuse all variants into one deduplicated list, best first.
///
/// Ordering: `combined_score` descending, then best semantic rank, then best
/// lexical rank (absent ranks last), then `doc_id`. Nothing is filtered or
/// truncated here.
pub fn fuse(signals: &[VariantSignals], config: &RetrievalConfig) -> Vec<RankedCandidate> {
    let mut by_id: HashMap<String, usize> = HashMap::new();
    let mut pool: Vec<RankedCandidate> = Vec::new();

    for variant in signals {
        for fused in fuse_variant(variant, config) {
            match by_id.get(&fused.candidate.doc_id) {
                Some(&slot) => merge_max(&mut pool[slot], fused),
                None => {
                    by_id.insert(fused.candidate.doc_id.clone(), pool.len());
                    pool.push(fused);
                }
            }
        }
    }

    pool.sort_by(compare);
    pool
}

/// Score one variant's signals. Output keeps first-hit order.
fn fuse_variant(signals: &VariantSignals, config: &RetrievalConfig) -> Vec<RankedCandidate> {
    let mut by_id: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<RankedCandidate> = Vec::new();

    for (rank, hit) in signals.semantic.iter().enumerate() {
        if by_id.contains_key(hit.chunk.id.as_str()) {
            continue;
        }
        by_id.insert(hit.chunk.id.as_str(), out.len());
        out.push(RankedCandidate {
            candidate: ScoredCandidate {
                doc_id: hit.chunk.id.clone(),
                text: hit.chunk.text.clone(),
                metadata: hit.chunk.metadata.clone(),
                semantic_score: hit.similarity,
                keyword_score: 0.0,
                combined_score: hit.similarity * config.semantic_weight,
            },
            semantic_rank: Some(rank),
            lexical_rank: None,
        });
    }

    for (rank, hit) in signals.lexical.iter().enumerate() {
        let similarity = hit.similarity.clamp(0.0, 1.0);
        match by_id.get(hit.chunk.id.as_str()) {
            Some(&slot) => {
                let entry = &mut out[slot];
                if entry.lexical_rank.is_some() {
                    continue;
                }
                entry.candidate.keyword_score = similarity;
                entry.candidate.combined_score += similarity * config.keyword_weight;
                entry.lexical_rank = Some(rank);
            }
            None => {
                by_id.insert(hit.chunk.id.as_str(), out.len());
                out.push(RankedCandidate {
                    candidate: ScoredCandidate {
                        doc_id: hit.chunk.id.clone(),
                        text: hit.chunk.text.clone(),
                        metadata: hit.chunk.metadata.clone(),
                        semantic_score: 0.0,
                        keyword_score: similarity,
                        combined_score: similarity * config.keyword_weight,
                    },
                    semantic_rank: None,
                    lexical_rank: Some(rank),
                });
            }
        }
    }
    out
}

/// Keep the higher-scoring variant's scores; ranks are always the best seen.
/// An equal score keeps the earlier variant.
fn merge_max(existing: &mut RankedCandidate, incoming: RankedCandidate) {
    existing.semantic_rank = best_rank(existing.semantic_rank, incoming.semantic_rank);
    existing.lexical_rank = best_rank(existing.lexical_rank, incoming.lexical_rank);
    if incoming.candidate.combined_score > existing.candidate.combined_score {
        existing.candidate = incoming.candidate;
    }
}

fn best_rank(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

fn rank_order(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.candidate
        .combined_score
        .partial_cmp(&a.candidate.combined_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| rank_order(a.semantic_rank, b.semantic_rank))
        .then_with(|| rank_order(a.lexical_rank, b.lexical_rank))
        .then_with(|| a.candidate.doc_id.cmp(&b.candidate.doc_id))
}
