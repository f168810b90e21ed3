//! Uniform output shape for every retrieval strategy.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sift_core::{ChunkMetadata, ScoredCandidate};

/// Four parallel sequences, one entry per returned chunk, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub ids: Vec<String>,
    pub documents: Vec<String>,
    pub metadatas: Vec<ChunkMetadata>,
    /// `1 - combined_score`, clamped to [0, 2].
    pub distances: Vec<f64>,
}

/// One cited page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub page_id: String,
    pub page_title: String,
    pub page_url: String,
    /// `1 - distance` of the page's best chunk, rounded to two decimals.
    pub relevance: f64,
}

impl FormattedResult {
    pub fn from_candidates(candidates: &[ScoredCandidate]) -> Self {
        let mut out = Self::default();
        for c in candidates {
            out.ids.push(c.doc_id.clone());
            out.documents.push(c.text.clone());
            out.metadatas.push(c.metadata.clone());
            out.distances.push(c.distance());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Cited pages, one per `page_id`, first (best) occurrence kept.
    pub fn sources(&self) -> Vec<SourceRef> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut sources = Vec::new();
        for (meta, distance) in self.metadatas.iter().zip(&self.distances) {
            if !seen.insert(meta.page_id.as_str()) {
                continue;
            }
            sources.push(SourceRef {
                page_id: meta.page_id.clone(),
                page_title: meta.page_title.clone(),
                page_url: meta.page_url.clone(),
                relevance: round2(1.0 - distance),
            });
        }
        sources
    }

    /// Chunk texts cut to `max_chars` characters, with "..." appended when cut.
    pub fn previews(&self, max_chars: usize) -> Vec<String> {
        self.documents
            .iter()
            .map(|text| match text.char_indices().nth(max_chars) {
                Some((cut, _)) => format!("{}...", &text[..cut]),
                None => text.clone(),
            })
            .collect()
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, page: &str, text: &str, score: f64) -> ScoredCandidate {
        ScoredCandidate {
            doc_id: id.to_string(),
            text: text.to_string(),
            metadata: ChunkMetadata {
                page_id: page.to_string(),
                page_title: format!("Page {page}"),
                page_url: format!("https://wiki.example.com/{page}"),
                ..Default::default()
            },
            semantic_score: score,
            keyword_score: 0.0,
            combined_score: score,
        }
    }

    #[test]
    fn sequences_stay_parallel() {
        let f = FormattedResult::from_candidates(&[
            candidate("page_1_chunk_0", "1", "alpha", 0.8),
            candidate("page_2_chunk_0", "2", "beta", 0.3),
        ]);
        assert_eq!(f.len(), 2);
        assert_eq!(f.documents.len(), 2);
        assert_eq!(f.metadatas.len(), 2);
        assert_eq!(f.ids, vec!["page_1_chunk_0", "page_2_chunk_0"]);
        assert!((f.distances[0] - 0.2).abs() < 1e-12);
        assert!((f.distances[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn distance_is_clamped() {
        let f = FormattedResult::from_candidates(&[candidate("a", "1", "x", 1.3)]);
        assert_eq!(f.distances[0], 0.0);
    }

    #[test]
    fn sources_dedupe_by_page_keeping_best() {
        let f = FormattedResult::from_candidates(&[
            candidate("page_1_chunk_1", "1", "a", 0.876),
            candidate("page_2_chunk_0", "2", "b", 0.5),
            candidate("page_1_chunk_0", "1", "c", 0.4),
        ]);
        let sources = f.sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].page_id, "1");
        assert_eq!(sources[0].relevance, 0.88);
        assert_eq!(sources[1].page_title, "Page 2");
    }

    #[test]
    fn previews_truncate_on_char_boundaries() {
        let f = FormattedResult::from_candidates(&[
            candidate("a", "1", "short", 0.5),
            candidate("b", "1", "ünïcödé text", 0.5),
        ]);
        let previews = f.previews(5);
        assert_eq!(previews[0], "short");
        assert_eq!(previews[1], "ünïcö...");
    }

    #[test]
    fn empty_input_formats_empty() {
        let f = FormattedResult::from_candidates(&[]);
        assert!(f.is_empty());
        assert!(f.sources().is_empty());
    }
}
