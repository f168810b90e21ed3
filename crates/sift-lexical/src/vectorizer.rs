//! TF-IDF term weighting.
//!
//! Vocabulary pruning: terms below `min_document_frequency` or above
//! `max_document_ratio * n_docs` documents are dropped, then the
//! `max_features` most frequent terms (by total corpus count) are kept.
//! IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`. Rows are L2-normalized,
//! so cosine similarity reduces to a dot product.

use std::collections::{BTreeMap, HashMap, HashSet};

use sift_core::config::LexicalConfig;

use crate::tokenizer::analyze;

/// Sparse vector as `(term_id, weight)` pairs sorted by `term_id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product of two sorted sparse vectors.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j, mut sum) = (0, 0, 0.0);
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalize(&mut self) {
        let norm: f64 = self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// A fitted vocabulary with IDF weights.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_min: usize,
    ngram_max: usize,
}

impl TfIdfModel {
    /// Vocabulary size.
    pub fn term_count(&self) -> usize {
        self.idf.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Weighted, normalized vector for arbitrary text. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in analyze(text, self.ngram_min, self.ngram_max) {
            if let Some(&id) = self.vocabulary.get(&term) {
                *counts.entry(id).or_default() += 1.0;
            }
        }
        let mut vector = SparseVector {
            entries: counts
                .into_iter()
                .map(|(id, tf)| (id, tf * self.idf[id]))
                .collect(),
        };
        vector.normalize();
        vector
    }
}

/// Fits a [`TfIdfModel`] over a corpus.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    config: LexicalConfig,
}

impl TfIdfVectorizer {
    pub fn new(config: LexicalConfig) -> Self {
        Self { config }
    }

    /// Fit the vocabulary and return the model plus one row per document.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> (TfIdfModel, Vec<SparseVector>) {
        let cfg = &self.config;
        let analyzed: Vec<Vec<String>> = documents
            .iter()
            .map(|d| analyze(d.as_ref(), cfg.ngram_min, cfg.ngram_max))
            .collect();

        // term -> (document frequency, total count)
        let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
        for terms in &analyzed {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in terms {
                let entry = stats.entry(term.as_str()).or_default();
                entry.1 += 1;
                if seen.insert(term.as_str()) {
                    entry.0 += 1;
                }
            }
        }

        let n_docs = documents.len();
        let max_doc_count = cfg.max_document_ratio * n_docs as f64;
        let mut kept: Vec<(&str, usize, usize)> = stats
            .into_iter()
            .filter(|(_, (df, _))| *df >= cfg.min_document_frequency && (*df as f64) <= max_doc_count)
            .map(|(term, (df, total))| (term, df, total))
            .collect();

        if kept.len() > cfg.max_features {
            kept.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));
            kept.truncate(cfg.max_features);
        }
        // Term ids follow alphabetical order.
        kept.sort_by(|a, b| a.0.cmp(b.0));

        let mut vocabulary = HashMap::with_capacity(kept.len());
        let mut idf = Vec::with_capacity(kept.len());
        for (id, (term, df, _)) in kept.iter().enumerate() {
            vocabulary.insert((*term).to_string(), id);
            idf.push(((1.0 + n_docs as f64) / (1.0 + *df as f64)).ln() + 1.0);
        }

        let model = TfIdfModel {
            vocabulary,
            idf,
            ngram_min: cfg.ngram_min,
            ngram_max: cfg.ngram_max,
        };
        let rows = analyzed
            .iter()
            .map(|terms| {
                let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
                for term in terms {
                    if let Some(&id) = model.vocabulary.get(term) {
                        *counts.entry(id).or_default() += 1.0;
                    }
                }
                let mut row = SparseVector {
                    entries: counts
                        .into_iter()
                        .map(|(id, tf)| (id, tf * model.idf[id]))
                        .collect(),
                };
                row.normalize();
                row
            })
            .collect();

        (model, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec![
            "install python on windows",
            "install python on linux",
            "configure proxy on linux",
            "reset vpn password",
        ]
    }

    #[test]
    fn singleton_terms_are_pruned() {
        let (model, _) = TfIdfVectorizer::new(LexicalConfig::default()).fit_transform(&corpus());
        assert!(model.contains("install"));
        assert!(model.contains("install python"));
        assert!(model.contains("linux"));
        assert!(!model.contains("windows"));
        assert!(!model.contains("vpn"));
    }

    #[test]
    fn ubiquitous_terms_are_pruned() {
        let docs = vec!["alpha beta", "alpha gamma", "alpha beta delta"];
        let (model, _) = TfIdfVectorizer::new(LexicalConfig::default()).fit_transform(&docs);
        assert!(!model.contains("alpha"));
        assert!(model.contains("beta"));
    }

    #[test]
    fn max_features_keeps_most_frequent() {
        let config = LexicalConfig {
            max_features: 1,
            ..Default::default()
        };
        let docs = vec!["rust rust cargo", "rust cargo", "rust", "other"];
        let (model, _) = TfIdfVectorizer::new(config).fit_transform(&docs);
        assert_eq!(model.term_count(), 1);
        assert!(model.contains("rust"));
    }

    #[test]
    fn rows_are_unit_length_or_empty() {
        let (_, rows) = TfIdfVectorizer::new(LexicalConfig::default()).fit_transform(&corpus());
        assert_eq!(rows.len(), 4);
        for row in &rows {
            if row.is_empty() {
                continue;
            }
            let norm = row.dot(row).sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
        assert!(rows[3].is_empty());
    }

    #[test]
    fn transform_ignores_unknown_terms() {
        let (model, _) = TfIdfVectorizer::new(LexicalConfig::default()).fit_transform(&corpus());
        assert!(model.transform("kubernetes helm").is_empty());
        assert!(!model.transform("python kubernetes").is_empty());
    }

    #[test]
    fn empty_corpus_has_empty_vocabulary() {
        let docs: Vec<&str> = Vec::new();
        let (model, rows) = TfIdfVectorizer::new(LexicalConfig::default()).fit_transform(&docs);
        assert_eq!(model.term_count(), 0);
        assert!(rows.is_empty());
    }
}
