//! Immutable lexical index generation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sift_core::config::LexicalConfig;
use sift_core::models::IndexHealth;
use sift_core::DocumentChunk;

use crate::index::KeywordHit;
use crate::vectorizer::{SparseVector, TfIdfModel, TfIdfVectorizer};

/// One built generation of the keyword index.
///
/// `documents[i]` and `rows[i]` always describe the same chunk; the
/// snapshot is never mutated after construction.
#[derive(Debug)]
pub struct LexicalSnapshot {
    documents: Vec<DocumentChunk>,
    rows: Vec<SparseVector>,
    model: TfIdfModel,
    pages: usize,
    generation: u64,
    built_at: DateTime<Utc>,
}

impl LexicalSnapshot {
    /// Fit a new snapshot over the given corpus.
    pub fn build(documents: Vec<DocumentChunk>, config: &LexicalConfig, generation: u64) -> Self {
        let (model, rows) = {
            let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
            TfIdfVectorizer::new(config.clone()).fit_transform(&texts)
        };
        let pages = documents
            .iter()
            .map(|d| d.metadata.page_id.as_str())
            .filter(|p| !p.is_empty())
            .collect::<HashSet<_>>()
            .len();

        Self {
            documents,
            rows,
            model,
            pages,
            generation,
            built_at: Utc::now(),
        }
    }

    /// Cosine similarity search: `(chunk_index, similarity)` pairs with
    /// similarity > 0, descending, at most `k`. Ties keep corpus order.
    pub fn search(&self, query: &str, k: usize) -> Vec<(usize, f64)> {
        if k == 0 || self.documents.is_empty() {
            return Vec::new();
        }
        let query_vec = self.model.transform(query);
        if query_vec.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (idx, row.dot(&query_vec)))
            .filter(|(_, sim)| *sim > 0.0)
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(k);
        scored
    }

    /// [`search`](Self::search) with each index resolved to its chunk.
    pub fn hits(&self, query: &str, k: usize) -> Vec<KeywordHit> {
        self.search(query, k)
            .into_iter()
            .filter_map(|(chunk_index, similarity)| {
                self.documents.get(chunk_index).map(|chunk| KeywordHit {
                    chunk_index,
                    similarity,
                    chunk: chunk.clone(),
                })
            })
            .collect()
    }

    pub fn document(&self, chunk_index: usize) -> Option<&DocumentChunk> {
        self.documents.get(chunk_index)
    }

    pub fn documents(&self) -> &[DocumentChunk] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.model.term_count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn health(&self) -> IndexHealth {
        IndexHealth {
            built: true,
            documents: self.documents.len(),
            terms: self.model.term_count(),
            pages: self.pages,
            generation: self.generation,
            built_at: Some(self.built_at),
        }
    }
}
