//! InMemoryVectorStore: `IVectorStore` over a `RwLock<Vec<_>>`.

use std::collections::HashSet;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use sift_core::errors::{SiftResult, StoreError};
use sift_core::traits::{EmbeddedChunk, IVectorStore, MetadataFilter, Neighbor};
use sift_core::DocumentChunk;
use tracing::debug;

use crate::distance::cosine_distance;

/// Aggregate counts for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_chunks: usize,
    /// Distinct `page_id` values.
    pub total_pages: usize,
}

/// Brute-force vector store. Every search scans all records.
pub struct InMemoryVectorStore {
    records: RwLock<Vec<EmbeddedChunk>>,
    dimensions: usize,
}

impl InMemoryVectorStore {
    pub fn new(dimensions: usize) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            dimensions,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn stats(&self) -> SiftResult<StoreStats> {
        let records = self.read()?;
        let pages: HashSet<&str> = records
            .iter()
            .map(|r| r.chunk.metadata.page_id.as_str())
            .filter(|p| !p.is_empty())
            .collect();
        Ok(StoreStats {
            total_chunks: records.len(),
            total_pages: pages.len(),
        })
    }

    fn read(&self) -> SiftResult<std::sync::RwLockReadGuard<'_, Vec<EmbeddedChunk>>> {
        self.records.read().map_err(|_| poisoned())
    }

    fn write(&self) -> SiftResult<std::sync::RwLockWriteGuard<'_, Vec<EmbeddedChunk>>> {
        self.records.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> sift_core::SiftError {
    StoreError::Unavailable {
        reason: "record lock poisoned".to_string(),
    }
    .into()
}

impl IVectorStore for InMemoryVectorStore {
    fn search(&self, embedding: &[f32], limit: usize) -> SiftResult<Vec<Neighbor>> {
        if embedding.len() != self.dimensions {
            return Err(StoreError::DimensionMismatch {
                id: "<query>".to_string(),
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        let records = self.read()?;
        let mut scored: Vec<(usize, f64)> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (i, cosine_distance(embedding, &r.embedding)))
            .collect();
        scored.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(limit);

        Ok(scored
            .into_iter()
            .map(|(i, distance)| Neighbor {
                chunk: records[i].chunk.clone(),
                distance,
            })
            .collect())
    }

    fn enumerate_corpus(&self) -> SiftResult<Vec<DocumentChunk>> {
        Ok(self.read()?.iter().map(|r| r.chunk.clone()).collect())
    }

    fn upsert(&self, chunks: &[EmbeddedChunk]) -> SiftResult<usize> {
        for c in chunks {
            if c.embedding.len() != self.dimensions {
                return Err(StoreError::DimensionMismatch {
                    id: c.chunk.id.clone(),
                    expected: self.dimensions,
                    actual: c.embedding.len(),
                }
                .into());
            }
            if c.chunk.id.is_empty() {
                return Err(StoreError::InvalidRecord {
                    id: String::new(),
                    reason: "empty id".to_string(),
                }
                .into());
            }
        }

        let mut records = self.write()?;
        for c in chunks {
            match records.iter_mut().find(|r| r.chunk.id == c.chunk.id) {
                Some(existing) => *existing = c.clone(),
                None => records.push(c.clone()),
            }
        }
        debug!(written = chunks.len(), total = records.len(), "upserted chunks");
        Ok(chunks.len())
    }

    fn delete_by(&self, filter: &MetadataFilter) -> SiftResult<usize> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|r| !filter.matches(&r.chunk.id, &r.chunk.metadata));
        let removed = before - records.len();
        debug!(removed, ?filter, "deleted chunks");
        Ok(removed)
    }

    fn clear(&self) -> SiftResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn count(&self) -> SiftResult<usize> {
        Ok(self.read()?.len())
    }
}
