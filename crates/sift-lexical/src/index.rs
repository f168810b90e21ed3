//! LexicalIndex: readers-many / writer-one holder of the current snapshot.

use std::sync::{Arc, Mutex, RwLock};

use sift_core::config::LexicalConfig;
use sift_core::errors::{IndexError, SiftResult};
use sift_core::models::IndexHealth;
use sift_core::traits::IVectorStore;
use sift_core::DocumentChunk;
use tracing::{debug, info};

use crate::snapshot::LexicalSnapshot;

/// A lexical hit resolved against the snapshot that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordHit {
    pub chunk_index: usize,
    pub similarity: f64,
    pub chunk: DocumentChunk,
}

/// Keyword index over the corpus held by a vector store.
///
/// Queries read an `Arc<LexicalSnapshot>`; rebuilds are serialized by
/// `build_lock` (which also holds the last issued generation) and publish
/// the finished snapshot with a single write under `current`.
pub struct LexicalIndex {
    source: Arc<dyn IVectorStore>,
    config: LexicalConfig,
    current: RwLock<Option<Arc<LexicalSnapshot>>>,
    build_lock: Mutex<u64>,
}

impl LexicalIndex {
    pub fn new(source: Arc<dyn IVectorStore>, config: LexicalConfig) -> Self {
        Self {
            source,
            config,
            current: RwLock::new(None),
            build_lock: Mutex::new(0),
        }
    }

    /// The snapshot currently served, if any build has completed.
    pub fn snapshot(&self) -> SiftResult<Option<Arc<LexicalSnapshot>>> {
        let guard = self.current.read().map_err(|_| IndexError::LockPoisoned {
            what: "lexical snapshot".to_string(),
        })?;
        Ok(guard.clone())
    }

    /// Rebuild from the full corpus. The previous snapshot keeps serving
    /// until this one is published. On failure it stays in place.
    pub fn rebuild(&self) -> SiftResult<Arc<LexicalSnapshot>> {
        let mut generation = self.lock_builder()?;
        let corpus = self.source.enumerate_corpus()?;
        self.publish(&mut generation, corpus)
    }

    /// Rebuild from a corpus the caller already holds.
    pub fn rebuild_from(&self, corpus: Vec<DocumentChunk>) -> SiftResult<Arc<LexicalSnapshot>> {
        let mut generation = self.lock_builder()?;
        self.publish(&mut generation, corpus)
    }

    /// Current snapshot, building synchronously if none exists yet.
    ///
    /// Concurrent callers wait on the same build instead of each running one.
    /// An empty corpus yields an empty snapshot that is not published.
    pub fn ensure_built(&self) -> SiftResult<Arc<LexicalSnapshot>> {
        if let Some(snapshot) = self.snapshot()? {
            return Ok(snapshot);
        }
        let mut generation = self.lock_builder()?;
        // Another caller may have finished while we waited.
        if let Some(snapshot) = self.snapshot()? {
            return Ok(snapshot);
        }
        debug!("lexical index not built, building lazily");
        let corpus = self.source.enumerate_corpus()?;
        if corpus.is_empty() {
            // Left unpublished so the next query builds again once content exists.
            debug!("corpus empty, lexical index stays unbuilt");
            return Ok(Arc::new(LexicalSnapshot::build(
                corpus,
                &self.config,
                *generation,
            )));
        }
        self.publish(&mut generation, corpus)
    }

    /// `(chunk_index, similarity)` pairs against the current snapshot.
    pub fn search(&self, query: &str, k: usize) -> SiftResult<Vec<(usize, f64)>> {
        Ok(self.ensure_built()?.search(query, k))
    }

    /// Like [`search`](Self::search) but with chunks resolved from the same
    /// snapshot, so indices can never point into a newer generation.
    pub fn search_hits(&self, query: &str, k: usize) -> SiftResult<Vec<KeywordHit>> {
        Ok(self.ensure_built()?.hits(query, k))
    }

    pub fn health(&self) -> SiftResult<IndexHealth> {
        Ok(self
            .snapshot()?
            .map(|s| s.health())
            .unwrap_or_else(IndexHealth::unbuilt))
    }

    fn lock_builder(&self) -> SiftResult<std::sync::MutexGuard<'_, u64>> {
        self.build_lock.lock().map_err(|_| {
            IndexError::LockPoisoned {
                what: "lexical build lock".to_string(),
            }
            .into()
        })
    }

    fn publish(
        &self,
        generation: &mut u64,
        corpus: Vec<DocumentChunk>,
    ) -> SiftResult<Arc<LexicalSnapshot>> {
        let next = *generation + 1;
        let snapshot = Arc::new(LexicalSnapshot::build(corpus, &self.config, next));

        let mut guard = self.current.write().map_err(|_| IndexError::LockPoisoned {
            what: "lexical snapshot".to_string(),
        })?;
        *guard = Some(Arc::clone(&snapshot));
        drop(guard);
        *generation = next;

        info!(
            documents = snapshot.len(),
            terms = snapshot.term_count(),
            generation = next,
            "lexical index rebuilt"
        );
        Ok(snapshot)
    }
}
