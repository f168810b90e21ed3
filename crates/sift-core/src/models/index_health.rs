use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health of the lexical index snapshot currently being served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexHealth {
    /// Whether any snapshot has been built yet.
    pub built: bool,
    /// Chunks in the snapshot.
    pub documents: usize,
    /// Vocabulary size after pruning.
    pub terms: usize,
    /// Distinct `page_id` values across the snapshot.
    pub pages: usize,
    /// Incremented on every successful rebuild; 0 means never built.
    pub generation: u64,
    pub built_at: Option<DateTime<Utc>>,
}

impl IndexHealth {
    pub fn unbuilt() -> Self {
        Self {
            built: false,
            documents: 0,
            terms: 0,
            pages: 0,
            generation: 0,
            built_at: None,
        }
    }
}
