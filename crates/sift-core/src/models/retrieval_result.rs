use std::fmt;

use serde::{Deserialize, Serialize};

use super::ScoredCandidate;

/// Ordered, deduplicated candidates for one question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub candidates: Vec<ScoredCandidate>,
}

impl RetrievalResult {
    pub fn new(candidates: Vec<ScoredCandidate>) -> Self {
        Self { candidates }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.doc_id.as_str()).collect()
    }
}

/// Which stage produced the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStrategy {
    /// Fused candidates at or above the similarity threshold.
    Fusion,
    /// Nothing cleared the threshold; best fused candidates returned anyway.
    SoftFallback,
    /// Nothing fused; per-key-term lexical search produced the result.
    HardFallback,
    /// Every strategy came up empty.
    Exhausted,
}

impl fmt::Display for RetrievalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RetrievalStrategy::Fusion => "fusion",
            RetrievalStrategy::SoftFallback => "soft_fallback",
            RetrievalStrategy::HardFallback => "hard_fallback",
            RetrievalStrategy::Exhausted => "exhausted",
        };
        f.write_str(s)
    }
}

/// Recovery hint attached to an exhausted retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoResultsHint {
    /// Key terms extracted from the question; may be empty.
    pub key_terms: Vec<String>,
}

impl NoResultsHint {
    /// User-facing "nothing found" text.
    pub fn message(&self) -> String {
        if self.key_terms.is_empty() {
            "I couldn't find relevant information in the indexed documentation to answer your \
             question. Please ensure the relevant pages have been indexed and try rephrasing \
             your question."
                .to_string()
        } else {
            format!(
                "I couldn't find specific information about your query. You might want to search \
                 for these terms individually: {}. Please try rephrasing your question or check \
                 if the relevant pages have been indexed.",
                self.key_terms.join(", ")
            )
        }
    }
}
