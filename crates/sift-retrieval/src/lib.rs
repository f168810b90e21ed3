//! # sift-retrieval
//!
//! Hybrid retrieval over a documentation corpus.
//!
//! question → expansion → per-variant lexical + semantic search (rayon
//! fan-out) → weighted fusion with cross-variant max → threshold filter →
//! soft/hard fallback → formatted result.

pub mod engine;
pub mod expansion;
pub mod fallback;
pub mod formatter;
pub mod search;

pub use engine::{RetrievalEngine, RetrievalOutcome};
pub use expansion::{extract_key_terms, QueryExpander};
pub use formatter::{FormattedResult, SourceRef};
pub use search::{RankedCandidate, SemanticHit, SemanticRetriever};
