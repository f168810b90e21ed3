//! Span definitions per operation: retrieval, lexical rebuild, embedding.

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($question:expr, $top_k:expr) => {
        tracing::info_span!("sift.retrieval", question = %$question, top_k = $top_k)
    };
}

/// Create a lexical rebuild span.
#[macro_export]
macro_rules! rebuild_span {
    ($trigger:expr) => {
        tracing::info_span!("sift.rebuild", trigger = %$trigger)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $variant:expr) => {
        tracing::debug_span!("sift.embedding", provider = %$provider, variant = %$variant)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "sift.retrieval";
    pub const REBUILD: &str = "sift.rebuild";
    pub const EMBEDDING: &str = "sift.embedding";
}
