//! # sift-embeddings
//!
//! Query-side embedding for semantic retrieval: a deterministic local
//! provider, an ordered fallback chain, and a cached query embedder.

pub mod cache;
pub mod degradation;
pub mod providers;
pub mod query_embedder;

pub use cache::QueryCache;
pub use degradation::EmbeddingChain;
pub use providers::HashedTermEmbedder;
pub use query_embedder::QueryEmbedder;
