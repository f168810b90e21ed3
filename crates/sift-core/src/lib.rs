//! # sift-core
//!
//! Foundation crate for the sift retrieval engine.
//! Defines document and candidate types, collaborator traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod chunk;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use chunk::{ChunkMetadata, DocumentChunk};
pub use config::SiftConfig;
pub use errors::{SiftError, SiftResult};
pub use models::{RetrievalResult, ScoredCandidate};
