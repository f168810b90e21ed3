mod embedding;
mod vector_store;

pub use embedding::IEmbeddingProvider;
pub use vector_store::{EmbeddedChunk, IVectorStore, MetadataFilter, Neighbor};
