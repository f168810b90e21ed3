//! Error taxonomy. Per-signal failures during retrieval are absorbed and
//! recorded as data (see `models::SignalFailure`); these types cover caller
//! misuse and administrative failures that do surface as `Err`.

mod config_error;
mod embedding_error;
mod index_error;
mod retrieval_error;
mod store_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use index_error::IndexError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;

/// Top-level error for every sift crate.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("vector store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("lexical index error: {0}")]
    IndexError(#[from] IndexError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type SiftResult<T> = Result<T, SiftError>;
