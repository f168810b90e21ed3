/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("question is empty after trimming")]
    EmptyQuery,

    #[error("invalid result width: top_k must be at least 1, got {top_k}")]
    InvalidTopK { top_k: usize },

    #[error("worker pool unavailable: {reason}")]
    WorkerPool { reason: String },
}
