/// Lexical index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("lock poisoned: {what}")]
    LockPoisoned { what: String },

    #[error("index build failed: {reason}")]
    BuildFailed { reason: String },
}
