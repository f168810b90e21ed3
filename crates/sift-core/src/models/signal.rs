use std::fmt;

use serde::{Deserialize, Serialize};

/// The two relevance signals fused per query variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Semantic,
    Lexical,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Semantic => write!(f, "semantic"),
            Signal::Lexical => write!(f, "lexical"),
        }
    }
}

/// Why a signal was absent for a variant. Absorbed, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalFailure {
    /// The embedding provider returned no vector.
    EmbeddingUnavailable,
    /// The vector store query failed.
    StoreUnavailable,
    /// The lexical index could not be built or queried.
    LexicalUnavailable,
    /// The signal missed the per-variant deadline.
    TimedOut,
}

impl fmt::Display for SignalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalFailure::EmbeddingUnavailable => "embedding unavailable",
            SignalFailure::StoreUnavailable => "store unavailable",
            SignalFailure::LexicalUnavailable => "lexical index unavailable",
            SignalFailure::TimedOut => "timed out",
        };
        f.write_str(s)
    }
}

/// Record of one signal degraded to absent for one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalDegradation {
    pub variant: String,
    pub signal: Signal,
    pub failure: SignalFailure,
    pub detail: String,
}
