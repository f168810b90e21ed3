//! Per-variant signal search and score fusion.

mod fanout;
mod fusion;
mod semantic;

pub use fanout::{fan_out, FanOut, VariantSignals};
pub use fusion::{fuse, RankedCandidate};
pub use semantic::{SemanticHit, SemanticRetriever};

use sift_core::models::SignalFailure;

/// Why one signal produced nothing for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalError {
    pub failure: SignalFailure,
    pub detail: String,
}

impl SignalError {
    pub fn new(failure: SignalFailure, detail: impl Into<String>) -> Self {
        Self {
            failure,
            detail: detail.into(),
        }
    }
}
