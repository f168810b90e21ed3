//! Structured log events for key retrieval operations.

use sift_core::models::{RetrievalStrategy, Signal, SignalFailure};

/// A signal was dropped for one variant.
pub fn signal_degraded(variant: &str, signal: Signal, failure: SignalFailure, detail: &str) {
    tracing::warn!(
        event = "signal_degraded",
        variant = %variant,
        signal = %signal,
        failure = %failure,
        detail = %detail,
        "signal degraded"
    );
}

/// Fusion produced nothing above threshold and a fallback took over.
pub fn fallback_activated(strategy: RetrievalStrategy, key_terms: &[String]) {
    tracing::info!(
        event = "fallback_activated",
        strategy = %strategy,
        key_terms = ?key_terms,
        "fallback activated"
    );
}

/// Every retrieval strategy came up empty.
pub fn retrieval_exhausted(question: &str, key_terms: &[String]) {
    tracing::warn!(
        event = "retrieval_exhausted",
        question = %question,
        key_terms = ?key_terms,
        "no results from any strategy"
    );
}

/// A lexical rebuild was requested but failed; the previous snapshot keeps serving.
pub fn rebuild_failed(error: &str) {
    tracing::error!(event = "rebuild_failed", error = %error, "lexical rebuild failed");
}
