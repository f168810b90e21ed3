//! Parallel per-variant search.
//!
//! Semantic tasks run on the engine's bounded rayon pool and come back over
//! a channel tagged with the variant index. Lexical search reads the shared
//! in-memory snapshot and runs on the calling thread's rayon scope, so a
//! stalled embedder or store can never hold up the lexical signal. Results
//! are slotted by variant index; output order never depends on completion
//! order.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPool;
use sift_core::models::{Signal, SignalDegradation, SignalFailure};
use sift_lexical::{KeywordHit, LexicalSnapshot};
use sift_observability::tracing_setup::events;
use tracing::debug;

use super::{SemanticHit, SemanticRetriever, SignalError};

/// Signal hits for one variant. An absent signal is an empty list.
#[derive(Debug, Clone, Default)]
pub struct VariantSignals {
    pub variant: String,
    pub semantic: Vec<SemanticHit>,
    pub lexical: Vec<KeywordHit>,
}

/// Everything the fan-out produced, in variant order.
#[derive(Debug, Clone, Default)]
pub struct FanOut {
    pub signals: Vec<VariantSignals>,
    pub degradations: Vec<SignalDegradation>,
}

type SemanticResult = Result<Vec<SemanticHit>, SignalError>;

/// Search every variant with both signals.
///
/// `lexical` is the snapshot all variants read, or the reason there is
/// none. Semantic results are awaited for at most `timeout`; signals that
/// fail or miss the deadline are recorded as degradations and contribute
/// nothing.
pub fn fan_out(
    pool: &ThreadPool,
    semantic: &Arc<SemanticRetriever>,
    lexical: &Result<Arc<LexicalSnapshot>, SignalError>,
    variants: &[String],
    k: usize,
    timeout: Duration,
) -> FanOut {
    let deadline = Instant::now() + timeout;
    let (tx, rx) = mpsc::channel::<(usize, SemanticResult)>();

    for (idx, variant) in variants.iter().enumerate() {
        let retriever = Arc::clone(semantic);
        let text = variant.clone();
        let sender = tx.clone();
        pool.spawn(move || {
            let result = retriever.search(&text, k);
            let _ = sender.send((idx, result));
        });
    }
    drop(tx);

    // In-memory and CPU-bound; runs while the semantic tasks are in flight.
    let lexical_hits: Option<Vec<Vec<KeywordHit>>> = lexical.as_ref().ok().map(|snapshot| {
        variants
            .par_iter()
            .map(|variant| snapshot.hits(variant, k))
            .collect()
    });

    let mut semantic_slots: Vec<Option<SemanticResult>> = vec![None; variants.len()];
    let mut received = 0usize;
    let mut timed_out = false;

    while received < variants.len() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((idx, result)) => semantic_slots[idx] = Some(result),
            Err(RecvTimeoutError::Timeout) => {
                timed_out = true;
                break;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
        received += 1;
    }
    debug!(
        expected = variants.len(),
        received, timed_out, "semantic fan-out collected"
    );

    let mut out = FanOut::default();
    let mut lexical_hits = lexical_hits.map(|hits| hits.into_iter());
    for (idx, variant) in variants.iter().enumerate() {
        let semantic = match semantic_slots[idx].take() {
            Some(Ok(hits)) => hits,
            Some(Err(e)) => {
                degrade(&mut out, variant, Signal::Semantic, e);
                Vec::new()
            }
            None => {
                let e = missing(timed_out, timeout);
                degrade(&mut out, variant, Signal::Semantic, e);
                Vec::new()
            }
        };

        let lexical = match (lexical, lexical_hits.as_mut().and_then(Iterator::next)) {
            (Ok(_), Some(hits)) => hits,
            (Err(e), _) => {
                degrade(&mut out, variant, Signal::Lexical, e.clone());
                Vec::new()
            }
            (Ok(_), None) => Vec::new(),
        };

        out.signals.push(VariantSignals {
            variant: variant.clone(),
            semantic,
            lexical,
        });
    }
    out
}

fn missing(timed_out: bool, timeout: Duration) -> SignalError {
    if timed_out {
        SignalError::new(
            SignalFailure::TimedOut,
            format!("no result within {} ms", timeout.as_millis()),
        )
    } else {
        SignalError::new(
            SignalFailure::StoreUnavailable,
            "search task ended without a result",
        )
    }
}

fn degrade(out: &mut FanOut, variant: &str, signal: Signal, e: SignalError) {
    events::signal_degraded(variant, signal, e.failure, &e.detail);
    out.degradations.push(SignalDegradation {
        variant: variant.to_string(),
        signal,
        failure: e.failure,
        detail: e.detail,
    });
}
