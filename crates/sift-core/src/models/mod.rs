mod degradation_event;
mod index_health;
mod retrieval_result;
mod scored_candidate;
mod signal;

pub use degradation_event::DegradationEvent;
pub use index_health::IndexHealth;
pub use retrieval_result::{NoResultsHint, RetrievalResult, RetrievalStrategy};
pub use scored_candidate::ScoredCandidate;
pub use signal::{Signal, SignalDegradation, SignalFailure};
