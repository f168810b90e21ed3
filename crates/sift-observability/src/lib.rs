//! # sift-observability
//!
//! Structured tracing (subscriber setup, span and event definitions) and the
//! query log the retrieval engine records into.

pub mod query_log;
pub mod tracing_setup;

pub use query_log::{QueryLog, QueryLogEntry};
pub use tracing_setup::init_tracing;
