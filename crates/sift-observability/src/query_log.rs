//! Query log: question, variant count, strategy, latency, result count,
//! degraded signals.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sift_core::models::RetrievalStrategy;

/// One logged retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query: String,
    pub variants: usize,
    pub strategy: RetrievalStrategy,
    pub latency: Duration,
    pub result_count: usize,
    pub degraded_signals: usize,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    /// Create a new entry with the timestamp set to now.
    pub fn new(
        query: impl Into<String>,
        variants: usize,
        strategy: RetrievalStrategy,
        latency: Duration,
        result_count: usize,
        degraded_signals: usize,
    ) -> Self {
        Self {
            query: query.into(),
            variants,
            strategy,
            latency,
            result_count,
            degraded_signals,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Bounded query log. The oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: VecDeque<QueryLogEntry>,
    max_entries: usize,
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::with_capacity(sift_core::config::defaults::DEFAULT_QUERY_LOG_CAPACITY)
    }
}

impl QueryLog {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Record a query.
    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            query = %entry.query,
            variants = entry.variants,
            strategy = %entry.strategy,
            latency_ms = entry.latency.as_millis() as u64,
            result_count = entry.result_count,
            degraded_signals = entry.degraded_signals,
            "query logged"
        );

        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &QueryLogEntry> {
        self.entries.iter()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Average latency across all logged queries.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let last = latencies.len() - 1;
        let idx = ((p.clamp(0.0, 1.0) * last as f64).round() as usize).min(last);
        latencies[idx]
    }

    /// How many logged queries ended with the given strategy.
    pub fn count_by_strategy(&self, strategy: RetrievalStrategy) -> usize {
        self.entries.iter().filter(|e| e.strategy == strategy).count()
    }
}
