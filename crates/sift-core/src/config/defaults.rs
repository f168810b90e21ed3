//! Default values for every configurable knob.

use std::collections::BTreeMap;

// Retrieval
pub const DEFAULT_TOP_K: usize = 8;
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.6;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.4;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.2;
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 2;
pub const DEFAULT_VARIANT_TIMEOUT_MS: u64 = 10_000;

// Lexical index
pub const DEFAULT_MAX_FEATURES: usize = 5_000;
pub const DEFAULT_NGRAM_MIN: usize = 1;
pub const DEFAULT_NGRAM_MAX: usize = 3;
pub const DEFAULT_MIN_DOCUMENT_FREQUENCY: usize = 2;
pub const DEFAULT_MAX_DOCUMENT_RATIO: f64 = 0.95;

// Expansion
pub const DEFAULT_MAX_VARIANTS: usize = 5;
pub const DEFAULT_MAX_SYNONYMS_PER_TERM: usize = 2;

// Embedding
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_024;
pub const DEFAULT_QUERY_CACHE_TTL_SECS: u64 = 3_600;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 10_000;

/// Built-in documentation-domain synonym table.
pub fn default_synonyms() -> BTreeMap<String, Vec<String>> {
    let table: &[(&str, &[&str])] = &[
        ("install", &["setup", "configure", "deploy", "installation"]),
        ("python", &["python3", "py"]),
        ("run", &["execute", "start", "launch", "invoke"]),
        ("create", &["make", "build", "generate", "initialize"]),
        ("delete", &["remove", "destroy", "clear", "uninstall"]),
        ("update", &["upgrade", "modify", "change", "patch"]),
        ("fix", &["resolve", "repair", "debug", "troubleshoot"]),
        ("error", &["issue", "problem", "exception", "bug", "failure"]),
        ("guide", &["tutorial", "documentation", "instructions", "steps"]),
        ("access", &["login", "authenticate", "connect", "permission"]),
        ("configure", &["settings", "options", "parameters", "config"]),
        ("deploy", &["release", "publish", "rollout"]),
        ("setup", &["configuration", "initialize", "prepare"]),
        ("connection", &["connectivity", "link", "integration"]),
        ("page", &["document", "article", "wiki"]),
        ("team", &["group", "department", "organization"]),
        ("project", &["repository", "workspace", "codebase"]),
        ("version", &["release", "build", "edition"]),
        ("environment", &["env", "server", "platform", "system"]),
    ];
    table
        .iter()
        .map(|(term, syns)| {
            (
                (*term).to_string(),
                syns.iter().map(|s| (*s).to_string()).collect(),
            )
        })
        .collect()
}
