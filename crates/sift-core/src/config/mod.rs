//! Configuration, loaded from TOML with per-section defaults.

pub mod defaults;
mod embedding_config;
mod expansion_config;
mod lexical_config;
mod observability_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use expansion_config::ExpansionConfig;
pub use lexical_config::LexicalConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use crate::constants::MAX_QUERY_VARIANTS;
use crate::errors::{ConfigError, SiftResult};

/// Root configuration. Every section is optional in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub retrieval: RetrievalConfig,
    pub lexical: LexicalConfig,
    pub expansion: ExpansionConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl SiftConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> SiftResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> SiftResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    /// Reject values the engine cannot honor.
    pub fn validate(&self) -> SiftResult<()> {
        let r = &self.retrieval;
        if r.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be at least 1"));
        }
        if !(r.semantic_weight >= 0.0 && r.semantic_weight.is_finite()) {
            return Err(invalid("retrieval.semantic_weight", "must be a finite value >= 0"));
        }
        if !(r.keyword_weight >= 0.0 && r.keyword_weight.is_finite()) {
            return Err(invalid("retrieval.keyword_weight", "must be a finite value >= 0"));
        }
        if !(0.0..=r.max_combined_score()).contains(&r.similarity_threshold) {
            return Err(invalid(
                "retrieval.similarity_threshold",
                "must lie within [0, semantic_weight + keyword_weight]",
            ));
        }
        if r.candidate_multiplier == 0 {
            return Err(invalid("retrieval.candidate_multiplier", "must be at least 1"));
        }

        let l = &self.lexical;
        if l.ngram_min == 0 || l.ngram_min > l.ngram_max {
            return Err(invalid(
                "lexical.ngram_min",
                "must satisfy 1 <= ngram_min <= ngram_max",
            ));
        }
        if l.max_features == 0 {
            return Err(invalid("lexical.max_features", "must be at least 1"));
        }
        if !(l.max_document_ratio > 0.0 && l.max_document_ratio <= 1.0) {
            return Err(invalid("lexical.max_document_ratio", "must lie within (0, 1]"));
        }

        let e = &self.expansion;
        if e.max_variants == 0 || e.max_variants > MAX_QUERY_VARIANTS {
            return Err(invalid(
                "expansion.max_variants",
                &format!("must lie within [1, {MAX_QUERY_VARIANTS}]"),
            ));
        }

        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::SiftError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
