use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Query expansion configuration, including the loadable synonym table.
///
/// ```toml
/// [expansion.synonyms]
/// install = ["setup", "configure"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// When false, only the original question is searched.
    pub enabled: bool,
    /// Cap on variants per question, the original included.
    pub max_variants: usize,
    /// Synonyms tried per matched term, taken from the front of its list.
    pub max_synonyms_per_term: usize,
    /// Term → ordered synonym list.
    pub synonyms: BTreeMap<String, Vec<String>>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_variants: defaults::DEFAULT_MAX_VARIANTS,
            max_synonyms_per_term: defaults::DEFAULT_MAX_SYNONYMS_PER_TERM,
            synonyms: defaults::default_synonyms(),
        }
    }
}
