//! Query expansion: one question becomes a small ordered set of variants.

mod key_terms;

use std::collections::HashSet;

use sift_core::config::ExpansionConfig;
use sift_core::constants::{INTERROGATIVE_PREFIXES, MAX_QUERY_VARIANTS};

pub use key_terms::extract_key_terms;
use key_terms::trim_edges;

/// Derives query variants from a question. Pure and deterministic.
///
/// Variant order: the original question, then either the question forms
/// ("how to …", "what is …") or the prefix-stripped base, then the key-term
/// variant, then synonym substitutions. Duplicates are dropped keeping the
/// first occurrence, and the list is capped at `max_variants`.
#[derive(Debug, Clone)]
pub struct QueryExpander {
    config: ExpansionConfig,
}

impl QueryExpander {
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Variants for `question`. Empty only when the trimmed question is empty.
    pub fn expand(&self, question: &str) -> Vec<String> {
        let original = question.trim();
        if original.is_empty() {
            return Vec::new();
        }
        let cap = self.config.max_variants.clamp(1, MAX_QUERY_VARIANTS);
        let mut variants = Variants::new(cap);
        variants.push(original.to_string());
        if !self.config.enabled {
            return variants.into_vec();
        }

        let lower = original.to_lowercase();
        match strip_interrogative(&lower) {
            Some(base) => {
                if !base.is_empty() {
                    variants.push(base.to_string());
                }
            }
            None => {
                variants.push(format!("how to {lower}"));
                variants.push(format!("what is {lower}"));
            }
        }

        let key_terms = extract_key_terms(original);
        if !key_terms.is_empty() {
            variants.push(key_terms.join(" "));
        }

        for variant in self.synonym_variants(&lower) {
            if variants.is_full() {
                break;
            }
            variants.push(variant);
        }
        variants.into_vec()
    }

    /// Whole-token substitutions, matched terms taken in question order.
    fn synonym_variants(&self, lower: &str) -> Vec<String> {
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        let mut matched = HashSet::new();
        let mut out = Vec::new();

        for token in &tokens {
            let term = trim_edges(token);
            if !matched.insert(term) {
                continue;
            }
            let Some(synonyms) = self.config.synonyms.get(term) else {
                continue;
            };
            for synonym in synonyms.iter().take(self.config.max_synonyms_per_term) {
                let replaced: Vec<&str> = tokens
                    .iter()
                    .map(|t| if trim_edges(t) == term { synonym.as_str() } else { *t })
                    .collect();
                out.push(replaced.join(" "));
            }
        }
        out
    }
}

/// Strip a leading interrogative phrase at a word boundary.
///
/// `None` when the question has no such prefix; `Some("")` when the
/// question is only the prefix.
fn strip_interrogative(lower: &str) -> Option<&str> {
    INTERROGATIVE_PREFIXES.iter().find_map(|prefix| {
        let rest = lower.strip_prefix(prefix)?;
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            Some(rest.trim())
        } else {
            None
        }
    })
}

/// Ordered, deduplicated, capped variant list.
struct Variants {
    items: Vec<String>,
    seen: HashSet<String>,
    cap: usize,
}

impl Variants {
    fn new(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            seen: HashSet::new(),
            cap,
        }
    }

    fn push(&mut self, variant: String) {
        if self.is_full() || variant.trim().is_empty() {
            return;
        }
        if self.seen.insert(variant.clone()) {
            self.items.push(variant);
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}
