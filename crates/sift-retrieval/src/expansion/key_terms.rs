//! Key-term extraction: the content words of a question.

use std::collections::HashSet;

use sift_core::constants::MIN_KEY_TERM_LEN;

/// Function words dropped from key terms. Deliberately smaller than the
/// lexical index's stopword list: interrogatives like "how" survive.
const KEY_TERM_STOPWORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "as", "are", "was", "were", "been", "be",
    "have", "has", "had", "do", "does", "did", "will", "would", "could", "should", "may",
    "might", "must", "can", "shall", "to", "of", "in", "for", "with", "by", "from", "about",
];

/// Lowercased whitespace tokens with edge punctuation trimmed, minus
/// stopwords and tokens shorter than three characters. First occurrence
/// order; repeats dropped.
pub fn extract_key_terms(question: &str) -> Vec<String> {
    let lower = question.to_lowercase();
    let mut seen = HashSet::new();
    lower
        .split_whitespace()
        .map(trim_edges)
        .filter(|t| t.chars().count() >= MIN_KEY_TERM_LEN && !KEY_TERM_STOPWORDS.contains(t))
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

/// Strip leading and trailing non-alphanumeric characters.
pub(crate) fn trim_edges(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}
