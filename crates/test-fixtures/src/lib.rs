//! Fixture loader for sift corpora and golden datasets.
//!
//! Fixture JSON lives next to this crate's manifest and is shared by the
//! integration tests and benches of every other crate.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use sift_core::DocumentChunk;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

#[derive(Deserialize)]
struct CorpusFile {
    chunks: Vec<DocumentChunk>,
}

/// Load a corpus fixture (`{"chunks": [...]}`) as document chunks.
pub fn load_corpus(relative_path: &str) -> Vec<DocumentChunk> {
    load_fixture::<CorpusFile>(relative_path).chunks
}

/// One expected query expansion.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionCase {
    pub question: String,
    pub expected: Vec<String>,
}

/// Load golden query-expansion cases.
pub fn load_expansion_cases() -> Vec<ExpansionCase> {
    #[derive(Deserialize)]
    struct File {
        cases: Vec<ExpansionCase>,
    }
    load_fixture::<File>("golden/expansion/cases.json").cases
}
