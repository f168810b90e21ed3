/// sift version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard upper bound on query variants produced for one question.
pub const MAX_QUERY_VARIANTS: usize = 5;

/// Interrogative prefixes stripped by query expansion, in match order.
pub const INTERROGATIVE_PREFIXES: [&str; 5] = ["how to", "what is", "where is", "when to", "why"];

/// Minimum character length for a token to count as a key term.
pub const MIN_KEY_TERM_LEN: usize = 3;

/// Characters kept in a chunk preview before truncation.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;
