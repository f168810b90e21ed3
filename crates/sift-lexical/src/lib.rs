//! # sift-lexical
//!
//! Keyword relevance over the whole corpus.
//!
//! The index is an immutable [`LexicalSnapshot`] (documents + TF-IDF rows,
//! always the same length and order) behind an `Arc`. Readers clone the
//! `Arc` and never block a rebuild; a rebuild constructs a fresh snapshot
//! off to the side and swaps it in as one pointer write.

pub mod index;
pub mod snapshot;
pub mod stopwords;
pub mod tokenizer;
pub mod vectorizer;

pub use index::{KeywordHit, LexicalIndex};
pub use snapshot::LexicalSnapshot;
pub use vectorizer::{SparseVector, TfIdfModel, TfIdfVectorizer};
