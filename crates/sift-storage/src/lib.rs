//! # sift-storage
//!
//! Reference implementation of `IVectorStore`. Chunks are kept in insertion
//! order so `enumerate_corpus` is stable across calls, which keeps lexical
//! chunk indices reproducible.

pub mod distance;
pub mod memory_store;

pub use memory_store::{InMemoryVectorStore, StoreStats};
