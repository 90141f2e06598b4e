//! # fanmatch-embeddings
//!
//! Semantic embedding service: maps text to a fixed-dimension vector and
//! compares two texts by cosine similarity.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine (IEmbeddingProvider)
//! ├── Provider (one, chosen by config)
//! │   ├── OnnxProvider (local sentence-embedding model)
//! │   ├── OllamaProvider (HTTP /api/embed)
//! │   └── TfIdfProvider (hashed terms, offline)
//! └── L1MemoryCache (moka, blake3 keys)
//! ```

pub mod cache;
pub mod engine;
pub mod providers;
pub mod similarity;

pub use cache::L1MemoryCache;
pub use engine::EmbeddingEngine;
pub use providers::{OllamaProvider, OnnxProvider, TfIdfProvider};
pub use similarity::cosine_similarity;
