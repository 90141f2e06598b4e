//! # fanmatch-graph
//!
//! The relational signal. Builds a weighted undirected graph from shared
//! style tags (`petgraph`), samples node2vec biased random walks over it,
//! and fits skip-gram node vectors whose cosine is the relational
//! similarity between two teams.
//!
//! ```text
//! Corpus ──► RelationalGraph ──► WalkSampler ──► SkipGramTrainer ──► GraphEmbeddingModel
//! ```
//!
//! Training is seeded and single-threaded, so a given corpus and
//! [`GraphConfig`](fanmatch_core::config::GraphConfig) always produce the
//! same vectors.

pub mod model;
pub mod relational;
pub mod skipgram;
pub mod walks;

pub use model::GraphEmbeddingModel;
pub use relational::RelationalGraph;
pub use skipgram::SkipGramTrainer;
pub use walks::WalkSampler;
