//! # fanmatch-scoring
//!
//! Fuses the semantic and relational signals into one label score per
//! (scenario, candidate) pair:
//!
//! ```text
//! final = (alpha * S + beta * R) * W * P
//! ```
//!
//! - `S`: cosine between the query and the candidate's joined style tags
//! - `R`: graph-embedding similarity of anchor and candidate, or the fallback
//! - `W`: identity weight from the candidate's score in the query's category
//! - `P`: product of matching penalty rules
//!
//! A candidate whose name contains the anchor (or vice versa) scores 0.

pub mod batch;
pub mod classifier;
pub mod engine;
pub mod identity;
pub mod penalty;

pub use batch::BatchEvaluator;
pub use classifier::CategoryClassifier;
pub use engine::ScoringEngine;
pub use identity::IdentityWeight;
pub use penalty::PenaltyEngine;
