//! # fanmatch-core
//!
//! Foundation crate for the fanmatch scoring engine.
//! Defines the entity corpus, scenarios, categories, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod category;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod entity;
pub mod errors;
pub mod scenario;
pub mod traits;
pub mod vector;

// Re-export the most commonly used types at the crate root.
pub use category::Category;
pub use config::FanmatchConfig;
pub use corpus::{Corpus, EntityRecord};
pub use entity::{Entity, TraitScores};
pub use errors::{FanmatchError, FanmatchResult};
pub use scenario::{RelationalSource, Scenario, ScoreBreakdown, ScoredResult};
