//! # fanmatch-runtime
//!
//! Builds the immutable service object every scoring call borrows from:
//! parsed config, loaded corpus, relational graph, trained graph embedding,
//! and the semantic embedding engine.

pub mod loader;
pub mod runtime;
pub mod tracing_setup;

pub use loader::{load_corpus_dir, load_corpus_file, load_scenarios_file, parse_scenarios};
pub use runtime::{FanmatchRuntime, RuntimeOptions};
pub use tracing_setup::init_tracing;
