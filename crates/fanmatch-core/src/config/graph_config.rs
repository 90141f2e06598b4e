use serde::{Deserialize, Serialize};

use super::defaults;

/// Node2vec walk sampling and skip-gram training parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Width of each node vector.
    pub dimensions: usize,
    /// Nodes per walk, start node included.
    pub walk_length: usize,
    /// Walks started from every node.
    pub num_walks: usize,
    /// Skip-gram context window (positions on each side).
    pub window: usize,
    /// Return parameter: higher values discourage stepping back.
    pub p: f64,
    /// In-out parameter: higher values keep walks local.
    pub q: f64,
    /// Passes over the walk corpus.
    pub epochs: usize,
    /// Negative samples per positive pair.
    pub negative: usize,
    /// Initial SGD learning rate.
    pub learning_rate: f64,
    /// Learning rate at the end of training.
    pub min_learning_rate: f64,
    /// Seed for walk sampling, initialisation, and negative sampling.
    pub seed: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_GRAPH_DIMENSIONS,
            walk_length: defaults::DEFAULT_WALK_LENGTH,
            num_walks: defaults::DEFAULT_NUM_WALKS,
            window: defaults::DEFAULT_WINDOW,
            p: defaults::DEFAULT_RETURN_P,
            q: defaults::DEFAULT_IN_OUT_Q,
            epochs: defaults::DEFAULT_EPOCHS,
            negative: defaults::DEFAULT_NEGATIVE_SAMPLES,
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            min_learning_rate: defaults::DEFAULT_MIN_LEARNING_RATE,
            seed: defaults::DEFAULT_SEED,
        }
    }
}
