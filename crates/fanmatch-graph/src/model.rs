//! Trained node2vec model: name → vector lookup and cosine similarity.

use std::collections::HashMap;

use fanmatch_core::config::GraphConfig;
use fanmatch_core::errors::{FanmatchResult, GraphError};
use fanmatch_core::vector::cosine_similarity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, info_span};

use crate::relational::RelationalGraph;
use crate::skipgram::SkipGramTrainer;
use crate::walks::WalkSampler;

/// Node vectors keyed by entity name. Read-only after training.
#[derive(Debug, Clone)]
pub struct GraphEmbeddingModel {
    vectors: HashMap<String, Vec<f32>>,
    dimensions: usize,
}

impl GraphEmbeddingModel {
    /// Sample walks and fit skip-gram vectors.
    ///
    /// Returns `Ok(None)` for a graph with no nodes; callers then use the
    /// relational fallback for every pair.
    pub fn train(graph: &RelationalGraph, config: &GraphConfig) -> FanmatchResult<Option<Self>> {
        let _span = info_span!("fanmatch.train", nodes = graph.node_count()).entered();

        if graph.is_empty() {
            info!("relational graph is empty, skipping graph embedding");
            return Ok(None);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let walks = WalkSampler::new(graph, config).sample(&mut rng);
        let mut trainer = SkipGramTrainer::new(graph.node_count(), config, &mut rng);
        trainer.train(&walks, &mut rng)?;

        let names = graph.node_names();
        let vectors = names
            .iter()
            .map(|s| s.to_string())
            .zip(trainer.into_vectors())
            .collect::<HashMap<_, _>>();

        info!(
            nodes = vectors.len(),
            walks = walks.len(),
            dimensions = config.dimensions,
            epochs = config.epochs,
            seed = config.seed,
            "graph embedding trained"
        );

        Ok(Some(Self {
            vectors,
            dimensions: config.dimensions,
        }))
    }

    /// Build from precomputed vectors.
    pub fn from_vectors(vectors: HashMap<String, Vec<f32>>, dimensions: usize) -> Self {
        Self { vectors, dimensions }
    }

    /// Cosine similarity of two node vectors, in [-1, 1].
    pub fn similarity(&self, a: &str, b: &str) -> Result<f32, GraphError> {
        Ok(cosine_similarity(self.lookup(a)?, self.lookup(b)?))
    }

    fn lookup(&self, name: &str) -> Result<&[f32], GraphError> {
        self.vectors
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownNode {
                name: name.to_string(),
            })
    }

    pub fn vector(&self, name: &str) -> Option<&[f32]> {
        self.vectors.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vectors.contains_key(name)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
