//! Skip-gram with negative sampling over walk sequences.
//!
//! Flat row-major weight matrices: `input` holds the node vectors exposed by
//! the model, `output` the context weights discarded after training.

use fanmatch_core::config::GraphConfig;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use fanmatch_core::errors::GraphError;

const UNIGRAM_POWER: f64 = 0.75;
const MAX_EXP: f32 = 6.0;

/// SGNS trainer for a vocabulary of `vocab_size` node indices.
pub struct SkipGramTrainer {
    vocab_size: usize,
    dimensions: usize,
    window: usize,
    negative: usize,
    epochs: usize,
    learning_rate: f64,
    min_learning_rate: f64,
    input: Vec<f32>,
    output: Vec<f32>,
}

impl SkipGramTrainer {
    /// Allocate weights. Input vectors are uniform in `[-0.5/d, 0.5/d)`,
    /// output vectors start at zero.
    pub fn new<R: Rng>(vocab_size: usize, config: &GraphConfig, rng: &mut R) -> Self {
        let dimensions = config.dimensions;
        let half = 0.5 / dimensions as f32;
        let input = (0..vocab_size * dimensions)
            .map(|_| rng.gen_range(-half..half))
            .collect();

        Self {
            vocab_size,
            dimensions,
            window: config.window,
            negative: config.negative,
            epochs: config.epochs,
            learning_rate: config.learning_rate,
            min_learning_rate: config.min_learning_rate.min(config.learning_rate),
            input,
            output: vec![0.0; vocab_size * dimensions],
        }
    }

    /// Run every epoch over the walks.
    pub fn train<R: Rng>(&mut self, walks: &[Vec<usize>], rng: &mut R) -> Result<(), GraphError> {
        let noise = self.noise_distribution(walks)?;
        let tokens_per_epoch: usize = walks.iter().map(Vec::len).sum();
        let total = (tokens_per_epoch * self.epochs).max(1) as f64;
        let mut processed = 0usize;

        let mut hidden_error = vec![0.0f32; self.dimensions];

        for _ in 0..self.epochs {
            for walk in walks {
                for (pos, &center) in walk.iter().enumerate() {
                    let progress = processed as f64 / total;
                    let lr = (self.learning_rate
                        - (self.learning_rate - self.min_learning_rate) * progress)
                        as f32;
                    processed += 1;

                    let lo = pos.saturating_sub(self.window);
                    let hi = (pos + self.window + 1).min(walk.len());
                    for (ctx_pos, &context) in walk.iter().enumerate().take(hi).skip(lo) {
                        if ctx_pos == pos {
                            continue;
                        }
                        self.update_pair(context, center, lr, &noise, &mut hidden_error, rng);
                    }
                }
            }
        }
        Ok(())
    }

    /// One positive update for `(context → center)` plus `negative` noise
    /// updates, accumulating the input gradient before applying it.
    fn update_pair<R: Rng>(
        &mut self,
        context: usize,
        center: usize,
        lr: f32,
        noise: &WeightedIndex<f64>,
        hidden_error: &mut [f32],
        rng: &mut R,
    ) {
        let d = self.dimensions;
        hidden_error.fill(0.0);
        let in_row = context * d;

        for k in 0..=self.negative {
            let (target, label) = if k == 0 {
                (center, 1.0f32)
            } else {
                let sampled = noise.sample(rng);
                if sampled == center {
                    continue;
                }
                (sampled, 0.0f32)
            };

            let out_row = target * d;
            let dot: f32 = self.input[in_row..in_row + d]
                .iter()
                .zip(&self.output[out_row..out_row + d])
                .map(|(a, b)| a * b)
                .sum();
            let g = (label - sigmoid(dot)) * lr;

            for i in 0..d {
                hidden_error[i] += g * self.output[out_row + i];
                self.output[out_row + i] += g * self.input[in_row + i];
            }
        }

        for (w, e) in self.input[in_row..in_row + d].iter_mut().zip(hidden_error.iter()) {
            *w += e;
        }
    }

    /// Unigram^0.75 over walk occurrences.
    fn noise_distribution(&self, walks: &[Vec<usize>]) -> Result<WeightedIndex<f64>, GraphError> {
        let mut counts = vec![0usize; self.vocab_size];
        for &node in walks.iter().flatten() {
            if node >= self.vocab_size {
                return Err(GraphError::TrainingFailed {
                    reason: format!("walk node {node} outside vocabulary of {}", self.vocab_size),
                });
            }
            counts[node] += 1;
        }
        let weights: Vec<f64> = counts
            .iter()
            .map(|&c| (c as f64).powf(UNIGRAM_POWER))
            .collect();
        WeightedIndex::new(&weights).map_err(|e| GraphError::TrainingFailed {
            reason: format!("noise distribution: {e}"),
        })
    }

    /// Input vector of one node.
    pub fn vector(&self, node: usize) -> &[f32] {
        &self.input[node * self.dimensions..(node + 1) * self.dimensions]
    }

    /// Consume the trainer, returning one input vector per node.
    pub fn into_vectors(self) -> Vec<Vec<f32>> {
        self.input
            .chunks(self.dimensions)
            .map(<[f32]>::to_vec)
            .collect()
    }
}

fn sigmoid(x: f32) -> f32 {
    let x = x.clamp(-MAX_EXP, MAX_EXP);
    1.0 / (1.0 + (-x).exp())
}
