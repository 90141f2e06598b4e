//! node2vec biased random walks.
//!
//! Second-order walk: the weight of stepping from `v` to `x`, having arrived
//! from `t`, is `w(v,x)/p` when `x == t`, `w(v,x)` when `x` neighbours `t`,
//! and `w(v,x)/q` otherwise. The first step of a walk uses the raw edge
//! weights.

use fanmatch_core::config::GraphConfig;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::relational::RelationalGraph;

/// Samples walks over a [`RelationalGraph`] as sequences of node indices.
pub struct WalkSampler {
    adjacency: Vec<Vec<(usize, f64)>>,
    walk_length: usize,
    num_walks: usize,
    p: f64,
    q: f64,
}

impl WalkSampler {
    pub fn new(graph: &RelationalGraph, config: &GraphConfig) -> Self {
        Self {
            adjacency: graph.adjacency(),
            walk_length: config.walk_length,
            num_walks: config.num_walks,
            p: config.p,
            q: config.q,
        }
    }

    /// `num_walks` rounds; each round shuffles the node order and starts one
    /// walk from every node.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<Vec<usize>> {
        let mut order: Vec<usize> = (0..self.adjacency.len()).collect();
        let mut walks = Vec::with_capacity(self.num_walks * order.len());

        for _ in 0..self.num_walks {
            order.shuffle(rng);
            for &start in &order {
                walks.push(self.walk_from(start, rng));
            }
        }
        walks
    }

    /// One walk of at most `walk_length` nodes. Ends early at a node with no
    /// neighbours.
    pub fn walk_from<R: Rng>(&self, start: usize, rng: &mut R) -> Vec<usize> {
        let mut walk = Vec::with_capacity(self.walk_length);
        walk.push(start);

        while walk.len() < self.walk_length {
            let current = walk[walk.len() - 1];
            let neighbours = &self.adjacency[current];
            if neighbours.is_empty() {
                break;
            }

            let weights: Vec<f64> = match walk.len() {
                1 => neighbours.iter().map(|&(_, w)| w).collect(),
                n => {
                    let previous = walk[n - 2];
                    neighbours
                        .iter()
                        .map(|&(x, w)| self.biased_weight(previous, x, w))
                        .collect()
                }
            };

            match WeightedIndex::new(&weights) {
                Ok(dist) => walk.push(neighbours[dist.sample(rng)].0),
                Err(_) => break,
            }
        }
        walk
    }

    fn biased_weight(&self, previous: usize, candidate: usize, weight: f64) -> f64 {
        if candidate == previous {
            weight / self.p
        } else if self.adjacency[previous].iter().any(|&(n, _)| n == candidate) {
            weight
        } else {
            weight / self.q
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}
