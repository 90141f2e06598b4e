//! Scenario × candidate cross product.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use fanmatch_core::errors::FanmatchResult;
use fanmatch_core::{Entity, Scenario, ScoreBreakdown, ScoredResult};
use rayon::prelude::*;
use tracing::{info, info_span};

use crate::engine::{is_self_match, ScoringEngine};

/// Scores every candidate against every scenario.
///
/// Output is scenario-major, candidate-minor, exactly
/// `scenarios.len() * candidates.len()` rows.
pub struct BatchEvaluator<'e, 'a> {
    engine: &'e ScoringEngine<'a>,
    parallel: bool,
}

impl<'e, 'a> BatchEvaluator<'e, 'a> {
    pub fn new(engine: &'e ScoringEngine<'a>) -> Self {
        Self {
            parallel: engine.config().parallel,
            engine,
        }
    }

    /// Override the configured parallelism.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn evaluate(
        &self,
        scenarios: &[Scenario],
        candidates: &[Entity],
    ) -> FanmatchResult<Vec<ScoredResult>> {
        let breakdowns = self.evaluate_breakdowns(scenarios, candidates)?;
        Ok(scenarios
            .iter()
            .zip(breakdowns)
            .flat_map(|(scenario, row)| {
                row.into_iter()
                    .map(move |b| ScoredResult::new(scenario, b.candidate, b.score))
            })
            .collect())
    }

    /// Full breakdowns, one row per scenario in input order.
    pub fn evaluate_breakdowns(
        &self,
        scenarios: &[Scenario],
        candidates: &[Entity],
    ) -> FanmatchResult<Vec<Vec<ScoreBreakdown>>> {
        let _span = info_span!(
            "fanmatch.batch",
            scenarios = scenarios.len(),
            candidates = candidates.len()
        )
        .entered();
        let start = Instant::now();

        let vectors = self.prefetch(scenarios, candidates)?;
        let tag_texts: Vec<String> = candidates.iter().map(Entity::tag_text).collect();

        let mut rows = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            let query_vec = lookup(&vectors, &scenario.query);
            let score_one = |(candidate, tags): (&Entity, &String)| {
                self.engine
                    .score_prepared(scenario, candidate, query_vec, lookup(&vectors, tags))
            };

            let row: Vec<ScoreBreakdown> = if self.parallel {
                candidates
                    .par_iter()
                    .zip(tag_texts.par_iter())
                    .map(score_one)
                    .collect()
            } else {
                candidates.iter().zip(tag_texts.iter()).map(score_one).collect()
            };
            rows.push(row);
        }

        info!(
            scenarios = scenarios.len(),
            candidates = candidates.len(),
            pairs = scenarios.len() * candidates.len(),
            texts_embedded = vectors.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch evaluated"
        );
        Ok(rows)
    }

    /// Embed each distinct query and tag text once.
    ///
    /// Tag texts of candidates excluded under every scenario are skipped.
    fn prefetch(
        &self,
        scenarios: &[Scenario],
        candidates: &[Entity],
    ) -> FanmatchResult<HashMap<String, Vec<f32>>> {
        if scenarios.is_empty() || candidates.is_empty() {
            return Ok(HashMap::new());
        }

        let mut texts: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut push = |text: String| {
            if seen.insert(text.clone()) {
                texts.push(text);
            }
        };

        for scenario in scenarios {
            push(scenario.query.clone());
        }
        for candidate in candidates {
            let needed = scenarios
                .iter()
                .any(|s| !is_self_match(s.anchor_name(), &candidate.name));
            if needed {
                push(candidate.tag_text());
            }
        }

        let embedded = self.engine.embedder().embed_batch(&texts)?;
        Ok(texts.into_iter().zip(embedded).collect())
    }
}

/// Missing texts read as an empty vector, which has cosine 0 with anything.
fn lookup<'v>(vectors: &'v HashMap<String, Vec<f32>>, text: &str) -> &'v [f32] {
    vectors.get(text).map(Vec::as_slice).unwrap_or_default()
}
