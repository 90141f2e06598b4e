//! TOML configuration, one section per subsystem.
//!
//! Every section uses `#[serde(default)]`, so an empty document yields the
//! defaults in [`defaults`] and partial tables override only named fields.

mod classifier_config;
pub mod defaults;
mod embedding_config;
mod graph_config;
mod observability_config;
mod penalty_config;
mod scoring_config;

pub use classifier_config::{ClassifierConfig, KeywordRule, DEFAULT_KEYWORD_TABLE};
pub use embedding_config::EmbeddingConfig;
pub use graph_config::GraphConfig;
pub use observability_config::ObservabilityConfig;
pub use penalty_config::{PenaltyConfig, PenaltyRuleConfig};
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::{FanmatchError, FanmatchResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FanmatchConfig {
    pub embedding: EmbeddingConfig,
    pub graph: GraphConfig,
    pub scoring: ScoringConfig,
    pub classifier: ClassifierConfig,
    pub penalty: PenaltyConfig,
    pub observability: ObservabilityConfig,
}

impl FanmatchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> FanmatchResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| FanmatchError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric contracts the engines rely on.
    pub fn validate(&self) -> FanmatchResult<()> {
        let s = &self.scoring;
        for (field, value) in [
            ("alpha", s.alpha),
            ("beta", s.beta),
            ("relational_fallback", s.relational_fallback),
            ("identity_base", s.identity_base),
            ("identity_span", s.identity_span),
            ("identity_exponent", s.identity_exponent),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("scoring.{field} must be finite, got {value}")));
            }
        }
        if s.alpha < 0.0 || s.beta < 0.0 {
            return Err(invalid(format!(
                "scoring weights must be non-negative: alpha={}, beta={}",
                s.alpha, s.beta
            )));
        }
        if (s.alpha + s.beta - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid(format!(
                "scoring.alpha + scoring.beta must equal 1.0, got {}",
                s.alpha + s.beta
            )));
        }
        if !(-1.0..=1.0).contains(&s.relational_fallback) {
            return Err(invalid(format!(
                "scoring.relational_fallback must lie in [-1, 1], got {}",
                s.relational_fallback
            )));
        }
        // W must stay non-negative and non-decreasing in the category score.
        if s.identity_base < 0.0 || s.identity_span < 0.0 || s.identity_exponent <= 0.0 {
            return Err(invalid(format!(
                "identity weight needs base >= 0, span >= 0, exponent > 0: base={}, span={}, exponent={}",
                s.identity_base, s.identity_span, s.identity_exponent
            )));
        }

        let g = &self.graph;
        if g.dimensions == 0 || g.walk_length == 0 || g.num_walks == 0 || g.window == 0 {
            return Err(invalid(
                "graph.dimensions, walk_length, num_walks and window must be positive".into(),
            ));
        }
        if g.epochs == 0 {
            return Err(invalid("graph.epochs must be positive".into()));
        }
        if !(g.p > 0.0 && g.q > 0.0 && g.p.is_finite() && g.q.is_finite()) {
            return Err(invalid(format!(
                "graph.p and graph.q must be positive: p={}, q={}",
                g.p, g.q
            )));
        }
        if !(g.learning_rate > 0.0
            && g.min_learning_rate >= 0.0
            && g.learning_rate.is_finite()
            && g.min_learning_rate.is_finite())
        {
            return Err(invalid("graph learning rates must be positive".into()));
        }

        if self.embedding.dimensions == 0 || self.embedding.batch_size == 0 {
            return Err(invalid(
                "embedding.dimensions and embedding.batch_size must be positive".into(),
            ));
        }

        if let Some(rule) = self
            .penalty
            .rules
            .iter()
            .find(|r| !r.min_score.is_finite() || !(r.factor.is_finite() && r.factor >= 0.0))
        {
            return Err(invalid(format!(
                "penalty rule on {} needs a finite min_score and a finite non-negative factor: min_score={}, factor={}",
                rule.when_category, rule.min_score, rule.factor
            )));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> FanmatchError {
    FanmatchError::ConfigError(reason)
}
