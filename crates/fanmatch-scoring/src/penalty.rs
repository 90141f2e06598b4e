//! Multiplicative penalty rules.

use fanmatch_core::config::{PenaltyConfig, PenaltyRuleConfig};
use fanmatch_core::{Category, Entity};

/// Evaluates the configured rules for one (category, candidate) pair.
#[derive(Debug, Clone, Default)]
pub struct PenaltyEngine {
    rules: Vec<PenaltyRuleConfig>,
}

impl PenaltyEngine {
    pub fn new(config: &PenaltyConfig) -> Self {
        Self {
            rules: config.rules.clone(),
        }
    }

    /// Product of the factors of every matching rule; 1.0 when none match.
    ///
    /// A rule only matches a candidate that carries an explicit rating in
    /// the rule's score category.
    pub fn factor(&self, category: Category, candidate: &Entity) -> f64 {
        self.rules
            .iter()
            .filter(|rule| rule.when_category == category)
            .filter(|rule| {
                candidate.scores.is_rated(rule.score_category)
                    && candidate.scores.get(rule.score_category) >= rule.min_score
            })
            .map(|rule| rule.factor)
            .product()
    }

    pub fn rules(&self) -> &[PenaltyRuleConfig] {
        &self.rules
    }
}
