use serde::{Deserialize, Serialize};

use super::defaults;
use crate::category::Category;

/// A multiplicative penalty: when the query classifies as `when_category`
/// and the candidate's `score_category` score is at least `min_score`,
/// the final score is multiplied by `factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyRuleConfig {
    pub when_category: Category,
    pub score_category: Category,
    pub min_score: f64,
    pub factor: f64,
}

/// Penalty rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyConfig {
    pub rules: Vec<PenaltyRuleConfig>,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            // Rich clubs do not answer an underdog question.
            rules: vec![PenaltyRuleConfig {
                when_category: Category::UnderdogFeel,
                score_category: Category::Money,
                min_score: defaults::DEFAULT_UNDERDOG_MONEY_THRESHOLD,
                factor: defaults::DEFAULT_UNDERDOG_MONEY_FACTOR,
            }],
        }
    }
}
