//! Scenarios (anchor + query) and the scored output records.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::constants::NONE_ANCHOR;

/// One user preference statement, optionally anchored on a favoured team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scenario {
    /// Favoured entity name, or the "none" sentinel.
    pub anchor: String,
    /// Free-text preference.
    pub query: String,
}

impl Scenario {
    pub fn new(anchor: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            query: query.into(),
        }
    }

    /// A scenario without an anchor team.
    pub fn unanchored(query: impl Into<String>) -> Self {
        Self::new(NONE_ANCHOR, query)
    }

    /// The raw anchor name, or `None` for the sentinel (any case) or a blank
    /// anchor. Surrounding whitespace only matters for sentinel detection; a
    /// named anchor is returned untouched.
    pub fn anchor_name(&self) -> Option<&str> {
        let trimmed = self.anchor.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NONE_ANCHOR) {
            None
        } else {
            Some(&self.anchor)
        }
    }
}

/// Where the relational signal of a pair came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationalSource {
    /// Cosine similarity from the trained graph embedding.
    Model,
    /// The fallback constant (no anchor, no model, or unknown node).
    Fallback,
}

/// Every signal that went into one pair's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub candidate: String,
    /// True when self-exclusion fired; all other signals are then unset.
    pub excluded: bool,
    pub semantic: Option<f64>,
    pub relational: Option<f64>,
    pub relational_source: Option<RelationalSource>,
    pub category: Option<Category>,
    pub identity_weight: Option<f64>,
    pub penalty: Option<f64>,
    pub score: f64,
}

impl ScoreBreakdown {
    /// Breakdown for a pair removed by self-exclusion.
    pub fn excluded(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            excluded: true,
            semantic: None,
            relational: None,
            relational_source: None,
            category: None,
            identity_weight: None,
            penalty: None,
            score: 0.0,
        }
    }
}

/// One output row: a (scenario, candidate) pair and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(rename = "anchor_team")]
    pub anchor: String,
    #[serde(rename = "user_query")]
    pub query: String,
    #[serde(rename = "team_name")]
    pub candidate_name: String,
    #[serde(rename = "label_score")]
    pub score: f64,
}

impl ScoredResult {
    pub fn new(scenario: &Scenario, candidate_name: impl Into<String>, score: f64) -> Self {
        Self {
            anchor: scenario.anchor.clone(),
            query: scenario.query.clone(),
            candidate_name: candidate_name.into(),
            score,
        }
    }
}
