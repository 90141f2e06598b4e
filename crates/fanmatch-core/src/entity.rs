//! Entity (team) with style tags and per-category trait scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::constants::{DEFAULT_CATEGORY_SCORE, MAX_CATEGORY_SCORE, MIN_CATEGORY_SCORE};

/// Per-category scores on a 0–10 scale.
///
/// Categories without a rating read as [`DEFAULT_CATEGORY_SCORE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    scores: BTreeMap<Category, f64>,
}

impl TraitScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a score, clamped into [0, 10]. NaN is ignored.
    pub fn set(&mut self, category: Category, score: f64) {
        if score.is_nan() {
            return;
        }
        self.scores
            .insert(category, score.clamp(MIN_CATEGORY_SCORE, MAX_CATEGORY_SCORE));
    }

    /// Builder-style [`TraitScores::set`].
    pub fn with(mut self, category: Category, score: f64) -> Self {
        self.set(category, score);
        self
    }

    /// Score for a category, or the default when unrated.
    pub fn get(&self, category: Category) -> f64 {
        self.scores
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_SCORE)
    }

    /// Whether the category carries an explicit rating.
    pub fn is_rated(&self, category: Category) -> bool {
        self.scores.contains_key(&category)
    }
}

/// A candidate entity. Immutable once loaded into a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique name.
    pub name: String,
    /// Style tags, deduplicated, in first-seen order.
    pub style_tags: Vec<String>,
    pub scores: TraitScores,
}

impl Entity {
    pub fn new(name: impl Into<String>, style_tags: Vec<String>, scores: TraitScores) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(style_tags.len());
        for tag in style_tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self {
            name: name.into(),
            style_tags: tags,
            scores,
        }
    }

    /// The text embedded for semantic comparison: tags joined by a space.
    pub fn tag_text(&self) -> String {
        self.style_tags.join(" ")
    }

    /// Number of tags shared with another entity.
    pub fn shared_tag_count(&self, other: &Entity) -> usize {
        self.style_tags
            .iter()
            .filter(|t| other.style_tags.contains(t))
            .count()
    }
}
