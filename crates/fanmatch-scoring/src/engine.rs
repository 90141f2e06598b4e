//! Per-pair score composition.

use fanmatch_core::config::{FanmatchConfig, ScoringConfig};
use fanmatch_core::errors::{FanmatchResult, GraphError};
use fanmatch_core::traits::IEmbeddingProvider;
use fanmatch_core::vector::cosine_similarity;
use fanmatch_core::{Category, Entity, RelationalSource, Scenario, ScoreBreakdown};
use fanmatch_graph::GraphEmbeddingModel;
use tracing::debug;

use crate::classifier::CategoryClassifier;
use crate::identity::IdentityWeight;
use crate::penalty::PenaltyEngine;

/// Scores (scenario, candidate) pairs against borrowed, read-only models.
///
/// `model` is `None` when the relational graph had no edges; every
/// relational lookup then uses the fallback.
pub struct ScoringEngine<'a> {
    embedder: &'a dyn IEmbeddingProvider,
    model: Option<&'a GraphEmbeddingModel>,
    classifier: CategoryClassifier,
    identity: IdentityWeight,
    penalty: PenaltyEngine,
    config: ScoringConfig,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(
        embedder: &'a dyn IEmbeddingProvider,
        model: Option<&'a GraphEmbeddingModel>,
        config: &FanmatchConfig,
    ) -> Self {
        Self {
            embedder,
            model,
            classifier: CategoryClassifier::new(&config.classifier),
            identity: IdentityWeight::from_config(&config.scoring),
            penalty: PenaltyEngine::new(&config.penalty),
            config: config.scoring.clone(),
        }
    }

    /// Score one pair, embedding the query and tag text on demand.
    pub fn score(&self, scenario: &Scenario, candidate: &Entity) -> FanmatchResult<ScoreBreakdown> {
        if is_self_match(scenario.anchor_name(), &candidate.name) {
            return Ok(ScoreBreakdown::excluded(&candidate.name));
        }
        let query_vec = self.embedder.embed(&scenario.query)?;
        let tag_vec = self.embedder.embed(&candidate.tag_text())?;
        Ok(self.score_prepared(scenario, candidate, &query_vec, &tag_vec))
    }

    /// Score one pair from precomputed embeddings.
    pub fn score_prepared(
        &self,
        scenario: &Scenario,
        candidate: &Entity,
        query_vec: &[f32],
        tag_vec: &[f32],
    ) -> ScoreBreakdown {
        let anchor = scenario.anchor_name();
        if is_self_match(anchor, &candidate.name) {
            return ScoreBreakdown::excluded(&candidate.name);
        }

        // Blank text has no meaning to compare, whatever the provider returns for it.
        let blank_tags = candidate.style_tags.iter().all(|t| t.trim().is_empty());
        let semantic = if blank_tags || scenario.query.trim().is_empty() {
            0.0
        } else {
            cosine_similarity(query_vec, tag_vec) as f64
        };
        let (relational, relational_source) = self.relational(anchor, &candidate.name);

        let category = self.classifier.classify(&scenario.query);
        let identity_weight = self.identity.weight(candidate.scores.get(category));
        let penalty = self.penalty.factor(category, candidate);

        let score = (self.config.alpha * semantic + self.config.beta * relational)
            * identity_weight
            * penalty;

        ScoreBreakdown {
            candidate: candidate.name.clone(),
            excluded: false,
            semantic: Some(semantic),
            relational: Some(relational),
            relational_source: Some(relational_source),
            category: Some(category),
            identity_weight: Some(identity_weight),
            penalty: Some(penalty),
            score,
        }
    }

    /// Relational signal for an anchor/candidate pair.
    pub fn relational(&self, anchor: Option<&str>, candidate: &str) -> (f64, RelationalSource) {
        let fallback = (self.config.relational_fallback, RelationalSource::Fallback);
        let (Some(anchor), Some(model)) = (anchor, self.model) else {
            return fallback;
        };

        match model.similarity(anchor, candidate) {
            Ok(sim) => (sim as f64, RelationalSource::Model),
            Err(GraphError::UnknownNode { name }) => {
                debug!(anchor, candidate, unknown = %name, "node not in graph, using relational fallback");
                fallback
            }
            Err(e) => {
                debug!(anchor, candidate, error = %e, "relational lookup failed, using fallback");
                fallback
            }
        }
    }

    pub fn classify(&self, query: &str) -> Category {
        self.classifier.classify(query)
    }

    pub fn embedder(&self) -> &'a dyn IEmbeddingProvider {
        self.embedder
    }

    pub fn model(&self) -> Option<&'a GraphEmbeddingModel> {
        self.model
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

/// Bidirectional substring test between the anchor and a candidate name.
///
/// "아스널" excludes "아스널 FC". Unrelated names that happen to contain one
/// another are excluded too.
pub fn is_self_match(anchor: Option<&str>, candidate: &str) -> bool {
    match anchor {
        Some(anchor) => candidate.contains(anchor) || anchor.contains(candidate),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanmatch_core::TraitScores;
    use std::collections::HashMap;

    /// Every non-blank text embeds to the same unit vector.
    struct ConstantEmbedder;

    impl IEmbeddingProvider for ConstantEmbedder {
        fn embed(&self, text: &str) -> FanmatchResult<Vec<f32>> {
            Ok(if text.trim().is_empty() {
                vec![0.0, 0.0]
            } else {
                vec![1.0, 0.0]
            })
        }
        fn embed_batch(&self, texts: &[String]) -> FanmatchResult<Vec<Vec<f32>>> {
            texts.iter().map(|t| self.embed(t)).collect()
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "constant"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    fn team(name: &str, tags: &[&str], scores: TraitScores) -> Entity {
        Entity::new(name, tags.iter().map(|t| t.to_string()).collect(), scores)
    }

    fn model() -> GraphEmbeddingModel {
        let mut vectors = HashMap::new();
        vectors.insert("a".to_string(), vec![1.0, 0.0]);
        vectors.insert("b".to_string(), vec![0.0, 1.0]);
        vectors.insert("c".to_string(), vec![1.0, 1.0]);
        GraphEmbeddingModel::from_vectors(vectors, 2)
    }

    #[test]
    fn self_match_is_bidirectional() {
        assert!(is_self_match(Some("아스널"), "아스널 FC"));
        assert!(is_self_match(Some("토트넘 홋스퍼 FC"), "토트넘 홋스퍼"));
        assert!(!is_self_match(Some("맨체스터 시티"), "맨체스터 유나이티드"));
        assert!(!is_self_match(None, "anything"));
    }

    #[test]
    fn excluded_pair_scores_zero_with_empty_breakdown() {
        let config = FanmatchConfig::default();
        let engine = ScoringEngine::new(&ConstantEmbedder, None, &config);
        let b = engine
            .score(&Scenario::new("아스널", "패스 축구"), &team("아스널 FC", &["패스"], TraitScores::new()))
            .unwrap();
        assert!(b.excluded);
        assert_eq!(b.score, 0.0);
        assert_eq!(b.semantic, None);
    }

    #[test]
    fn no_model_uses_fallback() {
        let config = FanmatchConfig::default();
        let engine = ScoringEngine::new(&ConstantEmbedder, None, &config);
        let b = engine
            .score(&Scenario::new("a", "성적 좋은 팀"), &team("b", &["x"], TraitScores::new()))
            .unwrap();
        assert_eq!(b.relational, Some(0.5));
        assert_eq!(b.relational_source, Some(RelationalSource::Fallback));
        // (0.7 * 1 + 0.3 * 0.5) * 0.85 * 1
        assert!((b.score - 0.85 * 0.85).abs() < 1e-9);
    }

    #[test]
    fn known_nodes_use_model_cosine() {
        let config = FanmatchConfig::default();
        let m = model();
        let engine = ScoringEngine::new(&ConstantEmbedder, Some(&m), &config);
        let (r, source) = engine.relational(Some("a"), "b");
        assert_eq!(source, RelationalSource::Model);
        assert!(r.abs() < 1e-9);
        let (r, _) = engine.relational(Some("a"), "c");
        assert!((r - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn unknown_node_and_sentinel_use_fallback() {
        let config = FanmatchConfig::default();
        let m = model();
        let engine = ScoringEngine::new(&ConstantEmbedder, Some(&m), &config);
        assert_eq!(engine.relational(Some("a"), "zzz"), (0.5, RelationalSource::Fallback));
        assert_eq!(engine.relational(Some("zzz"), "a"), (0.5, RelationalSource::Fallback));
        assert_eq!(engine.relational(None, "a"), (0.5, RelationalSource::Fallback));

        let b = engine
            .score(&Scenario::new("NONE", "q"), &team("a", &["x"], TraitScores::new()))
            .unwrap();
        assert_eq!(b.relational_source, Some(RelationalSource::Fallback));
    }

    #[test]
    fn blank_tags_give_zero_semantic() {
        let config = FanmatchConfig::default();
        let engine = ScoringEngine::new(&ConstantEmbedder, None, &config);
        let b = engine
            .score(&Scenario::unanchored("성적"), &team("b", &[], TraitScores::new()))
            .unwrap();
        assert_eq!(b.semantic, Some(0.0));
        assert!((b.score - 0.3 * 0.5 * 0.85).abs() < 1e-9);
    }

    /// Frames every text, blank included, like a tokenizer with special tokens.
    struct FramingEmbedder;

    impl IEmbeddingProvider for FramingEmbedder {
        fn embed(&self, _text: &str) -> FanmatchResult<Vec<f32>> {
            Ok(vec![1.0, 0.0])
        }
        fn embed_batch(&self, texts: &[String]) -> FanmatchResult<Vec<Vec<f32>>> {
            texts.iter().map(|t| self.embed(t)).collect()
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "framing"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn blank_text_is_zero_semantic_for_any_provider() {
        let config = FanmatchConfig::default();
        let engine = ScoringEngine::new(&FramingEmbedder, None, &config);

        let untagged = engine
            .score(&Scenario::unanchored("성적"), &team("b", &[], TraitScores::new()))
            .unwrap();
        assert_eq!(untagged.semantic, Some(0.0));
        assert!((untagged.score - 0.3 * 0.5 * 0.85).abs() < 1e-9);

        let blank_query = engine
            .score(&Scenario::unanchored("   "), &team("b", &["x"], TraitScores::new()))
            .unwrap();
        assert_eq!(blank_query.semantic, Some(0.0));

        let tagged = engine
            .score(&Scenario::unanchored("성적"), &team("b", &["x"], TraitScores::new()))
            .unwrap();
        assert_eq!(tagged.semantic, Some(1.0));
    }

    #[test]
    fn exclusion_tests_the_raw_anchor() {
        let config = FanmatchConfig::default();
        let engine = ScoringEngine::new(&ConstantEmbedder, None, &config);
        let b = engine
            .score(&Scenario::new("아스널 ", "패스 축구"), &team("아스널FC", &["패스"], TraitScores::new()))
            .unwrap();
        assert!(!b.excluded);

        let b = engine
            .score(&Scenario::new("아스널", "패스 축구"), &team("아스널FC", &["패스"], TraitScores::new()))
            .unwrap();
        assert!(b.excluded);
    }

    #[test]
    fn underdog_penalty_scales_score() {
        let config = FanmatchConfig::default();
        let engine = ScoringEngine::new(&ConstantEmbedder, None, &config);
        let rich = TraitScores::new()
            .with(Category::Money, 9.0)
            .with(Category::UnderdogFeel, 2.0);
        let b = engine
            .score(&Scenario::unanchored("언더독의 기적을 보고 싶어"), &team("rich", &["x"], rich))
            .unwrap();
        assert_eq!(b.category, Some(Category::UnderdogFeel));
        assert_eq!(b.penalty, Some(0.4));
        let w = 0.7 + 0.04 * 0.6;
        assert!((b.identity_weight.unwrap() - w).abs() < 1e-12);
        assert!((b.score - 0.85 * w * 0.4).abs() < 1e-9);
    }

    #[test]
    fn custom_weights_change_fusion() {
        let mut config = FanmatchConfig::default();
        config.scoring.alpha = 0.0;
        config.scoring.beta = 1.0;
        let engine = ScoringEngine::new(&ConstantEmbedder, None, &config);
        let b = engine
            .score(&Scenario::unanchored("성적"), &team("b", &["x"], TraitScores::new()))
            .unwrap();
        assert!((b.score - 0.5 * 0.85).abs() < 1e-9);
    }
}
