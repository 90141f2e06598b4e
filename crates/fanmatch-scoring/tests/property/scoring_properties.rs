//! Property tests for score composition.

use fanmatch_core::{Category, Entity, FanmatchConfig, Scenario, TraitScores};
use fanmatch_embeddings::providers::TfIdfProvider;
use fanmatch_scoring::engine::is_self_match;
use fanmatch_scoring::{BatchEvaluator, CategoryClassifier, IdentityWeight, ScoringEngine};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "패스", "점유율", "언더독", "기적", "자본", "전통", "명문", "공격", "스타", "열정", "역습",
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..5).prop_map(|w| w.join(" "))
}

fn entity_strategy() -> impl Strategy<Value = Entity> {
    (
        "[a-z]{1,6}",
        prop::collection::vec(prop::sample::select(WORDS), 0..4),
        prop::collection::vec(0.0f64..=10.0, Category::COUNT),
    )
        .prop_map(|(name, tags, raw)| {
            let scores = Category::ALL
                .iter()
                .zip(raw)
                .fold(TraitScores::new(), |s, (c, v)| s.with(*c, v));
            Entity::new(name, tags.into_iter().map(String::from).collect(), scores)
        })
}

fn unique_entities() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec(entity_strategy(), 0..6).prop_map(|mut v| {
        for (i, e) in v.iter_mut().enumerate() {
            e.name = format!("{}-{i}", e.name);
        }
        v
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn identity_weight_is_monotonic(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
        let w = IdentityWeight::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(w.weight(lo) <= w.weight(hi));
        prop_assert!((0.7..=1.3 + 1e-12).contains(&w.weight(hi)));
    }

    #[test]
    fn money_keyword_beats_underdog(prefix in text_strategy(), suffix in text_strategy()) {
        let query = format!("{prefix} 돈 {suffix} 언더독");
        prop_assert_eq!(CategoryClassifier::default().classify(&query), Category::Money);
    }

    #[test]
    fn self_match_scores_zero(anchor in "[가-힣]{1,4}", suffix in "[ A-Z]{0,4}", query in text_strategy()) {
        let provider = TfIdfProvider::new(64);
        let config = FanmatchConfig::default();
        let engine = ScoringEngine::new(&provider, None, &config);
        let candidate = Entity::new(format!("{anchor}{suffix}"), vec!["패스".into()], TraitScores::new());
        let b = engine.score(&Scenario::new(anchor.clone(), query), &candidate).unwrap();
        prop_assert!(is_self_match(Some(anchor.as_str()), &candidate.name));
        prop_assert!(b.excluded);
        prop_assert_eq!(b.score, 0.0);
    }

    #[test]
    fn underdog_penalty_ratio_is_exact(entity in entity_strategy(), rest in text_strategy()) {
        let provider = TfIdfProvider::new(64);
        let config = FanmatchConfig::default();
        let mut no_penalty = config.clone();
        no_penalty.penalty.rules.clear();

        let scenario = Scenario::unanchored(format!("언더독 {rest}"));
        prop_assume!(CategoryClassifier::default().classify(&scenario.query) == Category::UnderdogFeel);

        let with = ScoringEngine::new(&provider, None, &config).score(&scenario, &entity).unwrap();
        let without = ScoringEngine::new(&provider, None, &no_penalty).score(&scenario, &entity).unwrap();

        if entity.scores.get(Category::Money) >= 8.0 {
            prop_assert!((with.score - 0.4 * without.score).abs() < 1e-12);
        } else {
            prop_assert_eq!(with.score, without.score);
        }
    }

    #[test]
    fn batch_shape_and_purity(
        entities in unique_entities(),
        queries in prop::collection::vec(text_strategy(), 0..4),
    ) {
        let provider = TfIdfProvider::new(64);
        let config = FanmatchConfig::default();
        let engine = ScoringEngine::new(&provider, None, &config);
        let scenarios: Vec<Scenario> = queries.into_iter().map(Scenario::unanchored).collect();

        let batch = BatchEvaluator::new(&engine);
        let first = batch.evaluate(&scenarios, &entities).unwrap();
        let second = batch.evaluate(&scenarios, &entities).unwrap();

        prop_assert_eq!(first.len(), scenarios.len() * entities.len());
        prop_assert_eq!(&first, &second);
        for (i, row) in first.iter().enumerate() {
            prop_assert_eq!(&row.query, &scenarios[i / entities.len().max(1)].query);
            prop_assert_eq!(&row.candidate_name, &entities[i % entities.len().max(1)].name);
            prop_assert!(row.score.abs() <= 1.3 + 1e-9);
        }
    }
}
