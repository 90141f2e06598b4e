//! Property tests for core value types.

use fanmatch_core::vector::cosine_similarity;
use fanmatch_core::{Category, Entity, Scenario, TraitScores};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    #[test]
    fn scores_always_within_range(cat in category(), raw in -100.0f64..100.0) {
        let scores = TraitScores::new().with(cat, raw);
        let v = scores.get(cat);
        prop_assert!((0.0..=10.0).contains(&v));
    }

    #[test]
    fn unrated_categories_read_five(cat in category(), other in category(), raw in 0.0f64..=10.0) {
        prop_assume!(cat != other);
        let scores = TraitScores::new().with(other, raw);
        prop_assert_eq!(scores.get(cat), 5.0);
        prop_assert!(!scores.is_rated(cat));
    }

    #[test]
    fn tags_are_deduplicated_in_order(tags in prop::collection::vec("[a-c]", 0..10)) {
        let e = Entity::new("t", tags.clone(), TraitScores::new());
        let mut expected: Vec<String> = Vec::new();
        for t in tags {
            if !expected.contains(&t) {
                expected.push(t);
            }
        }
        prop_assert_eq!(e.tag_text(), expected.join(" "));
        prop_assert_eq!(e.style_tags, expected);
    }

    #[test]
    fn sentinel_in_any_case_means_no_anchor(mask in prop::collection::vec(any::<bool>(), 4)) {
        let anchor: String = "none"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        let scenario = Scenario::new(anchor, "q");
        prop_assert_eq!(scenario.anchor_name(), None);
    }

    #[test]
    fn cosine_is_bounded_and_symmetric(
        a in prop::collection::vec(-10.0f32..10.0, 8),
        b in prop::collection::vec(-10.0f32..10.0, 8),
    ) {
        let ab = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, cosine_similarity(&b, &a));
    }
}
