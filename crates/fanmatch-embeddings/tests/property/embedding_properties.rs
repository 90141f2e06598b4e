//! Property tests for the embedding engine over the offline provider.

use fanmatch_core::config::EmbeddingConfig;
use fanmatch_core::traits::IEmbeddingProvider;
use fanmatch_embeddings::{cosine_similarity, EmbeddingEngine, TfIdfProvider};
use proptest::prelude::*;

fn engine() -> EmbeddingEngine {
    let config = EmbeddingConfig {
        dimensions: 128,
        batch_size: 3,
        ..EmbeddingConfig::default()
    };
    EmbeddingEngine::with_provider(Box::new(TfIdfProvider::new(128)), config)
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec("[가-힣a-z]{1,5}", 0..5).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn batch_equals_individual_in_order(texts in prop::collection::vec(text(), 0..12)) {
        let e = engine();
        let batch = e.embed_batch(&texts).unwrap();
        prop_assert_eq!(batch.len(), texts.len());
        let fresh = engine();
        for (t, v) in texts.iter().zip(&batch) {
            prop_assert_eq!(&fresh.embed(t).unwrap(), v);
        }
    }

    #[test]
    fn vectors_have_fixed_width_and_unit_or_zero_norm(t in text()) {
        let v = engine().embed(&t).unwrap();
        prop_assert_eq!(v.len(), 128);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in text(), b in text()) {
        let e = engine();
        let ab = e.similarity(&a, &b).unwrap();
        let ba = e.similarity(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!((-1.0..=1.0).contains(&ab));
        let va = e.embed(&a).unwrap();
        let vb = e.embed(&b).unwrap();
        prop_assert_eq!(ab, cosine_similarity(&va, &vb));
    }
}
