//! Property tests for the relational graph and node2vec training.

use fanmatch_core::config::GraphConfig;
use fanmatch_core::{Corpus, Entity, TraitScores};
use fanmatch_graph::{GraphEmbeddingModel, RelationalGraph};
use proptest::prelude::*;

const TAGS: &[&str] = &["패스", "점유율", "역습", "전통", "압박", "낭만", "자본"];

fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    prop::collection::vec(prop::collection::vec(0..TAGS.len(), 0..4), 0..8).prop_map(|teams| {
        let entities = teams
            .into_iter()
            .enumerate()
            .map(|(i, tags)| {
                Entity::new(
                    format!("team-{i}"),
                    tags.into_iter().map(|t| TAGS[t].to_string()).collect(),
                    TraitScores::new(),
                )
            })
            .collect();
        Corpus::from_entities(entities).unwrap()
    })
}

fn tiny_config(seed: u64) -> GraphConfig {
    GraphConfig {
        dimensions: 8,
        walk_length: 5,
        num_walks: 3,
        epochs: 1,
        seed,
        ..GraphConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_edge_weight_is_positive(corpus in corpus_strategy()) {
        let graph = RelationalGraph::build(&corpus);
        for w in graph.graph.edge_weights() {
            prop_assert!(*w > 0);
        }
        prop_assert!(graph.edge_count() <= corpus.len() * corpus.len().saturating_sub(1) / 2);
    }

    #[test]
    fn model_exists_iff_graph_has_nodes(corpus in corpus_strategy(), seed in 0u64..1000) {
        let graph = RelationalGraph::build(&corpus);
        let model = GraphEmbeddingModel::train(&graph, &tiny_config(seed)).unwrap();
        prop_assert_eq!(model.is_some(), graph.node_count() > 0);
        if let Some(model) = model {
            prop_assert_eq!(model.len(), graph.node_count());
        }
    }

    #[test]
    fn training_is_deterministic(corpus in corpus_strategy(), seed in 0u64..1000) {
        let graph = RelationalGraph::build(&corpus);
        let a = GraphEmbeddingModel::train(&graph, &tiny_config(seed)).unwrap();
        let b = GraphEmbeddingModel::train(&graph, &tiny_config(seed)).unwrap();
        if let (Some(a), Some(b)) = (a, b) {
            for name in graph.node_names() {
                prop_assert_eq!(a.vector(name), b.vector(name));
            }
        }
    }

    #[test]
    fn similarity_is_bounded(corpus in corpus_strategy(), seed in 0u64..1000) {
        let graph = RelationalGraph::build(&corpus);
        if let Some(model) = GraphEmbeddingModel::train(&graph, &tiny_config(seed)).unwrap() {
            let names = graph.node_names();
            for a in &names {
                for b in &names {
                    let s = model.similarity(a, b).unwrap();
                    prop_assert!((-1.0..=1.0).contains(&s));
                }
            }
        }
    }
}
