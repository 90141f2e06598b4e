//! The immutable runtime service object.

use std::path::PathBuf;

use fanmatch_core::errors::{FanmatchError, FanmatchResult};
use fanmatch_core::traits::IEmbeddingProvider;
use fanmatch_core::{Corpus, FanmatchConfig, Scenario, ScoreBreakdown, ScoredResult};
use fanmatch_embeddings::EmbeddingEngine;
use fanmatch_graph::{GraphEmbeddingModel, RelationalGraph};
use fanmatch_scoring::{BatchEvaluator, ScoringEngine};

use crate::embedding_span;
use crate::loader::load_corpus_dir;
use crate::tracing_setup::events;

/// Inputs for [`FanmatchRuntime::new`].
///
/// `corpus` takes precedence over `corpus_dir`; one of them is required.
/// `config_toml` of `None` means all defaults.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    pub config_toml: Option<String>,
    pub corpus_dir: Option<PathBuf>,
    pub corpus: Option<Corpus>,
}

/// Everything scoring needs, built once at startup and shared read-only.
pub struct FanmatchRuntime {
    config: FanmatchConfig,
    corpus: Corpus,
    graph: RelationalGraph,
    model: Option<GraphEmbeddingModel>,
    embedder: EmbeddingEngine,
}

impl FanmatchRuntime {
    /// Parse config, load the corpus, build and train the graph, and create
    /// the configured embedding provider.
    ///
    /// # Errors
    /// Config, corpus, and provider failures are all fatal.
    pub fn new(options: RuntimeOptions) -> FanmatchResult<Self> {
        let (config, corpus) = Self::load(options)?;
        let embedder = {
            let _span =
                embedding_span!(config.embedding.provider, config.embedding.dimensions).entered();
            EmbeddingEngine::new(config.embedding.clone())?
        };
        Self::assemble(config, corpus, embedder)
    }

    /// As [`FanmatchRuntime::new`], with a caller-supplied embedding provider
    /// in place of the configured one.
    pub fn with_provider(
        options: RuntimeOptions,
        provider: Box<dyn IEmbeddingProvider>,
    ) -> FanmatchResult<Self> {
        let (config, corpus) = Self::load(options)?;
        let embedder = EmbeddingEngine::with_provider(provider, config.embedding.clone());
        Self::assemble(config, corpus, embedder)
    }

    fn load(options: RuntimeOptions) -> FanmatchResult<(FanmatchConfig, Corpus)> {
        let config = match options.config_toml.as_deref() {
            Some(toml) => FanmatchConfig::from_toml(toml)?,
            None => FanmatchConfig::default(),
        };

        let corpus = match (options.corpus, options.corpus_dir) {
            (Some(corpus), _) => corpus,
            (None, Some(dir)) => load_corpus_dir(&dir)?,
            (None, None) => {
                return Err(FanmatchError::ConfigError(
                    "no corpus given: set corpus or corpus_dir".to_string(),
                ))
            }
        };
        Ok((config, corpus))
    }

    fn assemble(
        config: FanmatchConfig,
        corpus: Corpus,
        embedder: EmbeddingEngine,
    ) -> FanmatchResult<Self> {
        events::provider_selected(embedder.active_provider(), embedder.dimensions());

        let graph = RelationalGraph::build(&corpus);
        let model = GraphEmbeddingModel::train(&graph, &config.graph)?;

        events::runtime_ready(corpus.len(), graph.node_count(), model.is_some());
        Ok(Self {
            config,
            corpus,
            graph,
            model,
            embedder,
        })
    }

    /// A scoring engine borrowing this runtime's models.
    pub fn scoring_engine(&self) -> ScoringEngine<'_> {
        ScoringEngine::new(&self.embedder, self.model.as_ref(), &self.config)
    }

    /// Score every corpus entity against every scenario, scenario-major.
    pub fn evaluate(&self, scenarios: &[Scenario]) -> FanmatchResult<Vec<ScoredResult>> {
        let engine = self.scoring_engine();
        BatchEvaluator::new(&engine).evaluate(scenarios, self.corpus.entities())
    }

    /// As [`FanmatchRuntime::evaluate`], keeping every signal.
    pub fn evaluate_breakdowns(
        &self,
        scenarios: &[Scenario],
    ) -> FanmatchResult<Vec<Vec<ScoreBreakdown>>> {
        let engine = self.scoring_engine();
        BatchEvaluator::new(&engine).evaluate_breakdowns(scenarios, self.corpus.entities())
    }

    /// Score one scenario against one named candidate.
    pub fn score(&self, scenario: &Scenario, candidate: &str) -> FanmatchResult<ScoreBreakdown> {
        let entity = self
            .corpus
            .get(candidate)
            .ok_or_else(|| FanmatchError::EntityNotFound {
                name: candidate.to_string(),
            })?;
        self.scoring_engine().score(scenario, entity)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn graph(&self) -> &RelationalGraph {
        &self.graph
    }

    /// `None` when the relational graph has no edges.
    pub fn model(&self) -> Option<&GraphEmbeddingModel> {
        self.model.as_ref()
    }

    pub fn config(&self) -> &FanmatchConfig {
        &self.config
    }

    pub fn embedder(&self) -> &EmbeddingEngine {
        &self.embedder
    }
}
