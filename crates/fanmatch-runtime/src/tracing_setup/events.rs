//! Structured log events for runtime lifecycle operations.

use std::path::Path;

/// Log a corpus load.
pub fn corpus_loaded(entities: usize, source: &str) {
    tracing::info!(
        event = "corpus_loaded",
        entities = entities,
        source = %source,
        "corpus loaded"
    );
}

/// Log a directory entry the corpus loader did not read.
pub fn corpus_file_skipped(path: &Path, reason: &str) {
    tracing::warn!(
        event = "corpus_file_skipped",
        path = %path.display(),
        reason = %reason,
        "corpus file skipped"
    );
}

/// Log the embedding provider chosen at startup.
pub fn provider_selected(provider: &str, dimensions: usize) {
    tracing::info!(
        event = "provider_selected",
        provider = %provider,
        dimensions = dimensions,
        "embedding provider selected"
    );
}

/// Log runtime readiness.
pub fn runtime_ready(entities: usize, graph_nodes: usize, model_trained: bool) {
    tracing::info!(
        event = "runtime_ready",
        entities = entities,
        graph_nodes = graph_nodes,
        model_trained = model_trained,
        "runtime ready"
    );
}
