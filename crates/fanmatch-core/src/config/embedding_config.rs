use serde::{Deserialize, Serialize};

use super::defaults;

/// Semantic embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "onnx", "ollama", "tfidf".
    pub provider: String,
    /// Model name sent to HTTP providers.
    pub model: String,
    /// Path to the ONNX model file.
    pub model_path: Option<String>,
    /// Base URL of the HTTP embedding server.
    pub base_url: Option<String>,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// Max texts per provider batch call.
    pub batch_size: usize,
    /// In-memory cache max entries.
    pub l1_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            model_path: None,
            base_url: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
        }
    }
}
