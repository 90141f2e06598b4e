//! Provider registry.
//!
//! The configured provider is created once; a provider that cannot be
//! created is fatal because scoring cannot proceed without it.

pub mod ollama_provider;
pub mod onnx_provider;
pub mod tfidf_provider;

pub use ollama_provider::OllamaProvider;
pub use onnx_provider::OnnxProvider;
pub use tfidf_provider::TfIdfProvider;

use fanmatch_core::config::EmbeddingConfig;
use fanmatch_core::errors::{EmbeddingError, FanmatchResult};
use fanmatch_core::traits::IEmbeddingProvider;
use tracing::info;

/// Create the configured provider.
pub fn create_provider(config: &EmbeddingConfig) -> FanmatchResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "onnx" => {
            let path = config
                .model_path
                .as_deref()
                .ok_or_else(|| EmbeddingError::ModelLoadFailed {
                    path: "<unset>".to_string(),
                    reason: "onnx provider configured without embedding.model_path".to_string(),
                })?;
            let provider = OnnxProvider::load(path, config.dimensions)?;
            info!(provider = "onnx", model = provider.name(), "embedding provider loaded");
            Ok(Box::new(provider))
        }
        "ollama" => {
            let provider = OllamaProvider::connect(
                config.model.clone(),
                config.dimensions,
                config.base_url.clone(),
            )?;
            info!(provider = "ollama", model = %config.model, "embedding provider connected");
            Ok(Box::new(provider))
        }
        "tfidf" => {
            info!(provider = "tfidf", "using hashed TF-IDF embedding provider");
            Ok(Box::new(TfIdfProvider::new(config.dimensions)))
        }
        other => Err(EmbeddingError::UnknownProvider {
            provider: other.to_string(),
        }
        .into()),
    }
}
