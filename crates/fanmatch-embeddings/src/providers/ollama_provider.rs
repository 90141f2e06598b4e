//! HTTP embedding provider speaking the Ollama `/api/embed` protocol.
//!
//! Health-checked on construction; an unreachable server is an error.

use std::time::Duration;

use fanmatch_core::errors::{EmbeddingError, FanmatchResult};
use fanmatch_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const EMBED_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP embedding provider.
pub struct OllamaProvider {
    base_url: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    /// Connect to the server and verify it answers.
    ///
    /// `base_url` defaults to `http://localhost:11434` if `None`.
    pub fn connect(model: String, dimensions: usize, base_url: Option<String>) -> FanmatchResult<Self> {
        let provider = Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
            dimensions,
        };
        provider.health_check()?;
        Ok(provider)
    }

    fn runtime() -> FanmatchResult<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("runtime error: {e}"),
                }
                .into()
            })
    }

    fn unavailable(&self) -> EmbeddingError {
        EmbeddingError::ProviderUnavailable {
            provider: format!("{} at {}", self.model, self.base_url),
        }
    }

    /// Check that the server is reachable.
    pub fn health_check(&self) -> FanmatchResult<()> {
        let url = format!("{}/api/tags", self.base_url);
        let rt = Self::runtime()?;

        let result = rt.block_on(async {
            reqwest::Client::new()
                .get(&url)
                .timeout(HEALTH_TIMEOUT)
                .send()
                .await
        });

        match result {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "embedding server health check passed");
                Ok(())
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "embedding server health check failed");
                Err(self.unavailable().into())
            }
            Err(e) => {
                warn!(error = %e, "embedding server unreachable");
                Err(self.unavailable().into())
            }
        }
    }

    fn request_embeddings(&self, texts: &[String]) -> FanmatchResult<Vec<Vec<f32>>> {
        let url = format!("{}/api/embed", self.base_url);
        let request = EmbedRequest {
            model: &self.model,
            input: texts,
        };
        let rt = Self::runtime()?;
        let dims = self.dimensions;

        let embeddings = rt.block_on(async {
            let response = reqwest::Client::new()
                .post(&url)
                .timeout(EMBED_TIMEOUT)
                .json(&request)
                .send()
                .await
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("embedding HTTP error: {e}"),
                })?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("embedding server returned {status}: {body}"),
                });
            }

            let resp: EmbedResponse =
                response
                    .json()
                    .await
                    .map_err(|e| EmbeddingError::InferenceFailed {
                        reason: format!("embedding JSON parse error: {e}"),
                    })?;

            Ok(resp
                .embeddings
                .into_iter()
                .map(|mut v| {
                    v.resize(dims, 0.0);
                    v
                })
                .collect::<Vec<_>>())
        })?;

        if embeddings.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "embedding server returned {} vectors for {} texts",
                    embeddings.len(),
                    texts.len()
                ),
            }
            .into());
        }
        Ok(embeddings)
    }
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> FanmatchResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty embedding response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> FanmatchResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        true
    }
}
