//! EmbeddingEngine: the main entry point for fanmatch-embeddings.
//!
//! Owns the configured provider and the L1 cache. Implements
//! `IEmbeddingProvider`, so the scoring engine can take either the engine
//! or a bare provider.

use std::collections::HashMap;

use fanmatch_core::config::EmbeddingConfig;
use fanmatch_core::errors::{EmbeddingError, FanmatchResult};
use fanmatch_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::L1MemoryCache;
use crate::providers;
use crate::similarity::{cosine_similarity, validate_dimensions};

/// Semantic embedding service.
///
/// Blank text embeds to the zero vector without a provider call, so its
/// cosine similarity against anything is 0.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: L1MemoryCache,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Create the engine from configuration.
    ///
    /// # Errors
    /// Fails when the configured provider cannot be created.
    pub fn new(config: EmbeddingConfig) -> FanmatchResult<Self> {
        let provider = providers::create_provider(&config)?;
        Ok(Self::with_provider(provider, config))
    }

    /// Create the engine around an existing provider.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, config: EmbeddingConfig) -> Self {
        let cache = L1MemoryCache::new(config.l1_cache_size);

        info!(
            provider = provider.name(),
            dims = config.dimensions,
            "EmbeddingEngine initialized"
        );

        Self {
            provider,
            cache,
            config,
        }
    }

    /// Cosine similarity between the embeddings of two texts.
    pub fn similarity(&self, a: &str, b: &str) -> FanmatchResult<f32> {
        let va = self.embed(a)?;
        let vb = self.embed(b)?;
        Ok(cosine_similarity(&va, &vb))
    }

    /// Active provider name.
    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    /// Entries currently cached.
    pub fn cached_entries(&self) -> u64 {
        self.cache.len()
    }

    fn zero_vector(&self) -> Vec<f32> {
        vec![0.0; self.config.dimensions]
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> FanmatchResult<Vec<f32>> {
        if text.trim().is_empty() {
            return Ok(self.zero_vector());
        }

        let key = L1MemoryCache::key_for(text);
        if let Some(vec) = self.cache.get(&key) {
            return Ok(vec);
        }

        let embedding = self.provider.embed(text)?;
        validate_dimensions(&embedding, self.config.dimensions)?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    /// Cache-aware batch: only misses reach the provider, in chunks of
    /// `batch_size`, and each distinct text is sent once.
    fn embed_batch(&self, texts: &[String]) -> FanmatchResult<Vec<Vec<f32>>> {
        let mut out: Vec<Vec<f32>> = Vec::with_capacity(texts.len());
        let mut misses: Vec<String> = Vec::new();
        let mut miss_index: HashMap<String, usize> = HashMap::new();
        let mut pending: Vec<(usize, usize)> = Vec::new();

        for (i, text) in texts.iter().enumerate() {
            if text.trim().is_empty() {
                out.push(self.zero_vector());
                continue;
            }
            let key = L1MemoryCache::key_for(text);
            if let Some(vec) = self.cache.get(&key) {
                out.push(vec);
                continue;
            }
            let next = misses.len();
            let slot = *miss_index.entry(key).or_insert_with(|| {
                misses.push(text.clone());
                next
            });
            pending.push((i, slot));
            out.push(Vec::new());
        }

        debug!(total = texts.len(), misses = misses.len(), "embedding batch");

        let mut fresh: Vec<Vec<f32>> = Vec::with_capacity(misses.len());
        for chunk in misses.chunks(self.config.batch_size.max(1)) {
            fresh.extend(self.provider.embed_batch(chunk)?);
        }
        if fresh.len() != misses.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "provider returned {} vectors for {} texts",
                    fresh.len(),
                    misses.len()
                ),
            }
            .into());
        }

        for (key, &slot) in &miss_index {
            validate_dimensions(&fresh[slot], self.config.dimensions)?;
            self.cache.insert(key.clone(), fresh[slot].clone());
        }
        for (i, slot) in pending {
            out[i] = fresh[slot].clone();
        }
        Ok(out)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}
