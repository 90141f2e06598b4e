//! Hashed term-frequency provider.
//!
//! Generates fixed-dimension vectors by hashing whole terms and their
//! character bigrams into buckets. Bigrams let Korean stems match across
//! attached particles ("아스널처럼" shares "아스" and "스널" with "아스널").
//! No external dependencies; deterministic across runs and platforms.

use std::collections::BTreeMap;

use fanmatch_core::errors::FanmatchResult;
use fanmatch_core::traits::IEmbeddingProvider;

use crate::similarity::l2_normalize;

/// Weight of a character bigram relative to a whole term.
const BIGRAM_WEIGHT: f32 = 0.5;

/// TF-IDF style embedding provider.
pub struct TfIdfProvider {
    dimensions: usize,
}

impl TfIdfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a feature into a bucket index using FNV-1a.
    fn hash_feature(feature: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in feature.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Weighted features of one term: the term itself plus its bigrams.
    fn features(term: &str) -> Vec<(String, f32)> {
        let mut out = vec![(term.to_string(), 1.0)];
        let chars: Vec<char> = term.chars().collect();
        if chars.len() > 2 {
            for pair in chars.windows(2) {
                out.push((format!("#{}{}", pair[0], pair[1]), BIGRAM_WEIGHT));
            }
        }
        out
    }

    fn tfidf_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        // Ordered so colliding buckets sum in the same order every call.
        let mut tf: BTreeMap<String, f32> = BTreeMap::new();
        for tok in &tokens {
            for (feature, weight) in Self::features(tok) {
                *tf.entry(feature).or_default() += weight;
            }
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];
        for (feature, count) in &tf {
            let freq = count / total;
            // IDF approximation: longer features are rarer.
            let idf = 1.0 + (feature.chars().count() as f32).ln();
            vec[Self::hash_feature(feature, self.dimensions)] += freq * idf;
        }

        l2_normalize(&mut vec);
        vec
    }
}

impl IEmbeddingProvider for TfIdfProvider {
    fn embed(&self, text: &str) -> FanmatchResult<Vec<f32>> {
        Ok(self.tfidf_vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> FanmatchResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.tfidf_vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}
