//! Embedding vector checks and the cosine used for semantic similarity.

use fanmatch_core::errors::{EmbeddingError, FanmatchResult};

pub use fanmatch_core::vector::{cosine_similarity, l2_normalize};

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> FanmatchResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}
