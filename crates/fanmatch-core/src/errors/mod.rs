mod corpus_error;
mod embedding_error;
mod graph_error;

pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;
pub use graph_error::GraphError;

/// Umbrella error for every fanmatch subsystem.
#[derive(Debug, thiserror::Error)]
pub enum FanmatchError {
    #[error("entity not found: {name}")]
    EntityNotFound { name: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    CorpusError(#[from] CorpusError),

    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error(transparent)]
    GraphError(#[from] GraphError),
}

/// Result alias used across the workspace.
pub type FanmatchResult<T> = Result<T, FanmatchError>;
