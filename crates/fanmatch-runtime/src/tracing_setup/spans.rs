//! Span definitions for runtime startup operations.
//!
//! Training and batch spans (`fanmatch.train`, `fanmatch.batch`) are opened
//! inside `fanmatch-graph` and `fanmatch-scoring`.

/// Create a corpus loading span.
#[macro_export]
macro_rules! corpus_span {
    ($source:expr) => {
        tracing::info_span!("fanmatch.corpus", source = %$source)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr) => {
        tracing::info_span!("fanmatch.embedding", provider = %$provider, dimension = $dimension)
    };
}
