/// Corpus loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("record {position} has no team_name")]
    MissingName { position: usize },

    #[error("duplicate team_name: {name}")]
    DuplicateName { name: String },

    #[error("failed to parse {source_name}: {reason}")]
    ParseFailed { source_name: String, reason: String },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },
}
