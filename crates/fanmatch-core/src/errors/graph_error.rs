/// Relational graph and graph embedding errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("node not in trained vocabulary: {name}")]
    UnknownNode { name: String },

    #[error("training failed: {reason}")]
    TrainingFailed { reason: String },
}
