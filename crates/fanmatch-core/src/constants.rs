/// Anchor value meaning "the user has no favourite team".
pub const NONE_ANCHOR: &str = "none";

/// Score assumed for a category an entity does not rate.
pub const DEFAULT_CATEGORY_SCORE: f64 = 5.0;

/// Inclusive bounds of a category score.
pub const MIN_CATEGORY_SCORE: f64 = 0.0;
pub const MAX_CATEGORY_SCORE: f64 = 10.0;

/// Tolerance for the semantic + relational weight sum-to-one contract.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
