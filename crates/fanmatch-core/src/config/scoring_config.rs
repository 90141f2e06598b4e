use serde::{Deserialize, Serialize};

use super::defaults;

/// Signal fusion constants.
///
/// `final = (alpha * S + beta * R) * W * P` where
/// `W = identity_base + (score / 10)^identity_exponent * identity_span`.
/// `alpha + beta` must equal 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the semantic (query ↔ tags) signal.
    pub alpha: f64,
    /// Weight of the relational (anchor ↔ candidate) signal.
    pub beta: f64,
    /// Relational value used when no trained similarity exists.
    pub relational_fallback: f64,
    pub identity_base: f64,
    pub identity_span: f64,
    pub identity_exponent: f64,
    /// Score the candidates of a scenario on the rayon pool.
    pub parallel: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_ALPHA,
            beta: defaults::DEFAULT_BETA,
            relational_fallback: defaults::DEFAULT_RELATIONAL_FALLBACK,
            identity_base: defaults::DEFAULT_IDENTITY_BASE,
            identity_span: defaults::DEFAULT_IDENTITY_SPAN,
            identity_exponent: defaults::DEFAULT_IDENTITY_EXPONENT,
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}
