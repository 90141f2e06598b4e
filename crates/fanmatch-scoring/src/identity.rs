use fanmatch_core::config::ScoringConfig;
use fanmatch_core::constants::MAX_CATEGORY_SCORE;

/// Identity weight curve: `base + (score / 10)^exponent * span`.
///
/// With the defaults the weight runs from 0.7 at score 0 to 1.3 at score 10.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityWeight {
    pub base: f64,
    pub span: f64,
    pub exponent: f64,
}

impl IdentityWeight {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            base: config.identity_base,
            span: config.identity_span,
            exponent: config.identity_exponent,
        }
    }

    pub fn weight(&self, score: f64) -> f64 {
        let v = (score / MAX_CATEGORY_SCORE).clamp(0.0, 1.0);
        self.base + v.powf(self.exponent) * self.span
    }
}

impl Default for IdentityWeight {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}
