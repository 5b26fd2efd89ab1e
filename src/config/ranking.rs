//! Ranking service configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{WeightScale, DEFAULT_IDENTITY_COLUMN, WEIGHT_SUM_TOLERANCE};

/// Limits and defaults applied to ranking requests.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Column holding the alternative labels when a request names none
    #[serde(default = "default_identity_column")]
    pub identity_column: String,

    /// Largest accepted number of alternatives (rows)
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Largest accepted number of criteria (columns)
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,

    /// Allowed deviation of a fraction weight set from 1.0
    #[serde(default = "default_weight_tolerance")]
    pub weight_tolerance: f64,

    /// Scale assumed for request weights when a request names none
    #[serde(default)]
    pub weight_scale: WeightScale,

    /// Reject weight sets that do not add up to the scale's total
    #[serde(default = "default_require_normalized_weights")]
    pub require_normalized_weights: bool,
}

impl RankingConfig {
    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.identity_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ranking.identity_column"));
        }
        if self.max_alternatives == 0 {
            return Err(ValidationError::InvalidLimit("max_alternatives"));
        }
        if self.max_criteria == 0 {
            return Err(ValidationError::InvalidLimit("max_criteria"));
        }
        if !(self.weight_tolerance > 0.0 && self.weight_tolerance < 1.0) {
            return Err(ValidationError::InvalidWeightTolerance);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            identity_column: default_identity_column(),
            max_alternatives: default_max_alternatives(),
            max_criteria: default_max_criteria(),
            weight_tolerance: default_weight_tolerance(),
            weight_scale: WeightScale::default(),
            require_normalized_weights: default_require_normalized_weights(),
        }
    }
}

fn default_identity_column() -> String {
    DEFAULT_IDENTITY_COLUMN.to_string()
}

fn default_max_alternatives() -> usize {
    10_000
}

fn default_max_criteria() -> usize {
    64
}

fn default_weight_tolerance() -> f64 {
    WEIGHT_SUM_TOLERANCE
}

fn default_require_normalized_weights() -> bool {
    true
}
