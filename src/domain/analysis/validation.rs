//! Input Validator - rejects malformed datasets before any numeric work.
//!
//! The weight-sum and polarity checks are separate predicates: callers run
//! them before scoring, and the scorer itself never re-verifies them.

use super::{Dataset, MooraError};
use crate::domain::foundation::Polarity;

/// Tolerance for a fraction-scaled weight set summing to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-4;

/// Tolerance for a percent-scaled weight set summing to 100.
pub const PERCENT_SUM_TOLERANCE: f64 = 0.01;

/// Dataset shape and value checks.
pub struct InputValidator;

impl InputValidator {
    /// Validates a dataset for scoring.
    ///
    /// # Checks (in order)
    /// 1. At least one alternative
    /// 2. At least one criterion column besides the identity column
    /// 3. Every criterion value strictly positive and finite; the first
    ///    offending column in column order is reported
    pub fn validate(dataset: &Dataset) -> Result<(), MooraError> {
        if dataset.is_empty() {
            return Err(MooraError::EmptyDataset);
        }

        if dataset.criterion_count() == 0 {
            return Err(MooraError::NoCriteria {
                identity_column: dataset.identity_column().to_string(),
            });
        }

        for (j, criterion) in dataset.criteria().iter().enumerate() {
            let offending = dataset
                .alternatives()
                .iter()
                .find(|a| !Self::is_positive(a.values[j]));

            if let Some(alternative) = offending {
                return Err(MooraError::NonPositiveValue {
                    criterion: criterion.clone(),
                    alternative: alternative.label.clone(),
                    value: alternative.values[j],
                });
            }
        }

        Ok(())
    }

    // NaN fails the comparison and infinity would zero out the column.
    fn is_positive(value: f64) -> bool {
        value > 0.0 && value.is_finite()
    }
}

/// Returns true if the weights sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
pub fn weights_sum_to_one<I>(weights: I) -> bool
where
    I: IntoIterator<Item = f64>,
{
    weights_sum_to(weights, 1.0, WEIGHT_SUM_TOLERANCE)
}

/// Returns true if percent weights sum to 100 within [`PERCENT_SUM_TOLERANCE`].
pub fn weights_sum_to_hundred<I>(weights: I) -> bool
where
    I: IntoIterator<Item = f64>,
{
    weights_sum_to(weights, 100.0, PERCENT_SUM_TOLERANCE)
}

/// Returns true if the weights sum to `target` within `tolerance`.
pub fn weights_sum_to<I>(weights: I, target: f64, tolerance: f64) -> bool
where
    I: IntoIterator<Item = f64>,
{
    let total: f64 = weights.into_iter().sum();
    (total - target).abs() < tolerance
}

/// Returns true if every raw polarity name is `benefit` or `cost`.
pub fn polarities_are_valid<I, S>(polarities: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    polarities
        .into_iter()
        .all(|p| Polarity::NAMES.contains(&p.as_ref()))
}
