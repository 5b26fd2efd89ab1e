//! MOORA Analyzer - ratio normalization, weighting, and score aggregation.

use serde::Serialize;

use super::{AlignedCriteria, CriteriaConfig, Dataset, InputValidator, Matrix, MooraError};
use crate::domain::foundation::Polarity;

/// Intermediate matrices and final scores of one MOORA run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MooraOutcome {
    pub normalized: Matrix,
    pub weighted: Matrix,
    /// Yi per alternative, in input order. Higher is better.
    pub scores: Vec<f64>,
}

/// MOORA ratio analysis functions.
pub struct MooraAnalyzer;

impl MooraAnalyzer {
    /// Validates the dataset, matches the configuration against its columns,
    /// and runs the full computation.
    ///
    /// Dataset errors take precedence over configuration errors.
    pub fn compute(dataset: &Dataset, config: &CriteriaConfig) -> Result<MooraOutcome, MooraError> {
        InputValidator::validate(dataset)?;
        let aligned = config.align(dataset.criteria())?;
        Self::calculate(dataset, &aligned)
    }

    /// Runs validation, normalization, weighting, and aggregation for
    /// criteria already aligned to the dataset's columns.
    ///
    /// Weight sums and polarity names are the caller's concern and are not
    /// re-checked here. Weights large enough to overflow a score are
    /// reported as [`MooraError::NonFiniteScore`].
    pub fn calculate(
        dataset: &Dataset,
        criteria: &AlignedCriteria,
    ) -> Result<MooraOutcome, MooraError> {
        InputValidator::validate(dataset)?;
        if criteria.len() != dataset.criterion_count()
            || criteria.polarities.len() != criteria.weights.len()
        {
            return Err(MooraError::CriteriaCountMismatch {
                expected: dataset.criterion_count(),
                actual: criteria.polarities.len().min(criteria.weights.len()),
            });
        }

        let normalized = Self::normalize(dataset);
        let weighted = Self::apply_weights(&normalized, &criteria.weights);
        let scores = Self::aggregate(&weighted, &criteria.polarities);
        if let Some(i) = scores.iter().position(|s| !s.is_finite()) {
            return Err(MooraError::NonFiniteScore {
                alternative: dataset.alternatives()[i].label.clone(),
            });
        }

        Ok(MooraOutcome {
            normalized,
            weighted,
            scores,
        })
    }

    /// Vector normalization: every value divided by its column's Euclidean norm.
    ///
    /// # Algorithm
    /// For each column j: x[i][j] / sqrt(sum_i x[i][j]^2)
    ///
    /// The norm is taken relative to the column maximum so large values
    /// cannot overflow when squared. Each normalized column has a sum of
    /// squares of 1.0; a single alternative normalizes to exactly 1.0.
    ///
    /// Expects a validated dataset (all values positive and finite).
    pub fn normalize(dataset: &Dataset) -> Matrix {
        let (rows, cols) = (dataset.alternative_count(), dataset.criterion_count());
        let mut normalized = Matrix::zeros(rows, cols);

        for j in 0..cols {
            let denominator = Self::column_norm(dataset.column(j));
            for i in 0..rows {
                normalized.set(i, j, dataset.value(i, j) / denominator);
            }
        }

        normalized
    }

    /// Euclidean norm of a column of positive values.
    fn column_norm(values: impl Iterator<Item = f64> + Clone) -> f64 {
        let scale = values.clone().fold(0.0_f64, f64::max);
        if scale == 0.0 {
            return 0.0;
        }
        let sum_of_squares: f64 = values.map(|v| (v / scale) * (v / scale)).sum();
        scale * sum_of_squares.sqrt()
    }

    /// Scales each normalized column by its criterion weight.
    ///
    /// A zero weight removes the criterion's influence on every score.
    pub fn apply_weights(normalized: &Matrix, weights: &[f64]) -> Matrix {
        let (rows, cols) = normalized.shape();
        let mut weighted = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for (j, &weight) in weights.iter().enumerate().take(cols) {
                weighted.set(i, j, normalized.get(i, j) * weight);
            }
        }

        weighted
    }

    /// Reduces each weighted row to its optimization score.
    ///
    /// # Algorithm
    /// Yi = sum of benefit columns - sum of cost columns
    ///
    /// # Edge Cases
    /// - No benefit criteria: the benefit term is 0
    /// - No cost criteria: the cost term is 0
    pub fn aggregate(weighted: &Matrix, polarities: &[Polarity]) -> Vec<f64> {
        let (rows, _) = weighted.shape();

        (0..rows)
            .map(|i| {
                let row = weighted.row(i);
                let (mut benefit, mut cost) = (0.0, 0.0);
                for (value, polarity) in row.iter().zip(polarities) {
                    match polarity {
                        Polarity::Benefit => benefit += value,
                        Polarity::Cost => cost += value,
                    }
                }
                benefit - cost
            })
            .collect()
    }
}
