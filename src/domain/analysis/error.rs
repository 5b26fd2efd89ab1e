//! Errors raised by the ranking engine before any numeric work begins.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Input or configuration rejected by the ranking engine.
///
/// Every variant is detected up front; a failed run never returns a partial
/// matrix or score vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MooraError {
    #[error("Dataset has no alternatives")]
    EmptyDataset,

    #[error("Dataset must have at least one criterion besides the '{identity_column}' column")]
    NoCriteria { identity_column: String },

    #[error(
        "Criterion '{criterion}' has a non-positive or non-finite value ({value} for '{alternative}'); all values must be positive numbers"
    )]
    NonPositiveValue {
        criterion: String,
        alternative: String,
        value: f64,
    },

    #[error("Column '{criterion}' appears more than once in the dataset")]
    DuplicateColumn { criterion: String },

    #[error("Criterion column '{criterion}' has the same name as the identity column")]
    IdentityAsCriterion { criterion: String },

    #[error("Alternative '{alternative}' has {actual} values, expected {expected}")]
    RaggedRow {
        alternative: String,
        expected: usize,
        actual: usize,
    },

    #[error("Criterion '{criterion}' has no polarity and weight configured")]
    MissingCriterion { criterion: String },

    #[error("Configured criterion '{criterion}' is not a dataset column")]
    UnknownCriterion { criterion: String },

    #[error("Criterion '{criterion}' is configured more than once")]
    DuplicateCriterion { criterion: String },

    #[error("Got polarity and weight for {actual} criteria, dataset has {expected}")]
    CriteriaCountMismatch { expected: usize, actual: usize },

    #[error("Score of '{alternative}' is not a finite number; the weights are too large")]
    NonFiniteScore { alternative: String },

    #[error("Got {actual} scores for {expected} alternatives")]
    ScoreCountMismatch { expected: usize, actual: usize },
}

impl MooraError {
    /// Returns the criterion this error is about, if any.
    pub fn criterion(&self) -> Option<&str> {
        match self {
            MooraError::NonPositiveValue { criterion, .. }
            | MooraError::MissingCriterion { criterion }
            | MooraError::UnknownCriterion { criterion }
            | MooraError::DuplicateCriterion { criterion }
            | MooraError::DuplicateColumn { criterion }
            | MooraError::IdentityAsCriterion { criterion } => Some(criterion.as_str()),
            _ => None,
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            MooraError::EmptyDataset => ErrorCode::EmptyDataset,
            MooraError::NoCriteria { .. } => ErrorCode::NoCriteria,
            MooraError::NonPositiveValue { .. } => ErrorCode::NonPositiveValue,
            MooraError::DuplicateColumn { .. }
            | MooraError::IdentityAsCriterion { .. }
            | MooraError::RaggedRow { .. } => ErrorCode::MalformedDataset,
            MooraError::MissingCriterion { .. }
            | MooraError::UnknownCriterion { .. }
            | MooraError::DuplicateCriterion { .. }
            | MooraError::CriteriaCountMismatch { .. } => ErrorCode::CriteriaMismatch,
            MooraError::NonFiniteScore { .. } => ErrorCode::InvalidWeights,
            MooraError::ScoreCountMismatch { .. } => ErrorCode::InternalError,
        }
    }
}

impl From<MooraError> for DomainError {
    fn from(err: MooraError) -> Self {
        let mut domain = DomainError::new(err.code(), err.to_string());
        if let Some(criterion) = err.criterion() {
            domain = domain.with_detail("criterion", criterion);
        }
        match &err {
            MooraError::NonPositiveValue { alternative, .. }
            | MooraError::NonFiniteScore { alternative } => {
                domain = domain.with_detail("alternative", alternative.as_str());
            }
            _ => {}
        }
        domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_message_names_the_column() {
        let err = MooraError::NonPositiveValue {
            criterion: "Distance".to_string(),
            alternative: "Kost_A".to_string(),
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("'Distance'"));
        assert!(msg.contains("non-positive or non-finite"));
    }

    #[test]
    fn nan_cell_is_reported_as_non_finite() {
        let err = MooraError::NonPositiveValue {
            criterion: "Size".to_string(),
            alternative: "Kost_C".to_string(),
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("NaN for 'Kost_C'"));
        assert!(msg.contains("non-finite"));
    }

    #[test]
    fn column_shape_errors_are_malformed_with_criterion() {
        let err: DomainError = MooraError::DuplicateColumn {
            criterion: "Price".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::MalformedDataset);
        assert_eq!(err.details.get("criterion"), Some(&"Price".to_string()));

        let err: DomainError = MooraError::IdentityAsCriterion {
            criterion: "Name".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::MalformedDataset);
    }

    #[test]
    fn no_criteria_message_names_identity_column() {
        let err = MooraError::NoCriteria {
            identity_column: "Name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Dataset must have at least one criterion besides the 'Name' column"
        );
    }

    #[test]
    fn converts_to_domain_error_with_details() {
        let err: DomainError = MooraError::NonPositiveValue {
            criterion: "Price".to_string(),
            alternative: "Kost_B".to_string(),
            value: -900.0,
        }
        .into();

        assert_eq!(err.code, ErrorCode::NonPositiveValue);
        assert_eq!(err.details.get("criterion"), Some(&"Price".to_string()));
        assert_eq!(err.details.get("alternative"), Some(&"Kost_B".to_string()));
    }

    #[test]
    fn configuration_errors_share_mismatch_code() {
        let missing: DomainError = MooraError::MissingCriterion {
            criterion: "Wifi".to_string(),
        }
        .into();
        let unknown: DomainError = MooraError::UnknownCriterion {
            criterion: "Parking".to_string(),
        }
        .into();

        assert_eq!(missing.code, ErrorCode::CriteriaMismatch);
        assert_eq!(unknown.code, ErrorCode::CriteriaMismatch);
    }

    #[test]
    fn empty_dataset_has_no_criterion() {
        assert!(MooraError::EmptyDataset.criterion().is_none());
    }
}
