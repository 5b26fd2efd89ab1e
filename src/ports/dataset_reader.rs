//! Dataset Reader Port - tabular input parsing interface.
//!
//! This port defines the contract for turning an uploaded table into a
//! [`Dataset`]. The application depends on this trait, while adapters
//! (like `CsvDatasetReader`) provide the implementation.

use std::path::Path;
use thiserror::Error;

use crate::domain::analysis::{Dataset, MooraError};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for parsing a delimited table into a dataset.
///
/// # Contract
///
/// Implementations must:
/// - Treat the named identity column as the alternative label
/// - Treat every other column, in header order, as a criterion
/// - Reject empty or non-numeric criterion cells (no imputation)
/// - Leave value-range checks (positivity) to the ranking engine
///
/// # Usage
///
/// ```rust,ignore
/// let reader: &dyn DatasetReader = &CsvDatasetReader::new();
/// let dataset = reader.read(csv_text, "Name")?;
/// ```
pub trait DatasetReader: Send + Sync {
    /// Parse table content into a dataset.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the identity column is missing or a
    /// criterion cell is empty or not a number.
    fn read(&self, content: &str, identity_column: &str) -> Result<Dataset, DatasetError>;

    /// Read and parse a file from disk.
    fn read_file(&self, path: &Path, identity_column: &str) -> Result<Dataset, DatasetError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DatasetError::io(format!("{}: {}", path.display(), e)))?;
        self.read(&content, identity_column)
    }
}

/// Errors from reading or writing tabular data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// The identity column is absent from the header.
    #[error("Dataset has no '{column}' column")]
    MissingIdentityColumn { column: String },

    /// A header name appears twice.
    #[error("Column '{column}' appears more than once")]
    DuplicateColumn { column: String },

    /// A criterion cell is blank.
    #[error("Row {row}, column '{column}' is empty")]
    MissingValue { row: usize, column: String },

    /// A criterion cell does not parse as a number.
    #[error("Row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    /// The table structure is unusable.
    #[error("Malformed dataset: {0}")]
    Malformed(String),

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl DatasetError {
    /// Creates a malformed dataset error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }
}

impl From<MooraError> for DatasetError {
    fn from(err: MooraError) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<DatasetError> for DomainError {
    fn from(err: DatasetError) -> Self {
        let code = match &err {
            DatasetError::Io(_) => ErrorCode::InternalError,
            _ => ErrorCode::MalformedDataset,
        };
        let domain = DomainError::new(code, err.to_string());
        match &err {
            DatasetError::MissingValue { column, .. }
            | DatasetError::InvalidNumber { column, .. }
            | DatasetError::MissingIdentityColumn { column }
            | DatasetError::DuplicateColumn { column } => domain.with_detail("column", column.as_str()),
            _ => domain,
        }
    }
}
