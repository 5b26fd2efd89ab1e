//! Dataset - The decision matrix as supplied by the caller.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::MooraError;

/// Identity column name used when the caller does not pick one.
pub const DEFAULT_IDENTITY_COLUMN: &str = "Name";

/// One row of the dataset: a labelled alternative and its criterion values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Display label; treated as opaque and not required to be unique.
    pub label: String,
    /// One value per criterion, in the dataset's criterion order.
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Counts shown to the user after a dataset is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub alternatives: usize,
    pub criteria: usize,
    pub data_points: usize,
}

/// Alternatives x criteria table with one identity column.
///
/// The criteria are exactly the non-identity columns, in column order.
/// Rows are guaranteed to have one value per criterion, so the type is
/// only constructed through [`Dataset::new`] and never deserialized directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    identity_column: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl Dataset {
    /// Creates a dataset.
    ///
    /// Criterion names must be unique and differ from the identity column,
    /// and every row must have one value per criterion.
    pub fn new(
        identity_column: impl Into<String>,
        criteria: Vec<String>,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, MooraError> {
        let identity_column = identity_column.into();
        let mut seen = HashSet::with_capacity(criteria.len());
        for name in &criteria {
            if *name == identity_column {
                return Err(MooraError::IdentityAsCriterion {
                    criterion: name.clone(),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(MooraError::DuplicateColumn {
                    criterion: name.clone(),
                });
            }
        }

        let expected = criteria.len();
        if let Some(row) = alternatives.iter().find(|a| a.values.len() != expected) {
            return Err(MooraError::RaggedRow {
                alternative: row.label.clone(),
                expected,
                actual: row.values.len(),
            });
        }

        Ok(Self {
            identity_column,
            criteria,
            alternatives,
        })
    }

    /// Creates a builder for constructing a dataset.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Name of the identity column.
    pub fn identity_column(&self) -> &str {
        &self.identity_column
    }

    /// Criterion names in column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Rows in input order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Returns the value of alternative `i` on criterion `j`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.alternatives[i].values[j]
    }

    /// Iterates the values of criterion `j` down all alternatives.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.alternatives.iter().map(move |a| a.values[j])
    }

    /// Position of a criterion by name.
    pub fn criterion_index(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c == name)
    }

    /// Returns true if the dataset has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Alternative, criterion, and data point counts.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            alternatives: self.alternative_count(),
            criteria: self.criterion_count(),
            data_points: self.alternative_count() * self.criterion_count(),
        }
    }

    /// Returns a copy with every value of one criterion replaced.
    ///
    /// Used for what-if comparisons; the original dataset is untouched.
    pub fn with_column(&self, criterion: &str, values: &[f64]) -> Result<Self, MooraError> {
        let j = self
            .criterion_index(criterion)
            .ok_or_else(|| MooraError::UnknownCriterion {
                criterion: criterion.to_string(),
            })?;
        if values.len() != self.alternative_count() {
            return Err(MooraError::RaggedRow {
                alternative: criterion.to_string(),
                expected: self.alternative_count(),
                actual: values.len(),
            });
        }

        let mut copy = self.clone();
        for (row, &value) in copy.alternatives.iter_mut().zip(values) {
            row.values[j] = value;
        }
        Ok(copy)
    }
}

/// Builder for constructing Dataset instances.
#[derive(Debug)]
pub struct DatasetBuilder {
    identity_column: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self {
            identity_column: DEFAULT_IDENTITY_COLUMN.to_string(),
            criteria: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

impl DatasetBuilder {
    /// Creates a new builder using the default identity column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity column name.
    pub fn identity_column(mut self, name: impl Into<String>) -> Self {
        self.identity_column = name.into();
        self
    }

    /// Sets the criterion columns.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds a row.
    pub fn alternative(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(Alternative::new(label, values));
        self
    }

    /// Builds the dataset.
    pub fn build(self) -> Result<Dataset, MooraError> {
        Dataset::new(self.identity_column, self.criteria, self.alternatives)
    }
}
