//! HTTP DTOs (Data Transfer Objects) for ranking endpoints.
//!
//! These types define the JSON request/response structure for the ranking API.
//! They serve as the boundary between HTTP and the application layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::{CriteriaSource, PresetView, RankAlternativesResult};
use crate::domain::analysis::{
    Alternative, CriteriaConfig, CriterionSpec, Dataset, DatasetSummary, Matrix, RankedRow,
    TieBreak, WeightPreset, WeightScale,
};
use crate::domain::foundation::{DomainError, Polarity, RankingId, Timestamp};

/// Number of rows returned in `top` when a request names none.
pub const DEFAULT_TOP: usize = 3;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One criterion as sent by clients. Polarity stays a string until checked.
#[derive(Debug, Clone, Deserialize)]
pub struct CriterionRequest {
    pub name: String,
    pub polarity: String,
    pub weight: f64,
}

/// Options shared by the JSON and CSV ranking endpoints.
///
/// When `criteria` is present it must describe every column; otherwise
/// `preset` (default `equal`) supplies the weights and `polarities`
/// optionally overrides the default polarity of individual columns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankOptions {
    #[serde(default)]
    pub criteria: Option<Vec<CriterionRequest>>,
    /// Scale of `criteria` weights. Defaults to the server's configured scale.
    #[serde(default)]
    pub weight_scale: Option<WeightScale>,
    #[serde(default)]
    pub preset: Option<WeightPreset>,
    #[serde(default)]
    pub polarities: BTreeMap<String, String>,
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl RankOptions {
    /// Converts the options into an application criteria source.
    pub fn to_source(&self) -> Result<CriteriaSource, DomainError> {
        match &self.criteria {
            Some(criteria) => {
                let specs = criteria
                    .iter()
                    .map(|c| -> Result<CriterionSpec, DomainError> {
                        let polarity = c.polarity.parse::<Polarity>()?;
                        Ok(CriterionSpec::new(c.name.clone(), polarity, c.weight))
                    })
                    .collect::<Result<Vec<_>, DomainError>>()?;
                Ok(CriteriaSource::Explicit {
                    criteria: CriteriaConfig::from_specs(specs),
                    scale: self.weight_scale,
                })
            }
            None => {
                let polarities = self
                    .polarities
                    .iter()
                    .map(|(name, raw)| -> Result<(String, Polarity), DomainError> {
                        Ok((name.clone(), raw.parse::<Polarity>()?))
                    })
                    .collect::<Result<Vec<_>, DomainError>>()?;
                Ok(CriteriaSource::Preset {
                    preset: self.preset.unwrap_or_default(),
                    polarities,
                })
            }
        }
    }
}

/// A dataset sent as JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRequest {
    /// Name of the label column. Defaults to the server's configured column.
    #[serde(default)]
    pub identity_column: Option<String>,
    /// Criterion column names, in order.
    pub columns: Vec<String>,
    pub rows: Vec<Alternative>,
}

impl DatasetRequest {
    /// Builds the domain dataset, using `default_identity` when none is named.
    pub fn into_dataset(self, default_identity: &str) -> Result<Dataset, DomainError> {
        let identity = self
            .identity_column
            .unwrap_or_else(|| default_identity.to_string());
        Ok(Dataset::new(identity, self.columns, self.rows)?)
    }
}

/// Request to rank a JSON dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    pub dataset: DatasetRequest,
    #[serde(flatten)]
    pub options: RankOptions,
    /// Number of best rows echoed in `top`.
    #[serde(default)]
    pub top: Option<usize>,
}

/// Request to rank CSV text.
#[derive(Debug, Clone, Deserialize)]
pub struct RankCsvRequest {
    /// The dataset as CSV with a header row.
    pub csv: String,
    #[serde(default)]
    pub identity_column: Option<String>,
    #[serde(flatten)]
    pub options: RankOptions,
}

/// Query for the preset listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetsQuery {
    /// Comma-separated column names.
    #[serde(default)]
    pub columns: Option<String>,
}

impl PresetsQuery {
    /// Column names from the query, or the housing columns when absent.
    pub fn column_list(&self) -> Vec<String> {
        match &self.columns {
            Some(columns) => columns
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
            None => ["Price", "Distance", "Size", "Wifi", "Security_Score"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A matrix with its row and column labels.
#[derive(Debug, Clone, Serialize)]
pub struct LabelledMatrix {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl LabelledMatrix {
    fn new(matrix: &Matrix, rows: Vec<String>, columns: Vec<String>) -> Self {
        Self {
            rows,
            columns,
            values: matrix.to_rows(),
        }
    }
}

/// Response for a JSON ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub ranking_id: RankingId,
    pub computed_at: Timestamp,
    pub identity_column: String,
    pub summary: DatasetSummary,
    /// Polarity and fraction weight applied per column.
    pub criteria: Vec<CriterionSpec>,
    /// Every row, best first.
    pub rows: Vec<RankedRow>,
    pub top: Vec<RankedRow>,
    /// Normalized values, rows in input order.
    pub normalized: LabelledMatrix,
    /// Weighted values, rows in input order.
    pub weighted: LabelledMatrix,
}

impl RankResponse {
    /// Builds the response, echoing the best `top` rows.
    pub fn from_result(report: RankAlternativesResult, top: usize) -> Self {
        let result = report.result;
        let mut labels = vec![String::new(); result.len()];
        for row in &result.rows {
            labels[row.position] = row.label.clone();
        }

        Self {
            ranking_id: result.ranking_id,
            computed_at: result.computed_at,
            identity_column: result.identity_column.clone(),
            summary: report.summary,
            criteria: report.criteria,
            top: result.top(top).to_vec(),
            normalized: LabelledMatrix::new(
                &report.outcome.normalized,
                labels.clone(),
                result.criteria.clone(),
            ),
            weighted: LabelledMatrix::new(
                &report.outcome.weighted,
                labels,
                result.criteria.clone(),
            ),
            rows: result.rows,
        }
    }
}

/// Response for the preset listing.
#[derive(Debug, Clone, Serialize)]
pub struct PresetsResponse {
    pub columns: Vec<String>,
    pub presets: Vec<PresetView>,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}
