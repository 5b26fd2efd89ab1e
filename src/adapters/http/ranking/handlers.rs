//! HTTP handlers for ranking endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use http::{header, StatusCode};
use axum::response::IntoResponse;
use tracing::{info, warn};

use crate::application::{ListPresetsHandler, RankAlternativesCommand, RankAlternativesHandler};
use crate::config::RankingConfig;
use crate::domain::analysis::MooraError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{DatasetError, DatasetReader, RankingExporter};

use super::dto::{
    ErrorResponse, PresetsQuery, PresetsResponse, RankCsvRequest, RankRequest, RankResponse,
    DEFAULT_TOP,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct RankingAppState {
    pub config: Arc<RankingConfig>,
    pub reader: Arc<dyn DatasetReader>,
    pub exporter: Arc<dyn RankingExporter>,
}

impl RankingAppState {
    pub fn new(
        config: RankingConfig,
        reader: Arc<dyn DatasetReader>,
        exporter: Arc<dyn RankingExporter>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            reader,
            exporter,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn rank_handler(&self) -> RankAlternativesHandler {
        RankAlternativesHandler::new(self.config.as_ref().clone())
    }

    pub fn presets_handler(&self) -> ListPresetsHandler {
        ListPresetsHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/rankings - Rank a JSON dataset
pub async fn rank(
    State(state): State<RankingAppState>,
    Json(request): Json<RankRequest>,
) -> Result<impl IntoResponse, RankingApiError> {
    let dataset = request
        .dataset
        .into_dataset(&state.config.identity_column)?;
    let cmd = RankAlternativesCommand {
        dataset,
        criteria: request.options.to_source()?,
        tie_break: request.options.tie_break,
    };

    let result = state.rank_handler().handle(cmd)?;
    info!(
        ranking_id = %result.result.ranking_id,
        alternatives = result.summary.alternatives,
        computed_at = %result.result.computed_at.to_rfc3339(),
        "Ranking computed"
    );

    let response = RankResponse::from_result(result, request.top.unwrap_or(DEFAULT_TOP));
    Ok(Json(response))
}

/// POST /api/rankings/csv - Rank CSV text and download the ranked table
pub async fn rank_csv(
    State(state): State<RankingAppState>,
    Json(request): Json<RankCsvRequest>,
) -> Result<impl IntoResponse, RankingApiError> {
    let identity = request
        .identity_column
        .as_deref()
        .unwrap_or(&state.config.identity_column);
    let dataset = state.reader.read(&request.csv, identity)?;

    let cmd = RankAlternativesCommand {
        dataset,
        criteria: request.options.to_source()?,
        tie_break: request.options.tie_break,
    };

    let result = state.rank_handler().handle(cmd)?;
    let body = state.exporter.export(&result.result)?;
    info!(
        ranking_id = %result.result.ranking_id,
        alternatives = result.summary.alternatives,
        "Ranking exported"
    );

    let headers = [
        (header::CONTENT_TYPE, state.exporter.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", state.exporter.file_name()),
        ),
    ];
    Ok((headers, body))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/rankings/presets - Describe the weight presets for a column set
pub async fn list_presets(
    State(state): State<RankingAppState>,
    Query(query): Query<PresetsQuery>,
) -> impl IntoResponse {
    let columns = query.column_list();
    let presets = state.presets_handler().handle(&columns);
    Json(PresetsResponse { columns, presets })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct RankingApiError(DomainError);

impl From<DomainError> for RankingApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<MooraError> for RankingApiError {
    fn from(err: MooraError) -> Self {
        Self(err.into())
    }
}

impl From<DatasetError> for RankingApiError {
    fn from(err: DatasetError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for RankingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::MalformedDataset
            | ErrorCode::InvalidWeights => (StatusCode::BAD_REQUEST, self.0.code.to_string()),
            ErrorCode::EmptyDataset
            | ErrorCode::NoCriteria
            | ErrorCode::NonPositiveValue
            | ErrorCode::CriteriaMismatch => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.0.code.to_string())
            }
            ErrorCode::DatasetTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE".to_string())
            }
            ErrorCode::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.code.to_string())
            }
        };

        if status.is_server_error() {
            warn!(error = %self.0, "Ranking request failed");
        }

        let body = if self.0.details.is_empty() {
            ErrorResponse::new(error_code, self.0.message)
        } else {
            let details = serde_json::to_value(&self.0.details).unwrap_or_default();
            ErrorResponse::with_details(error_code, self.0.message, details)
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::csv::{CsvDatasetReader, CsvRankingExporter};
    use crate::adapters::http::ranking::dto::{DatasetRequest, RankOptions};
    use crate::domain::analysis::Alternative;

    fn test_state() -> RankingAppState {
        RankingAppState::new(
            RankingConfig::default(),
            Arc::new(CsvDatasetReader::new()),
            Arc::new(CsvRankingExporter::new()),
        )
    }

    fn kost_request() -> RankRequest {
        RankRequest {
            dataset: DatasetRequest {
                identity_column: None,
                columns: vec!["Price".to_string(), "Distance".to_string()],
                rows: vec![
                    Alternative::new("Kost_A", vec![1800.0, 2.5]),
                    Alternative::new("Kost_B", vec![900.0, 1.0]),
                ],
            },
            options: RankOptions::default(),
            top: None,
        }
    }

    #[tokio::test]
    async fn rank_returns_ok() {
        let result = rank(State(test_state()), Json(kost_request())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rank_rejects_empty_dataset() {
        let mut request = kost_request();
        request.dataset.rows.clear();

        let response = rank(State(test_state()), Json(request))
            .await
            .err()
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rank_csv_sets_download_headers() {
        let request = RankCsvRequest {
            csv: "Name,Price\nKost_A,1800\nKost_B,900\n".to_string(),
            identity_column: None,
            options: RankOptions::default(),
        };

        let response = rank_csv(State(test_state()), Json(request))
            .await
            .ok()
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap();
        assert!(disposition.contains("hasil_rekomendasi_kost.csv"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn api_error_maps_empty_dataset_to_422() {
        let err = RankingApiError::from(MooraError::EmptyDataset);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn api_error_maps_criteria_mismatch_to_422() {
        let err = RankingApiError::from(MooraError::UnknownCriterion {
            criterion: "Parking".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn api_error_maps_invalid_weights_to_400() {
        let err = RankingApiError(DomainError::new(ErrorCode::InvalidWeights, "sum"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_malformed_csv_to_400() {
        let err = RankingApiError::from(DatasetError::malformed("bad"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_maps_too_large_to_413() {
        let err = RankingApiError(DomainError::new(ErrorCode::DatasetTooLarge, "big"));
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn api_error_maps_internal_to_500() {
        let err = RankingApiError(DomainError::new(ErrorCode::InternalError, "oops"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
