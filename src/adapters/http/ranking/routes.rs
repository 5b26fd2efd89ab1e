//! Axum router configuration for ranking endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_presets, rank, rank_csv, RankingAppState};

/// Create the ranking API router.
///
/// # Routes
/// - `POST /` - Rank a JSON dataset
/// - `POST /csv` - Rank CSV text, respond with a CSV download
/// - `GET /presets` - Describe the weight presets
pub fn ranking_routes() -> Router<RankingAppState> {
    Router::new()
        .route("/", post(rank))
        .route("/csv", post(rank_csv))
        .route("/presets", get(list_presets))
}

/// Create the complete ranking module router, suitable for mounting at `/api`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", ranking_router())
///     .with_state(app_state);
/// ```
pub fn ranking_router() -> Router<RankingAppState> {
    Router::new().nest("/rankings", ranking_routes())
}
