//! HTTP adapter for ranking endpoints.
//!
//! Exposes the ranking engine via REST API:
//! - `POST /api/rankings` - Rank a JSON dataset, returning scores and matrices
//! - `POST /api/rankings/csv` - Rank CSV text, returning the ranked table as CSV
//! - `GET /api/rankings/presets` - Describe the weight presets for a column set

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{RankingApiError, RankingAppState};
pub use routes::{ranking_router, ranking_routes};
