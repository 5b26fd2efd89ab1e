//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `csv` - Dataset import and ranked table export
//! - `http` - REST API over the ranking engine

pub mod csv;
pub mod http;

pub use self::csv::{CsvDatasetReader, CsvRankingExporter};
pub use self::http::{build_app, RankingAppState};
