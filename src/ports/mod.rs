//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DatasetReader` - Parses an uploaded table into a dataset
//! - `RankingExporter` - Serializes a ranked result for download

mod dataset_reader;
mod ranking_exporter;

pub use dataset_reader::{DatasetError, DatasetReader};
pub use ranking_exporter::RankingExporter;
