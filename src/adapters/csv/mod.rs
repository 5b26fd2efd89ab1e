//! CSV adapters - dataset import and ranking export.
//!
//! - `CsvDatasetReader` - Implements `DatasetReader` over comma-separated text
//! - `CsvRankingExporter` - Implements `RankingExporter`, appending `Score` and `Rank`

mod reader;
mod writer;

pub use reader::CsvDatasetReader;
pub use writer::{CsvRankingExporter, RANK_COLUMN, SCORE_COLUMN};
