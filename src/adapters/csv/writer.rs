//! CSV implementation of the `RankingExporter` port.

use crate::domain::analysis::RankedResult;
use crate::ports::{DatasetError, RankingExporter};

/// Header of the appended score column.
pub const SCORE_COLUMN: &str = "Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// Writes a ranked result as CSV: the original columns, then `Score` and
/// `Rank`, rows best first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRankingExporter;

impl CsvRankingExporter {
    pub fn new() -> Self {
        Self
    }
}

impl RankingExporter for CsvRankingExporter {
    fn export(&self, result: &RankedResult) -> Result<String, DatasetError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = Vec::with_capacity(result.criteria.len() + 3);
        header.push(result.identity_column.as_str());
        header.extend(result.criteria.iter().map(String::as_str));
        header.push(SCORE_COLUMN);
        header.push(RANK_COLUMN);
        writer
            .write_record(&header)
            .map_err(|e| DatasetError::io(e.to_string()))?;

        for row in &result.rows {
            let mut record = Vec::with_capacity(header.len());
            record.push(row.label.clone());
            record.extend(row.values.iter().map(f64::to_string));
            record.push(row.score.to_string());
            record.push(row.rank.to_string());
            writer
                .write_record(&record)
                .map_err(|e| DatasetError::io(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DatasetError::io(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| DatasetError::io(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn file_name(&self) -> &'static str {
        "hasil_rekomendasi_kost.csv"
    }
}
