//! Ranking Exporter Port - serialized output of a ranked table.

use crate::domain::analysis::RankedResult;

use super::DatasetError;

/// Port for serializing a ranked result for download.
///
/// # Contract
///
/// Implementations must:
/// - Emit a header row
/// - Emit the identity column and every criterion column, followed by the
///   score and rank columns
/// - Emit rows in rank order, one per alternative
pub trait RankingExporter: Send + Sync {
    /// Serialize the result.
    fn export(&self, result: &RankedResult) -> Result<String, DatasetError>;

    /// MIME type of the exported content.
    fn content_type(&self) -> &'static str;

    /// Suggested download file name.
    fn file_name(&self) -> &'static str;
}
