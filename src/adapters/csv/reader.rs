//! CSV implementation of the `DatasetReader` port.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::analysis::Dataset;
use crate::ports::{DatasetError, DatasetReader};

/// Reads a headed CSV table into a [`Dataset`].
///
/// Cells are trimmed. Every column except the identity column becomes a
/// criterion, in header order.
#[derive(Debug, Clone)]
pub struct CsvDatasetReader {
    delimiter: u8,
}

impl CsvDatasetReader {
    /// Creates a comma-separated reader.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Uses a different field delimiter (e.g. `b';'`).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn parse_cell(row: usize, column: &str, cell: &str) -> Result<f64, DatasetError> {
        if cell.is_empty() {
            return Err(DatasetError::MissingValue {
                row,
                column: column.to_string(),
            });
        }
        cell.parse::<f64>().map_err(|_| DatasetError::InvalidNumber {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })
    }
}

impl Default for CsvDatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader for CsvDatasetReader {
    fn read(&self, content: &str, identity_column: &str) -> Result<Dataset, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DatasetError::malformed(e.to_string()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(DatasetError::DuplicateColumn {
                    column: header.clone(),
                });
            }
        }

        let identity_index = headers
            .iter()
            .position(|h| h == identity_column)
            .ok_or_else(|| DatasetError::MissingIdentityColumn {
                column: identity_column.to_string(),
            })?;

        let criteria: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != identity_index)
            .map(|(_, h)| h.clone())
            .collect();

        let mut builder = Dataset::builder()
            .identity_column(identity_column)
            .criteria(criteria.clone());

        for (i, record) in reader.records().enumerate() {
            let row = i + 1;
            let record = record.map_err(|e| DatasetError::malformed(e.to_string()))?;

            let label = record.get(identity_index).unwrap_or_default().to_string();
            let mut values = Vec::with_capacity(criteria.len());
            let mut criterion = criteria.iter();
            for (j, cell) in record.iter().enumerate() {
                if j == identity_index {
                    continue;
                }
                let column = criterion.next().map(String::as_str).unwrap_or_default();
                values.push(Self::parse_cell(row, column, cell)?);
            }

            builder = builder.alternative(label, values);
        }

        let dataset = builder.build()?;
        debug!(
            alternatives = dataset.alternative_count(),
            criteria = dataset.criterion_count(),
            "Parsed CSV dataset"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const KOST_CSV: &str = "\
Name,Price,Distance,Size,Wifi,Security_Score
Kost_A,1800000,1.2,12,50,8
Kost_B,1500000,0.5,9,20,7
Kost_C,2100000,2.0,16,100,9
";

    #[test]
    fn reads_identity_and_criteria_in_header_order() {
        let dataset = CsvDatasetReader::new().read(KOST_CSV, "Name").unwrap();

        assert_eq!(dataset.identity_column(), "Name");
        assert_eq!(
            dataset.criteria(),
            &["Price", "Distance", "Size", "Wifi", "Security_Score"]
        );
        assert_eq!(dataset.alternative_count(), 3);
        assert_eq!(dataset.alternatives()[1].label, "Kost_B");
        assert_eq!(dataset.value(1, 1), 0.5);
    }

    #[test]
    fn identity_column_may_sit_anywhere() {
        let csv = "Price,Kost,Size\n900,B,10\n1800,A,12\n";
        let dataset = CsvDatasetReader::new().read(csv, "Kost").unwrap();

        assert_eq!(dataset.criteria(), &["Price", "Size"]);
        assert_eq!(dataset.alternatives()[0].label, "B");
        assert_eq!(dataset.alternatives()[0].values, vec![900.0, 10.0]);
    }

    #[test]
    fn trims_cells() {
        let csv = "Name , Price\n Kost_A , 1800 \n";
        let dataset = CsvDatasetReader::new().read(csv, "Name").unwrap();
        assert_eq!(dataset.criteria(), &["Price"]);
        assert_eq!(dataset.value(0, 0), 1800.0);
    }

    #[test]
    fn semicolon_delimiter() {
        let csv = "Name;Price\nKost_A;1800\n";
        let dataset = CsvDatasetReader::new()
            .with_delimiter(b';')
            .read(csv, "Name")
            .unwrap();
        assert_eq!(dataset.value(0, 0), 1800.0);
    }

    #[test]
    fn missing_identity_column_is_rejected() {
        let err = CsvDatasetReader::new()
            .read("Kost,Price\nA,1\n", "Name")
            .unwrap_err();
        assert_eq!(
            err,
            DatasetError::MissingIdentityColumn {
                column: "Name".to_string()
            }
        );
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let err = CsvDatasetReader::new()
            .read("Name,Price,Price\nA,1,2\n", "Name")
            .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateColumn { column } if column == "Price"));
    }

    #[test]
    fn non_numeric_cell_names_row_and_column() {
        let err = CsvDatasetReader::new()
            .read("Name,Price,Wifi\nA,1,2\nB,3,fast\n", "Name")
            .unwrap_err();
        assert_eq!(
            err,
            DatasetError::InvalidNumber {
                row: 2,
                column: "Wifi".to_string(),
                value: "fast".to_string(),
            }
        );
    }

    #[test]
    fn empty_cell_is_not_imputed() {
        let err = CsvDatasetReader::new()
            .read("Name,Price\nA,\n", "Name")
            .unwrap_err();
        assert!(matches!(err, DatasetError::MissingValue { row: 1, .. }));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let err = CsvDatasetReader::new()
            .read("Name,Price,Size\nA,1\n", "Name")
            .unwrap_err();
        assert!(matches!(err, DatasetError::Malformed(_)));
    }

    #[test]
    fn header_only_gives_empty_dataset() {
        let dataset = CsvDatasetReader::new().read("Name,Price\n", "Name").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.criterion_count(), 1);
    }

    #[test]
    fn values_are_not_range_checked() {
        let dataset = CsvDatasetReader::new()
            .read("Name,Price\nA,-5\n", "Name")
            .unwrap();
        assert_eq!(dataset.value(0, 0), -5.0);
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(KOST_CSV.as_bytes()).unwrap();

        let dataset = CsvDatasetReader::new()
            .read_file(file.path(), "Name")
            .unwrap();
        assert_eq!(dataset.alternative_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvDatasetReader::new()
            .read_file(&dir.path().join("nope.csv"), "Name")
            .unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
