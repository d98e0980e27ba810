//! Result persistence.
//!
//! This module writes a [`ResultTable`] to CSV or JSON. Absent measurements
//! become empty CSV cells and JSON `null`s.

use std::path::Path;

use crate::results::ResultTable;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export a result table to CSV format.
///
/// Writes the header `Algorithm,n,Time (ms),Peak RAM (MB)` followed by one
/// record per row in table order.
///
/// # Errors
///
/// Returns an error if the table is empty, or if file creation or CSV
/// writing fails.
pub fn export_to_csv(
    table: &ResultTable,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(table.rows())?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(table, file)
}

/// Export a result table to JSON format.
///
/// Creates a JSON file with an array of row objects keyed by column name.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    table: &ResultTable,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(table, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::MeasurementRow;
    use tempfile::NamedTempFile;

    fn table() -> ResultTable {
        ResultTable::from_rows(vec![
            MeasurementRow {
                algorithm: "Sieve of Eratosthenes".to_string(),
                n: 10_000,
                time_ms: Some(0.25),
                peak_ram_mb: Some(0.0),
            },
            MeasurementRow {
                algorithm: "Sieve of Atkin".to_string(),
                n: 10_000,
                time_ms: None,
                peak_ram_mb: Some(1.5),
            },
        ])
    }

    #[test]
    fn test_export_to_csv() {
        let file = NamedTempFile::new().unwrap();
        export_to_csv(&table(), file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Algorithm,n,Time (ms),Peak RAM (MB)",
                "Sieve of Eratosthenes,10000,0.25,0",
                "Sieve of Atkin,10000,,1.5",
            ]
        );
    }

    #[test]
    fn test_export_to_csv_rejects_empty_table() {
        let file = NamedTempFile::new().unwrap();
        let err = export_to_csv(&ResultTable::new(), file.path()).unwrap_err();
        assert_eq!(err.to_string(), "No results to export");
    }

    #[test]
    fn test_export_to_json() {
        let file = NamedTempFile::new().unwrap();
        export_to_json(&table(), file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert!(value[1]["Time (ms)"].is_null());
        assert_eq!(value[1]["Peak RAM (MB)"], 1.5);
    }
}
