//! Per-algorithm aggregates for end-of-run reporting.

use std::fmt;

use serde::Serialize;

use crate::results::{Metric, ResultTable};

/// Aggregated view of one algorithm's rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub algorithm: String,
    /// Rows recorded for this algorithm.
    pub rows: usize,
    /// Rows with at least one absent measurement.
    pub incomplete_rows: usize,
    /// Mean of the present `Time (ms)` values.
    pub mean_time_ms: Option<f64>,
    /// Largest present `Peak RAM (MB)` value.
    pub max_peak_ram_mb: Option<f64>,
    /// `n` of the largest bound measured.
    pub max_n: Option<usize>,
}

/// Summaries in first-seen algorithm order.
pub fn summarize(table: &ResultTable) -> Vec<AlgorithmSummary> {
    table
        .algorithms()
        .into_iter()
        .map(|algorithm| {
            let rows: Vec<_> = table.iter().filter(|row| row.algorithm == algorithm).collect();
            let times: Vec<f64> = rows.iter().filter_map(|row| row.value(Metric::TimeMs)).collect();
            let mean_time_ms =
                (!times.is_empty()).then(|| times.iter().sum::<f64>() / times.len() as f64);
            let max_peak_ram_mb = rows
                .iter()
                .filter_map(|row| row.value(Metric::PeakRamMb))
                .reduce(f64::max);

            AlgorithmSummary {
                algorithm: algorithm.to_string(),
                rows: rows.len(),
                incomplete_rows: rows.iter().filter(|row| !row.is_complete()).count(),
                mean_time_ms,
                max_peak_ram_mb,
                max_n: rows.iter().map(|row| row.n).max(),
            }
        })
        .collect()
}

impl fmt::Display for AlgorithmSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = self
            .mean_time_ms
            .map_or_else(|| "n/a".to_string(), |ms| format!("{ms:.3} ms"));
        let ram = self
            .max_peak_ram_mb
            .map_or_else(|| "n/a".to_string(), |mb| format!("{mb:.2} MB"));
        write!(
            f,
            "{:24} | rows: {:3} | incomplete: {:3} | mean time: {:>12} | max peak RAM: {:>10}",
            self.algorithm, self.rows, self.incomplete_rows, time, ram
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::MeasurementRow;

    fn row(algorithm: &str, n: usize, time_ms: Option<f64>, peak_ram_mb: Option<f64>) -> MeasurementRow {
        MeasurementRow {
            algorithm: algorithm.to_string(),
            n,
            time_ms,
            peak_ram_mb,
        }
    }

    #[test]
    fn aggregates_present_values_only() {
        let table = ResultTable::from_rows(vec![
            row("a", 10, Some(1.0), Some(0.5)),
            row("b", 10, None, None),
            row("a", 20, Some(3.0), None),
            row("a", 30, None, Some(2.0)),
        ]);

        let summaries = summarize(&table);
        assert_eq!(summaries.len(), 2);

        let a = &summaries[0];
        assert_eq!(a.algorithm, "a");
        assert_eq!(a.rows, 3);
        assert_eq!(a.incomplete_rows, 2);
        assert_eq!(a.mean_time_ms, Some(2.0));
        assert_eq!(a.max_peak_ram_mb, Some(2.0));
        assert_eq!(a.max_n, Some(30));

        let b = &summaries[1];
        assert_eq!(b.mean_time_ms, None);
        assert_eq!(b.max_peak_ram_mb, None);
        assert!(b.to_string().contains("n/a"));
    }

    #[test]
    fn empty_table_has_no_summaries() {
        assert!(summarize(&ResultTable::new()).is_empty());
    }
}
