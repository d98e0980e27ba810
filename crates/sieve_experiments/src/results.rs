//! Measurement rows and the append-only result table.

use serde::Serialize;

/// Column headers, in output order.
pub const COLUMNS: [&str; 4] = ["Algorithm", "n", "Time (ms)", "Peak RAM (MB)"];

/// One `(algorithm, n)` observation.
///
/// An absent numeric field means that measurement pass failed for this pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementRow {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    pub n: usize,
    #[serde(rename = "Time (ms)")]
    pub time_ms: Option<f64>,
    #[serde(rename = "Peak RAM (MB)")]
    pub peak_ram_mb: Option<f64>,
}

impl MeasurementRow {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::TimeMs => self.time_ms,
            Metric::PeakRamMb => self.peak_ram_mb,
        }
    }

    /// True when both passes produced a value.
    pub fn is_complete(&self) -> bool {
        self.time_ms.is_some() && self.peak_ram_mb.is_some()
    }
}

/// The two numeric columns of a [`ResultTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TimeMs,
    PeakRamMb,
}

impl Metric {
    pub fn column(self) -> &'static str {
        match self {
            Metric::TimeMs => COLUMNS[2],
            Metric::PeakRamMb => COLUMNS[3],
        }
    }
}

/// Ordered rows produced by one harness run.
///
/// Rows are appended by the harness in `(n, algorithm)` order and never
/// modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<MeasurementRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<MeasurementRow>) -> Self {
        Self { rows }
    }

    pub(crate) fn push(&mut self, row: MeasurementRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeasurementRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct algorithm names in first-seen order.
    pub fn algorithms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !names.contains(&row.algorithm.as_str()) {
                names.push(&row.algorithm);
            }
        }
        names
    }

    /// `(n, value)` points for one algorithm, in table order.
    pub fn series(&self, algorithm: &str, metric: Metric) -> Vec<(usize, Option<f64>)> {
        self.rows
            .iter()
            .filter(|row| row.algorithm == algorithm)
            .map(|row| (row.n, row.value(metric)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a MeasurementRow;
    type IntoIter = std::slice::Iter<'a, MeasurementRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
