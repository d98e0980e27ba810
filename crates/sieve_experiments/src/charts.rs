//! PNG line charts of time and peak memory against `n`.
//!
//! One line per algorithm, with a marker at every measured point. Absent
//! values split a line into separate segments rather than being interpolated.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::results::{Metric, ResultTable};

pub const TIME_CHART_FILE: &str = "time_complexity_analysis.png";
pub const SPACE_CHART_FILE: &str = "space_complexity_analysis.png";

const CHART_SIZE: (u32, u32) = (1200, 700);
const X_LABEL: &str = "n (Upper Bound)";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to create plot directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to draw {path}: {message}")]
    Draw { path: PathBuf, message: String },
}

impl ChartError {
    fn draw(path: &Path, error: impl fmt::Display) -> Self {
        ChartError::Draw {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }
}

struct ChartSpec {
    metric: Metric,
    file_name: &'static str,
    title: &'static str,
    y_label: &'static str,
}

const CHARTS: [ChartSpec; 2] = [
    ChartSpec {
        metric: Metric::TimeMs,
        file_name: TIME_CHART_FILE,
        title: "Time Complexity Analysis (Time vs. n)",
        y_label: "Average Time (milliseconds)",
    },
    ChartSpec {
        metric: Metric::PeakRamMb,
        file_name: SPACE_CHART_FILE,
        title: "Space Complexity Analysis (RAM vs. n)",
        y_label: "Peak RAM Usage (Megabytes)",
    },
];

/// Render both charts into `output_dir`, creating it if needed.
///
/// Returns the paths written, time chart first.
pub fn render_charts(
    table: &ResultTable,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, ChartError> {
    let dir = output_dir.as_ref();
    info!(dir = %dir.display(), "generating plots");
    fs::create_dir_all(dir).map_err(|source| ChartError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(CHARTS.len());
    for spec in &CHARTS {
        let path = dir.join(spec.file_name);
        draw_chart(table, spec, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Contiguous runs of present values for one algorithm.
pub(crate) fn series_segments(
    table: &ResultTable,
    algorithm: &str,
    metric: Metric,
) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (n, value) in table.series(algorithm, metric) {
        match value {
            Some(value) => current.push((n as f64, value)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Axis ranges covering every present point, padded so a single point or a
/// flat line still gets a non-empty range.
fn axis_ranges(table: &ResultTable, metric: Metric) -> ((f64, f64), (f64, f64)) {
    let points: Vec<(f64, f64)> = table
        .iter()
        .filter_map(|row| row.value(metric).map(|value| (row.n as f64, value)))
        .collect();

    if points.is_empty() {
        return ((0.0, 1.0), (0.0, 1.0));
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y_max = 0.0f64;
    for &(x, y) in &points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_max = y_max.max(y);
    }
    if x_max <= x_min {
        x_min -= 1.0;
        x_max += 1.0;
    }
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };
    ((x_min, x_max), (0.0, y_max))
}

fn draw_chart(table: &ResultTable, spec: &ChartSpec, path: &Path) -> Result<(), ChartError> {
    let ((x_min, x_max), (y_min, y_max)) = axis_ranges(table, spec.metric);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ChartError::draw(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| ChartError::draw(path, e))?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(spec.y_label)
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| ChartError::draw(path, e))?;

    for (index, algorithm) in table.algorithms().into_iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let mut labelled = false;

        for segment in series_segments(table, algorithm, spec.metric) {
            let line = chart
                .draw_series(LineSeries::new(segment.iter().copied(), color.stroke_width(2)))
                .map_err(|e| ChartError::draw(path, e))?;
            if !labelled {
                line.label(algorithm.to_string()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
                labelled = true;
            }

            chart
                .draw_series(
                    segment
                        .iter()
                        .map(|&point| Circle::new(point, 4, color.filled())),
                )
                .map_err(|e| ChartError::draw(path, e))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ChartError::draw(path, e))?;

    root.present().map_err(|e| ChartError::draw(path, e))?;
    info!(path = %path.display(), "plot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::MeasurementRow;

    fn row(algorithm: &str, n: usize, time_ms: Option<f64>) -> MeasurementRow {
        MeasurementRow {
            algorithm: algorithm.to_string(),
            n,
            time_ms,
            peak_ram_mb: Some(n as f64 / 1000.0),
        }
    }

    #[test]
    fn absent_values_split_segments() {
        let table = ResultTable::from_rows(vec![
            row("a", 1, Some(1.0)),
            row("a", 2, Some(2.0)),
            row("a", 3, None),
            row("a", 4, Some(4.0)),
            row("b", 1, None),
        ]);

        assert_eq!(
            series_segments(&table, "a", Metric::TimeMs),
            vec![vec![(1.0, 1.0), (2.0, 2.0)], vec![(4.0, 4.0)]]
        );
        assert!(series_segments(&table, "b", Metric::TimeMs).is_empty());
        assert_eq!(series_segments(&table, "b", Metric::PeakRamMb), vec![vec![(1.0, 0.001)]]);
    }

    #[test]
    fn axis_ranges_pad_degenerate_inputs() {
        let empty = ResultTable::new();
        assert_eq!(axis_ranges(&empty, Metric::TimeMs), ((0.0, 1.0), (0.0, 1.0)));

        let single = ResultTable::from_rows(vec![row("a", 10, Some(0.0))]);
        assert_eq!(axis_ranges(&single, Metric::TimeMs), ((9.0, 11.0), (0.0, 1.0)));

        let spread = ResultTable::from_rows(vec![row("a", 10, Some(2.0)), row("a", 20, Some(4.0))]);
        let ((x_min, x_max), (y_min, y_max)) = axis_ranges(&spread, Metric::TimeMs);
        assert_eq!((x_min, x_max, y_min), (10.0, 20.0, 0.0));
        assert!((y_max - 4.2).abs() < 1e-9);
    }
}
