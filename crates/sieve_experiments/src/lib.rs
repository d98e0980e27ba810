//! Empirical comparison of prime sieve algorithms.
//!
//! This crate times each sieve kernel over a range of upper bounds, measures
//! its peak heap allocation, and collects the observations into a
//! [`ResultTable`] that can be exported to CSV/JSON and rendered as charts.
//!
//! # Quick Start
//!
//! ```no_run
//! use sieve_experiments::{config, run_analysis, export_to_csv, render_charts};
//!
//! let n_values = config::n_values(1_000_000, 10).unwrap();
//! let table = run_analysis(&["Sieve of Eratosthenes", "Sieve of Atkin"], &n_values);
//!
//! export_to_csv(&table, "sieve_results.csv").unwrap();
//! render_charts(&table, "plots").unwrap();
//! ```
//!
//! # Architecture
//!
//! - [`runner`]: the measurement harness, fault-isolated per `(n, algorithm)` pair
//! - [`measurement`]: timing and memory passes, memory probes
//! - [`results`]: measurement rows and the result table
//! - [`config`]: `n`-value spacing and run configuration
//! - [`export`]: CSV and JSON persistence
//! - [`charts`]: PNG line charts
//! - [`summary`]: per-algorithm aggregates for reporting

pub mod charts;
pub mod config;
pub mod export;
pub mod measurement;
pub mod results;
pub mod runner;
pub mod summary;

pub use charts::{render_charts, ChartError};
pub use config::{AnalysisConfig, ConfigError};
pub use export::{export_to_csv, export_to_json};
pub use measurement::{
    AllocationProbe, MeasurementError, MemoryProbe, ResidentMemoryProbe, TrackingAllocator,
};

#[cfg(feature = "tracking-allocator")]
#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator::new();
pub use results::{MeasurementRow, Metric, ResultTable};
pub use runner::{run_analysis, Analyzer, HarnessConfig};
pub use summary::{summarize, AlgorithmSummary};
