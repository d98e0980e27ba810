//! Run configuration: the spacing of `n` values and output locations.

use std::path::PathBuf;

use sieve_core::SieveKind;

use crate::runner::HarnessConfig;

/// Smallest upper bound in a generated sweep.
pub const MIN_N: usize = 10_000;
pub const DEFAULT_MAX_N: usize = 1_000_000;
pub const DEFAULT_STEPS: usize = 10;
pub const DEFAULT_REPETITIONS: u32 = 5;
pub const DEFAULT_CSV_PATH: &str = "sieve_results.csv";
pub const DEFAULT_PLOTS_DIR: &str = "plots";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("steps must be at least 1")]
    ZeroSteps,
    #[error("repetitions must be at least 1")]
    ZeroRepetitions,
}

/// `steps` evenly spaced upper bounds from [`MIN_N`] to `max_n` inclusive.
pub fn n_values(max_n: usize, steps: usize) -> Result<Vec<usize>, ConfigError> {
    linspace(MIN_N, max_n, steps)
}

/// `steps` evenly spaced integers from `start` to `stop` inclusive.
///
/// Interior points are floored. The last point is exactly `stop` when
/// `steps >= 2`; a single step yields `[start]`. A `stop` below `start` gives
/// a descending sequence.
pub fn linspace(start: usize, stop: usize, steps: usize) -> Result<Vec<usize>, ConfigError> {
    match steps {
        0 => Err(ConfigError::ZeroSteps),
        1 => Ok(vec![start]),
        _ => {
            let step = (stop as f64 - start as f64) / (steps - 1) as f64;
            Ok((0..steps)
                .map(|i| {
                    if i == steps - 1 {
                        stop
                    } else {
                        (start as f64 + step * i as f64).floor() as usize
                    }
                })
                .collect())
        }
    }
}

/// Everything one analysis run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub max_n: usize,
    pub steps: usize,
    pub repetitions: u32,
    /// Registry names to measure, in inner-loop order.
    pub algorithms: Vec<String>,
    pub csv_path: PathBuf,
    pub json_path: Option<PathBuf>,
    /// `None` disables chart rendering.
    pub plots_dir: Option<PathBuf>,
    /// Cross-check every kernel at every `n` before measuring.
    pub verify: bool,
    pub show_progress: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_MAX_N,
            steps: DEFAULT_STEPS,
            repetitions: DEFAULT_REPETITIONS,
            algorithms: SieveKind::ALL
                .into_iter()
                .map(|kind| kind.display_name().to_string())
                .collect(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            json_path: None,
            plots_dir: Some(PathBuf::from(DEFAULT_PLOTS_DIR)),
            verify: false,
            show_progress: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_max_n(mut self, max_n: usize) -> Self {
        self.max_n = max_n;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Replace the algorithm list.
    ///
    /// Short names such as `atkin` are expanded to their registry names; any
    /// other string is kept as given so the harness can report it.
    pub fn with_algorithms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.algorithms = names
            .into_iter()
            .map(|name| match name.as_ref().parse::<SieveKind>() {
                Ok(kind) => kind.display_name().to_string(),
                Err(_) => name.as_ref().to_string(),
            })
            .collect();
        self
    }

    pub fn n_values(&self) -> Result<Vec<usize>, ConfigError> {
        n_values(self.max_n, self.steps)
    }

    pub fn harness_config(&self) -> Result<HarnessConfig, ConfigError> {
        if self.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        Ok(HarnessConfig {
            repetitions: self.repetitions,
            show_progress: self.show_progress,
        })
    }
}
