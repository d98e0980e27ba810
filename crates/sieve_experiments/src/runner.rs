//! The measurement harness.
//!
//! For each `n` (outer loop) and each algorithm name (inner loop) the harness
//! resolves the kernel, runs a timing pass and a memory pass, and appends one
//! row. Failures are isolated to the pair that produced them.

use indicatif::{ProgressBar, ProgressStyle};
use sieve_core::AlgorithmRegistry;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_REPETITIONS;
use crate::measurement::{default_probe, measure_average_time, measure_peak_memory, MemoryProbe};
use crate::results::{MeasurementRow, ResultTable};

/// Harness settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Kernel calls per timing pass; the reported time is their mean.
    pub repetitions: u32,
    /// Draw a progress bar over all `(n, algorithm)` pairs.
    pub show_progress: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            show_progress: false,
        }
    }
}

/// Runs kernels from a registry and collects a [`ResultTable`].
pub struct Analyzer {
    registry: AlgorithmRegistry,
    config: HarnessConfig,
    probe: Box<dyn MemoryProbe>,
}

impl Analyzer {
    /// Harness over `registry` with default settings and [`default_probe`].
    pub fn new(registry: AlgorithmRegistry) -> Self {
        Self {
            registry,
            config: HarnessConfig::default(),
            probe: default_probe(),
        }
    }

    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_probe(mut self, probe: Box<dyn MemoryProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    pub fn config(&self) -> HarnessConfig {
        self.config
    }

    /// Measure every `(n, name)` pair.
    ///
    /// Names missing from the registry are skipped with a warning and produce
    /// no row. A failed timing or memory pass leaves the corresponding field
    /// absent; the row is still recorded.
    pub fn run_analysis<S: AsRef<str>>(
        &mut self,
        algorithm_names: &[S],
        n_values: &[usize],
    ) -> ResultTable {
        let Self {
            registry,
            config,
            probe,
        } = self;

        let progress = progress_bar(config.show_progress, n_values.len() * algorithm_names.len());
        let mut table = ResultTable::new();

        for &n in n_values {
            above_bar(progress.as_ref(), || info!(n, "analyzing"));
            for name in algorithm_names {
                let name = name.as_ref();
                if let Some(bar) = &progress {
                    bar.inc(1);
                }

                let Some(kernel) = registry.get(name) else {
                    above_bar(progress.as_ref(), || {
                        warn!(algorithm = name, "algorithm not found in registry, skipping")
                    });
                    continue;
                };

                let time_ms = match measure_average_time(kernel, n, config.repetitions) {
                    Ok(ms) => Some(ms),
                    Err(error) => {
                        above_bar(progress.as_ref(), || {
                            warn!(algorithm = name, n, %error, "timing pass failed")
                        });
                        None
                    }
                };

                let peak_ram_mb = match measure_peak_memory(kernel, n, &mut **probe) {
                    Ok(mb) => Some(mb),
                    Err(error) => {
                        above_bar(progress.as_ref(), || {
                            warn!(algorithm = name, n, %error, "memory pass failed")
                        });
                        None
                    }
                };

                debug!(algorithm = name, n, ?time_ms, ?peak_ram_mb, "measured");
                table.push(MeasurementRow {
                    algorithm: name.to_string(),
                    n,
                    time_ms,
                    peak_ram_mb,
                });
            }
        }

        if let Some(bar) = progress {
            bar.finish_with_message("Completed");
        }

        table
    }
}

/// Measure `algorithm_names` over `n_values` with the built-in sieves and
/// default settings.
pub fn run_analysis<S: AsRef<str>>(algorithm_names: &[S], n_values: &[usize]) -> ResultTable {
    Analyzer::new(AlgorithmRegistry::standard()).run_analysis(algorithm_names, n_values)
}

/// Emit log lines with the progress bar cleared so they do not interleave
/// with its redraws.
fn above_bar(progress: Option<&ProgressBar>, emit: impl FnOnce()) {
    match progress {
        Some(bar) => bar.suspend(emit),
        None => emit(),
    }
}

fn progress_bar(enabled: bool, total: usize) -> Option<ProgressBar> {
    if !enabled || total == 0 {
        return None;
    }

    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    Some(bar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::MeasurementError;
    use sieve_core::test_helpers::{FixedOutputSieve, PanickingSieve};
    use sieve_core::{SieveOfAtkin, SieveOfEratosthenes};

    struct ConstantProbe(u64);

    impl MemoryProbe for ConstantProbe {
        fn begin(&mut self) -> Result<(), MeasurementError> {
            Ok(())
        }

        fn finish(&mut self) -> Result<u64, MeasurementError> {
            Ok(self.0)
        }
    }

    fn analyzer(registry: AlgorithmRegistry) -> Analyzer {
        Analyzer::new(registry)
            .with_config(HarnessConfig {
                repetitions: 2,
                show_progress: false,
            })
            .with_probe(Box::new(ConstantProbe(1024 * 1024)))
    }

    #[test]
    fn rows_follow_n_then_algorithm_order() {
        let mut analyzer = analyzer(AlgorithmRegistry::standard());
        let table = analyzer.run_analysis(&[SieveOfAtkin::NAME, SieveOfEratosthenes::NAME], &[30, 10]);

        let order: Vec<(&str, usize)> = table.iter().map(|r| (r.algorithm.as_str(), r.n)).collect();
        assert_eq!(
            order,
            vec![
                (SieveOfAtkin::NAME, 30),
                (SieveOfEratosthenes::NAME, 30),
                (SieveOfAtkin::NAME, 10),
                (SieveOfEratosthenes::NAME, 10),
            ]
        );
        assert!(table.iter().all(|r| r.peak_ram_mb == Some(1.0)));
        assert!(table.iter().all(|r| r.time_ms.is_some_and(|ms| ms >= 0.0)));
    }

    #[test]
    fn unknown_names_produce_no_rows() {
        let mut analyzer = analyzer(AlgorithmRegistry::standard());
        let table = analyzer.run_analysis(&["Sieve of Sundaram", SieveOfAtkin::NAME], &[10, 20, 30]);
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|r| r.algorithm == SieveOfAtkin::NAME));
    }

    #[test]
    fn injected_kernels_are_used() {
        let registry = AlgorithmRegistry::builder()
            .with_algorithm(
                "fake",
                Box::new(FixedOutputSieve {
                    name: "fake",
                    output: vec![2],
                }),
            )
            .build();
        let table = analyzer(registry).run_analysis(&["fake"], &[1_000_000_000]);
        assert_eq!(table.len(), 1);
        assert!(table.rows()[0].is_complete());
    }

    #[test]
    fn kernel_fault_leaves_fields_absent_and_run_continues() {
        let registry = AlgorithmRegistry::builder()
            .with_algorithm(
                "flaky",
                Box::new(PanickingSieve {
                    inner: SieveOfEratosthenes,
                    fail_at: 20,
                }),
            )
            .with_algorithm("steady", Box::new(SieveOfAtkin))
            .build();

        let table = analyzer(registry).run_analysis(&["flaky", "steady"], &[10, 20, 30]);
        assert_eq!(table.len(), 6);

        let flaky_at_20 = &table.rows()[2];
        assert_eq!((flaky_at_20.algorithm.as_str(), flaky_at_20.n), ("flaky", 20));
        assert_eq!(flaky_at_20.time_ms, None);
        assert_eq!(flaky_at_20.peak_ram_mb, None);

        let complete = table.iter().filter(|r| r.is_complete()).count();
        assert_eq!(complete, 5);
    }

    #[test]
    fn zero_repetitions_only_blanks_time() {
        let mut analyzer = Analyzer::new(AlgorithmRegistry::standard())
            .with_config(HarnessConfig {
                repetitions: 0,
                show_progress: false,
            })
            .with_probe(Box::new(ConstantProbe(0)));
        let table = analyzer.run_analysis(&[SieveOfEratosthenes::NAME], &[100]);
        assert_eq!(table.rows()[0].time_ms, None);
        assert_eq!(table.rows()[0].peak_ram_mb, Some(0.0));
    }

    #[test]
    fn new_analyzer_uses_default_settings() {
        let analyzer = Analyzer::new(AlgorithmRegistry::standard());
        assert_eq!(analyzer.config(), HarnessConfig::default());
        assert_eq!(analyzer.registry().len(), 2);
    }

    #[test]
    fn log_lines_are_emitted_with_and_without_a_bar() {
        let mut emitted = 0;
        above_bar(None, || emitted += 1);
        let bar = ProgressBar::hidden();
        above_bar(Some(&bar), || emitted += 1);
        assert_eq!(emitted, 2);
    }

    #[test]
    fn progress_bar_only_when_enabled_and_non_empty() {
        assert!(progress_bar(false, 10).is_none());
        assert!(progress_bar(true, 0).is_none());
        assert!(progress_bar(true, 10).is_some_and(|bar| bar.length() == Some(10)));
    }

    #[test]
    fn empty_inputs_give_empty_table() {
        let mut analyzer = analyzer(AlgorithmRegistry::standard());
        assert!(analyzer.run_analysis::<&str>(&[], &[10]).is_empty());
        assert!(analyzer.run_analysis(&[SieveOfAtkin::NAME], &[]).is_empty());
    }
}
