#![allow(dead_code)]

use sieve_experiments::{MeasurementError, MeasurementRow, MemoryProbe, ResultTable};

/// Probe that reports a fixed byte count for every window.
pub struct FixedProbe(pub u64);

impl MemoryProbe for FixedProbe {
    fn begin(&mut self) -> Result<(), MeasurementError> {
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, MeasurementError> {
        Ok(self.0)
    }
}

/// Probe that always fails to start.
pub struct UnavailableProbe;

impl MemoryProbe for UnavailableProbe {
    fn begin(&mut self) -> Result<(), MeasurementError> {
        Err(MeasurementError::ProbeUnavailable("test probe".to_string()))
    }

    fn finish(&mut self) -> Result<u64, MeasurementError> {
        Err(MeasurementError::ProbeNotStarted)
    }
}

pub fn row(algorithm: &str, n: usize, time_ms: Option<f64>, peak_ram_mb: Option<f64>) -> MeasurementRow {
    MeasurementRow {
        algorithm: algorithm.to_string(),
        n,
        time_ms,
        peak_ram_mb,
    }
}

/// Two algorithms over three bounds, with one gap in each metric.
pub fn sample_table() -> ResultTable {
    ResultTable::from_rows(vec![
        row("Sieve of Eratosthenes", 10_000, Some(0.08), Some(0.01)),
        row("Sieve of Atkin", 10_000, Some(0.11), Some(0.01)),
        row("Sieve of Eratosthenes", 505_000, None, Some(0.49)),
        row("Sieve of Atkin", 505_000, Some(5.2), None),
        row("Sieve of Eratosthenes", 1_000_000, Some(9.7), Some(0.96)),
        row("Sieve of Atkin", 1_000_000, Some(11.3), Some(0.96)),
    ])
}
