//! Peak-memory sampling around a single kernel call, and the resident-set
//! fallback probe.
//!
//! [`ResidentMemoryProbe`] figures are resident-set sizes reported by the
//! operating system, not allocator-level byte counts, so they include page
//! granularity and can read zero when a call reuses pages that an earlier
//! call already made resident.

use std::hint::black_box;

use sieve_core::SieveAlgorithm;
use tracing::debug;

use super::{guard_kernel, MeasurementError};

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A before/after memory high-water-mark sampler.
///
/// `begin` is called immediately before the kernel runs and `finish`
/// immediately after; `finish` returns the peak bytes attributed to the window.
pub trait MemoryProbe: Send {
    fn begin(&mut self) -> Result<(), MeasurementError>;

    fn finish(&mut self) -> Result<u64, MeasurementError>;
}

/// Peak resident memory of one call to `kernel` on `n`, in megabytes.
pub fn measure_peak_memory(
    kernel: &dyn SieveAlgorithm,
    n: usize,
    probe: &mut dyn MemoryProbe,
) -> Result<f64, MeasurementError> {
    probe.begin()?;
    let outcome = guard_kernel(|| {
        black_box(kernel.primes_up_to(black_box(n)));
    });
    let peak_bytes = probe.finish();

    outcome?;
    Ok(peak_bytes? as f64 / BYTES_PER_MB)
}

/// Samples the process resident high-water mark from `/proc/self/status`.
///
/// On `begin` the operating system's `VmHWM` counter is reset through
/// `/proc/self/clear_refs` and the current `VmRSS` is recorded as the
/// baseline. `finish` reports `VmHWM - baseline`. When the reset is refused
/// the high-water mark may still reflect an earlier, larger peak.
#[derive(Debug, Default)]
pub struct ResidentMemoryProbe {
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    baseline_bytes: Option<u64>,
    #[cfg(target_os = "linux")]
    reset_refused: bool,
    #[cfg(not(target_os = "linux"))]
    unsupported_logged: bool,
}

impl ResidentMemoryProbe {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(target_os = "linux")]
impl MemoryProbe for ResidentMemoryProbe {
    fn begin(&mut self) -> Result<(), MeasurementError> {
        if std::fs::write("/proc/self/clear_refs", "5").is_err() && !self.reset_refused {
            self.reset_refused = true;
            debug!("resident high-water mark reset refused; peaks may include earlier allocations");
        }
        let status = std::fs::read_to_string("/proc/self/status")?;
        self.baseline_bytes = Some(status_field_bytes(&status, "VmRSS")?);
        Ok(())
    }

    fn finish(&mut self) -> Result<u64, MeasurementError> {
        let baseline = self
            .baseline_bytes
            .take()
            .ok_or(MeasurementError::ProbeNotStarted)?;
        let status = std::fs::read_to_string("/proc/self/status")?;
        let high_water = status_field_bytes(&status, "VmHWM")?;
        Ok(high_water.saturating_sub(baseline))
    }
}

#[cfg(not(target_os = "linux"))]
impl MemoryProbe for ResidentMemoryProbe {
    fn begin(&mut self) -> Result<(), MeasurementError> {
        if !self.unsupported_logged {
            self.unsupported_logged = true;
            debug!("resident memory sampling is only supported on Linux");
        }
        Err(MeasurementError::ProbeUnavailable(
            "resident memory sampling requires /proc/self/status".to_string(),
        ))
    }

    fn finish(&mut self) -> Result<u64, MeasurementError> {
        Err(MeasurementError::ProbeNotStarted)
    }
}

/// Parse a `Key:   1234 kB` line from `/proc/self/status` into bytes.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn status_field_bytes(status: &str, key: &str) -> Result<u64, MeasurementError> {
    status
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| *name == key)
        .and_then(|(_, value)| value.split_whitespace().next())
        .and_then(|kb| kb.parse::<u64>().ok())
        .map(|kb| kb * 1024)
        .ok_or_else(|| MeasurementError::ProbeUnavailable(format!("{key} missing from /proc/self/status")))
}
