//! Timing and memory passes over a single kernel invocation.
//!
//! Each pass returns an explicit `Result`; kernel panics are caught here and
//! surfaced as [`MeasurementError::KernelPanicked`] so the harness can record
//! an absent value and move on to the next pair.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

mod allocation;
mod memory;
mod timing;

pub use allocation::{AllocationProbe, TrackingAllocator};
pub use memory::{measure_peak_memory, MemoryProbe, ResidentMemoryProbe, BYTES_PER_MB};
pub use timing::measure_average_time;

/// Why a timing or memory pass produced no value.
#[derive(Debug, thiserror::Error)]
pub enum MeasurementError {
    #[error("kernel panicked: {message}")]
    KernelPanicked { message: String },
    #[error("repetition count must be at least 1")]
    ZeroRepetitions,
    #[error("memory probe unavailable: {0}")]
    ProbeUnavailable(String),
    #[error("memory probe was not started")]
    ProbeNotStarted,
    #[error("failed to read memory statistics: {0}")]
    Io(#[from] std::io::Error),
}

/// The probe a new harness uses: heap accounting when [`TrackingAllocator`]
/// is the global allocator, resident-set sampling otherwise.
pub fn default_probe() -> Box<dyn MemoryProbe> {
    if AllocationProbe::is_available() {
        Box::new(AllocationProbe::new())
    } else {
        Box::new(ResidentMemoryProbe::new())
    }
}

/// Run `f`, converting a panic into [`MeasurementError::KernelPanicked`].
pub(crate) fn guard_kernel<T>(f: impl FnOnce() -> T) -> Result<T, MeasurementError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| MeasurementError::KernelPanicked {
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
