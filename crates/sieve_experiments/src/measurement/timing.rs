use std::hint::black_box;
use std::time::Instant;

use sieve_core::SieveAlgorithm;

use super::{guard_kernel, MeasurementError};

/// Average wall-clock time of `repetitions` calls to `kernel` on `n`, in milliseconds.
pub fn measure_average_time(
    kernel: &dyn SieveAlgorithm,
    n: usize,
    repetitions: u32,
) -> Result<f64, MeasurementError> {
    if repetitions == 0 {
        return Err(MeasurementError::ZeroRepetitions);
    }

    let elapsed = guard_kernel(|| {
        let start = Instant::now();
        for _ in 0..repetitions {
            black_box(kernel.primes_up_to(black_box(n)));
        }
        start.elapsed()
    })?;

    Ok(elapsed.as_secs_f64() * 1000.0 / f64::from(repetitions))
}
