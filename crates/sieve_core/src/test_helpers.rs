//! Test helpers shared by unit tests, integration tests and downstream crates.
//!
//! The reference here is deliberately naive trial division so it shares no code
//! with the sieves under test.

use crate::sieves::SieveAlgorithm;

/// Primes up to 30, the canonical small fixture.
pub const PRIMES_UP_TO_30: [usize; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Trial-division primality test.
pub fn is_prime(candidate: usize) -> bool {
    if candidate < 2 {
        return false;
    }
    let mut divisor = 2usize;
    while divisor * divisor <= candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// All primes up to `n` by trial division.
pub fn reference_primes(n: usize) -> Vec<usize> {
    (0..=n).filter(|&candidate| is_prime(candidate)).collect()
}

/// Kernel that returns a fixed list regardless of `n`.
#[derive(Debug, Clone)]
pub struct FixedOutputSieve {
    pub name: &'static str,
    pub output: Vec<usize>,
}

impl SieveAlgorithm for FixedOutputSieve {
    fn name(&self) -> &'static str {
        self.name
    }

    fn primes_up_to(&self, _n: usize) -> Vec<usize> {
        self.output.clone()
    }
}

/// Kernel that panics for one specific `n` and defers to `inner` otherwise.
pub struct PanickingSieve<S> {
    pub inner: S,
    pub fail_at: usize,
}

impl<S: SieveAlgorithm> SieveAlgorithm for PanickingSieve<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn primes_up_to(&self, n: usize) -> Vec<usize> {
        if n == self.fail_at {
            panic!("injected fault at n={n}");
        }
        self.inner.primes_up_to(n)
    }
}
