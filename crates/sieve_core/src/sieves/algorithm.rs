/// Trait for prime sieves that can be timed and profiled by the harness.
///
/// Implementations must be stateless: calling [`primes_up_to`] twice with the
/// same `n` yields the same list, and concurrent calls share nothing mutable.
///
/// # Examples
///
/// ```rust
/// use sieve_core::{SieveAlgorithm, SieveOfEratosthenes};
///
/// let primes = SieveOfEratosthenes.primes_up_to(30);
/// assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
///
/// [`primes_up_to`]: SieveAlgorithm::primes_up_to
pub trait SieveAlgorithm: Send + Sync {
    /// Human-readable name, also used as the default registry key.
    fn name(&self) -> &'static str;

    /// All primes `p` with `2 <= p <= n`, strictly increasing.
    ///
    /// Returns an empty vector when `n < 2`.
    ///
    /// # Panics
    ///
    /// Panics if the marker array for `n` cannot be allocated. The harness
    /// catches this and records the measurement as failed.
    fn primes_up_to(&self, n: usize) -> Vec<usize>;
}

impl<T: SieveAlgorithm + ?Sized> SieveAlgorithm for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn primes_up_to(&self, n: usize) -> Vec<usize> {
        (**self).primes_up_to(n)
    }
}
