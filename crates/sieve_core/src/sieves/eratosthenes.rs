use super::algorithm::SieveAlgorithm;
use super::marker::marker_array;

/// Sieve of Eratosthenes.
///
/// Starts with every index marked "possibly prime" and, for each surviving
/// `p` with `p * p <= n`, marks `p*p, p*p + p, ...` composite. Indices 0 and
/// 1 are cleared after the marking pass.
///
/// # Performance
///
/// Time complexity: O(n log log n). Space: one `bool` per integer in `0..=n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SieveOfEratosthenes;

impl SieveOfEratosthenes {
    pub const NAME: &'static str = "Sieve of Eratosthenes";
}

impl SieveAlgorithm for SieveOfEratosthenes {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn primes_up_to(&self, n: usize) -> Vec<usize> {
        let mut prime = marker_array(n, true);

        let mut p = 2usize;
        while p.checked_mul(p).is_some_and(|sq| sq <= n) {
            if prime[p] {
                for multiple in (p * p..=n).step_by(p) {
                    prime[multiple] = false;
                }
            }
            p += 1;
        }

        for index in prime.iter_mut().take(2) {
            *index = false;
        }

        prime
            .iter()
            .enumerate()
            .filter_map(|(index, &is_prime)| is_prime.then_some(index))
            .collect()
    }
}
