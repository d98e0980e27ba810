use super::algorithm::SieveAlgorithm;
use super::marker::{integer_sqrt, marker_array};

/// Sieve of Atkin.
///
/// Flags candidates through three quadratic forms, toggling the marker each
/// time a form hits `num` in its residue class mod 12:
///
/// 1. `4x² + y²` with `num % 12` in `{1, 5}`
/// 2. `3x² + y²` with `num % 12 == 7`
/// 3. `3x² − y²` (`x > y`) with `num % 12 == 11`
///
/// A number toggled an odd number of times is a prime candidate.
/// Multiples of `r²` for each surviving `r` in `5..=√n` are then cleared, and
/// the base primes 2 and 3 are prepended when they do not exceed `n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SieveOfAtkin;

impl SieveOfAtkin {
    pub const NAME: &'static str = "Sieve of Atkin";
}

impl SieveAlgorithm for SieveOfAtkin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn primes_up_to(&self, n: usize) -> Vec<usize> {
        let mut sieve = marker_array(n, false);
        let limit = integer_sqrt(n);

        for x in 1..=limit {
            let four_x_sq = 4 * x * x;
            for y in 1..=limit {
                let num = four_x_sq + y * y;
                if num <= n && matches!(num % 12, 1 | 5) {
                    sieve[num] = !sieve[num];
                }
            }
        }

        for x in 1..=limit {
            let three_x_sq = 3 * x * x;
            for y in 1..=limit {
                let num = three_x_sq + y * y;
                if num <= n && num % 12 == 7 {
                    sieve[num] = !sieve[num];
                }
            }
        }

        for x in 1..=limit {
            let three_x_sq = 3 * x * x;
            for y in 1..x {
                let num = three_x_sq - y * y;
                if num <= n && num % 12 == 11 {
                    sieve[num] = !sieve[num];
                }
            }
        }

        for r in 5..=limit {
            if sieve[r] {
                let square = r * r;
                for multiple in (square..=n).step_by(square) {
                    sieve[multiple] = false;
                }
            }
        }

        let mut primes: Vec<usize> = [2, 3].into_iter().filter(|&base| base <= n).collect();
        primes.extend((5..=n).filter(|&p| sieve[p]));
        primes
    }
}
