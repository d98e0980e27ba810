//! Prime sieve kernels and the registry used to look them up by name.
//!
//! Every kernel implements [`SieveAlgorithm`] and returns all primes `p` with
//! `2 <= p <= n` in strictly increasing order. The [`AlgorithmRegistry`] maps
//! display names to kernels and is handed to the measurement harness in
//! `sieve_experiments`.

pub mod registry;
pub mod sieves;
pub mod verify;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use registry::{AlgorithmRegistry, RegistryBuilder};
pub use sieves::{SieveAlgorithm, SieveKind, SieveOfAtkin, SieveOfEratosthenes};
pub use verify::{cross_check, CrossCheckError};
