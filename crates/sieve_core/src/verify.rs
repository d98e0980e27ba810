//! Agreement check across every kernel in a registry.

use crate::registry::AlgorithmRegistry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrossCheckError {
    #[error("registry is empty")]
    EmptyRegistry,
    #[error(
        "`{candidate}` disagrees with `{reference}` at n={n}: {reference_count} vs {candidate_count} primes, first difference at position {position}"
    )]
    Mismatch {
        n: usize,
        reference: String,
        candidate: String,
        reference_count: usize,
        candidate_count: usize,
        position: usize,
    },
}

/// Run every registered kernel on `n` and require identical output.
///
/// The first registered kernel is the reference. Returns the shared prime list
/// on success.
pub fn cross_check(registry: &AlgorithmRegistry, n: usize) -> Result<Vec<usize>, CrossCheckError> {
    let mut kernels = registry.iter();
    let (reference_name, reference) = kernels.next().ok_or(CrossCheckError::EmptyRegistry)?;
    let expected = reference.primes_up_to(n);

    for (candidate_name, candidate) in kernels {
        let actual = candidate.primes_up_to(n);
        if actual != expected {
            let position = expected
                .iter()
                .zip(actual.iter())
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| expected.len().min(actual.len()));
            return Err(CrossCheckError::Mismatch {
                n,
                reference: reference_name.to_string(),
                candidate: candidate_name.to_string(),
                reference_count: expected.len(),
                candidate_count: actual.len(),
                position,
            });
        }
    }

    Ok(expected)
}
