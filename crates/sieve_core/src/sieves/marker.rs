//! Fallible allocation of the per-index marker arrays used by the sieves.

/// Allocate `n + 1` markers initialised to `initial`.
///
/// Allocation goes through `try_reserve_exact` so an oversized `n` surfaces as
/// a panic the harness can catch instead of an allocator abort.
pub(crate) fn marker_array(n: usize, initial: bool) -> Vec<bool> {
    let len = match n.checked_add(1) {
        Some(len) => len,
        None => panic!("marker array for n={n} exceeds addressable memory"),
    };

    let mut markers = Vec::new();
    if let Err(error) = markers.try_reserve_exact(len) {
        panic!("failed to allocate marker array of {len} entries: {error}");
    }
    markers.resize(len, initial);
    markers
}

/// Largest `r` with `r * r <= n`.
pub(crate) fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // Float rounding can be off by one in either direction for large n.
    while root > 0 && root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}
