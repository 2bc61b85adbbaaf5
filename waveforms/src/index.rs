//! Permutation indices used to read a table starting from a rotated
//! offset. All three are pure functions of the position, modulo the
//! wavetable size, so a rotated table is just a re-indexed copy.

use crate::{TABLE_LEN, WAVETABLE_SIZE};

/// Half-period rotation: read starting from the middle of the cycle.
pub fn wrap_index(i: usize) -> usize {
    (i + WAVETABLE_SIZE / 2) % WAVETABLE_SIZE
}

/// Quarter-period rotation, a 90 degree phase shift.
pub fn quadrature_index(i: usize) -> usize {
    (i + WAVETABLE_SIZE / 4) % WAVETABLE_SIZE
}

/// Identity modulo the cycle length. Turns a single-cycle buffer into a
/// guard-sample table by repeating sample 0 at the end.
pub fn fill_index(i: usize) -> usize {
    i % WAVETABLE_SIZE
}

/// Materializes a `TABLE_LEN`-sample copy of `samples` read through the
/// given index function. `samples` must cover at least one full cycle.
pub fn reindex(samples: &[f64], index: fn(usize) -> usize) -> Vec<f64> {
    (0..TABLE_LEN).map(|i| samples[index(i)]).collect()
}
