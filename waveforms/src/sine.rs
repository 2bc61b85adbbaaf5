//! Sine and swept-sine oscillator tables, sampled in the raw 0..255
//! range the original 8-bit tables used. The scaling pass stretches
//! them to 16-bit afterwards.

use std::f64::consts::PI;

use crate::sample_positions;

/// One inverted sine cycle, `-sin(2 pi t) * 127.5 + 127.5`.
pub fn sine() -> Vec<f64> {
    sample_positions()
        .iter()
        .map(|&t| -(2.0 * PI * t).sin() * 127.5 + 127.5)
        .collect()
}

/// Exponential frequency sweep, `-sin(exp(4t)) * 127.5 + 127.5`. Not a
/// periodic waveform; played as a one-shot "sizzle" transient.
pub fn sizzle() -> Vec<f64> {
    sample_positions()
        .iter()
        .map(|&t| -((4.0 * t).exp()).sin() * 127.5 + 127.5)
        .collect()
}
