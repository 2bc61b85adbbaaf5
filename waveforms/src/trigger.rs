//! Trigger-shaper envelope tables. Four short shapes, each normalized
//! independently to span the full positive 16-bit range.

use std::f64::consts::PI;

use anyhow::{Result, ensure};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::sample_positions;

/// Normalizes a trigger shape so it spans the full output range.
///
/// A strictly positive shape is stretched so its minimum lands on 0 and
/// its maximum on 32767. A shape that crosses zero is only scaled by its
/// peak magnitude, so zero crossings stay where they are. Values are
/// rounded but kept as floats; the narrowing happens at bank assembly.
pub fn trigger_scale(x: &[f64]) -> Result<Vec<f64>> {
    let min = x.iter().fold(f64::INFINITY, |acc, &v| acc.min(v));
    let max = x.iter().fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));

    let scaled: Vec<f64> = if min > 0.0 {
        ensure!(max > min, "cannot scale a constant trigger shape");
        x.iter()
            .map(|&v| ((v - min) / (max - min) * 32767.0).round_ties_even())
            .collect()
    } else {
        let abs_max = x.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
        ensure!(abs_max > 0.0, "cannot scale an all-zero trigger shape");
        x.iter()
            .map(|&v| (v / abs_max * 32767.0).round_ties_even())
            .collect()
    };
    Ok(scaled)
}

/// Plain exponential decay, `exp(-4t)`.
pub fn exponential() -> Vec<f64> {
    sample_positions()
        .iter()
        .map(|&t| (-4.0 * t).exp())
        .collect()
}

/// Decaying ring: `exp(-3t) * cos(8 pi t)`.
pub fn ring() -> Vec<f64> {
    sample_positions()
        .iter()
        .map(|&t| (-3.0 * t).exp() * (8.0 * PI * t).cos())
        .collect()
}

/// Alternating steps that halve in amplitude: `sign(sin(4 pi t)) * 2^-round(2t)`.
pub fn steps() -> Vec<f64> {
    sample_positions()
        .iter()
        .map(|&t| sign((4.0 * PI * t).sin()) * 2f64.powf(-(2.0 * t).round_ties_even()))
        .collect()
}

/// White noise under a `(1-t)^2` decay envelope. One standard-normal
/// draw per sample, in table order, from the caller's generator.
pub fn noise<R: Rng>(rng: &mut R) -> Vec<f64> {
    sample_positions()
        .iter()
        .map(|&t| {
            let n: f64 = rng.sample(StandardNormal);
            n * (1.0 - t) * (1.0 - t)
        })
        .collect()
}

// f64::signum maps 0.0 to 1.0; the steps shape needs an exact zero at
// the zero crossings.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
