//! Band-limited pulse tables, one per pitch zone. Each table is a
//! Dirichlet-kernel pulse whose harmonic count is chosen so that the
//! zone's highest playable fundamental stays free of aliasing.

use std::f64::consts::PI;

use anyhow::Result;

use crate::index::{fill_index, quadrature_index, reindex};
use crate::quantize::{ScaleConfig, scale};
use crate::{NUM_ZONES, SAMPLE_RATE, WAVETABLE_SIZE};

const DENOMINATOR_EPSILON: f64 = 1e-9;

/// Highest fundamental for a zone: an equal-tempered ladder starting
/// eight semitones per zone above MIDI note 18, clamped under Nyquist.
/// The last zone is pinned just below Nyquist so it covers everything
/// above the ladder.
pub fn zone_frequency(zone: usize) -> f64 {
    let nyquist = SAMPLE_RATE as f64 / 2.0;
    if zone == NUM_ZONES - 1 {
        return nyquist - 1.0;
    }
    let semitones = (18 + 8 * zone) as f64 - 69.0;
    (440.0 * 2f64.powf(semitones / 12.0)).min(nyquist)
}

/// Largest odd number of harmonics that fits under Nyquist for the
/// given period in samples.
pub fn harmonic_count(period: f64) -> f64 {
    2.0 * (period / 2.0).floor() + 1.0
}

/// Samples one cycle of `sin(pi i m) / (m sin(pi i))` over
/// `i = (k - N/2) / N`. The center sample is the kernel's removable
/// singularity and is fixed to exactly 1.0; everywhere else a small
/// epsilon keeps the denominator away from zero.
pub fn bandlimited_pulse(m: f64) -> Vec<f64> {
    (0..WAVETABLE_SIZE)
        .map(|k| {
            if k == WAVETABLE_SIZE / 2 {
                return 1.0;
            }
            let i = (k as f64 - (WAVETABLE_SIZE / 2) as f64) / WAVETABLE_SIZE as f64;
            (PI * i * m).sin() / (m * (PI * i).sin() + DENOMINATOR_EPSILON)
        })
        .collect()
}

/// Builds the quantized comb table for one zone: pulse sampling, guard
/// sample via the fill reindex, quarter-period rotation, then the
/// default 16-bit scaling pass.
pub fn bandlimited_comb(zone: usize) -> Result<Vec<i16>> {
    let f0 = zone_frequency(zone);
    let period = SAMPLE_RATE as f64 / f0;
    let m = harmonic_count(period);

    let pulse = bandlimited_pulse(m);
    let filled = reindex(&pulse, fill_index);
    let rotated = reindex(&filled, quadrature_index);

    scale(&rotated, ScaleConfig::default())
}
