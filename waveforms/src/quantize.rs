//! Amplitude scaling and noise-shaped quantization.
//!
//! The quantizer integrates the signal `order` times, rounds, then
//! differences `order` times. Rounding error introduced between the two
//! passes comes out high-pass shaped instead of flat, which is what
//! keeps low-level detail audible in a 16-bit table.

use anyhow::{Result, ensure};

/// How a float table is mapped into the signed 16-bit range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    pub min: f64,
    pub max: f64,
    pub center: bool,
    pub dither_order: usize,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        // One count of headroom on both ends for the shaped error.
        Self {
            min: -32766.0,
            max: 32766.0,
            center: true,
            dither_order: 2,
        }
    }
}

/// One integration pass: prepend a zero, then running sum. Output is one
/// sample longer than the input.
pub fn integrate(x: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(x.len() + 1);
    out.push(0.0);
    let mut acc = 0.0;
    for &v in x {
        acc += v;
        out.push(acc);
    }
    out
}

/// One differencing pass, the exact inverse of [`integrate`]. Output is
/// one sample shorter than the input.
pub fn difference(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Noise-shaping quantizer: `order` integration passes, round to the
/// nearest integer (ties to even), `order` differencing passes, then a
/// saturating narrow to `i16`. Out-of-range samples are clamped and
/// reported through the log, not fatal.
pub fn dither(x: &[f64], order: usize) -> Vec<i16> {
    let mut y = x.to_vec();
    for _ in 0..order {
        y = integrate(&y);
    }
    for v in &mut y {
        *v = v.round_ties_even();
    }
    for _ in 0..order {
        y = difference(&y);
    }
    narrow_i16(&y)
}

/// Saturating f64 -> i16 narrowing. Clipping is possible when the shaped
/// error pushes a sample past the target range; it is clamped and
/// logged.
pub fn narrow_i16(x: &[f64]) -> Vec<i16> {
    let lo = i16::MIN as f64;
    let hi = i16::MAX as f64;
    let mut clipped = 0usize;
    let out = x
        .iter()
        .map(|&v| {
            if v < lo || v > hi {
                clipped += 1;
            }
            v.clamp(lo, hi) as i16
        })
        .collect();
    if clipped > 0 {
        log::warn!("clipped {} of {} samples to the i16 range", clipped, x.len());
    }
    out
}

/// Removes the DC offset (if `center`) and linearly remaps the peak
/// range `[-mx, mx]` onto `[min, max]`. An all-zero signal has no peak
/// to scale by and is rejected.
pub fn normalize(samples: &[f64], config: ScaleConfig) -> Result<Vec<f64>> {
    let mut x = samples.to_vec();
    if config.center {
        let mean = x.iter().sum::<f64>() / x.len() as f64;
        for v in &mut x {
            *v -= mean;
        }
    }
    let mx = x.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
    ensure!(mx > 0.0, "cannot scale a signal with zero peak amplitude");
    Ok(x.iter()
        .map(|&v| (v + mx) / (2.0 * mx) * (config.max - config.min) + config.min)
        .collect())
}

/// Full scaling pipeline: [`normalize`] then [`dither`].
pub fn scale(samples: &[f64], config: ScaleConfig) -> Result<Vec<i16>> {
    Ok(dither(&normalize(samples, config)?, config.dither_order))
}
