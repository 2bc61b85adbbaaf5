pub mod bandlimited;
pub mod index;
pub mod quantize;
pub mod sine;
pub mod table;
pub mod trigger;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use table::Waveform;

/// Number of samples in one wavetable cycle
pub const WAVETABLE_SIZE: usize = 256;

/// Stored table length: one full cycle plus a repeated guard sample,
/// so playback can interpolate past the last position without wrapping
pub const TABLE_LEN: usize = WAVETABLE_SIZE + 1;

/// Sample rate in Hz the band-limited tables are computed for
pub const SAMPLE_RATE: u32 = 40000;

/// Number of band-limited pitch zones
pub const NUM_ZONES: usize = 15;

/// Seed for the noise trigger table
pub const NOISE_SEED: u64 = 666;

/// Fractional positions `t = k / WAVETABLE_SIZE` for `k` in `0..=WAVETABLE_SIZE`
pub fn sample_positions() -> Vec<f64> {
    (0..TABLE_LEN)
        .map(|k| k as f64 / WAVETABLE_SIZE as f64)
        .collect()
}

/// Computes every lookup table, in the order the firmware indexes them:
/// the four trigger shapes, the sine and sizzle oscillator tables, then
/// one band-limited comb table per zone.
pub fn build_waveform_bank() -> Result<Vec<Waveform>> {
    let mut rng = StdRng::seed_from_u64(NOISE_SEED);

    let mut bank = Vec::with_capacity(6 + NUM_ZONES);

    bank.push(Waveform::new(
        "exponential",
        quantize::narrow_i16(&trigger::trigger_scale(&trigger::exponential())?),
    ));
    bank.push(Waveform::new(
        "ring",
        quantize::narrow_i16(&trigger::trigger_scale(&trigger::ring())?),
    ));
    bank.push(Waveform::new(
        "steps",
        quantize::narrow_i16(&trigger::trigger_scale(&trigger::steps())?),
    ));
    bank.push(Waveform::new(
        "noise",
        quantize::narrow_i16(&trigger::trigger_scale(&trigger::noise(&mut rng))?),
    ));

    // The sine table starts a quarter period in, so reads at phase zero
    // land on the peak rather than the zero crossing.
    let rotated_sine = index::reindex(&sine::sine(), index::quadrature_index);
    bank.push(Waveform::new(
        "sine",
        quantize::scale(&rotated_sine, quantize::ScaleConfig::default())?,
    ));
    bank.push(Waveform::new(
        "sizzle",
        quantize::scale(&sine::sizzle(), quantize::ScaleConfig::default())?,
    ));

    for zone in 0..NUM_ZONES {
        bank.push(Waveform::new(
            &format!("bandlimited_comb_{}", zone),
            bandlimited::bandlimited_comb(zone)?,
        ));
    }

    Ok(bank)
}

#[cfg(test)]
mod test;
