use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bandlimited::{bandlimited_pulse, harmonic_count, zone_frequency};
use crate::index::{fill_index, quadrature_index, reindex, wrap_index};
use crate::quantize::{ScaleConfig, dither, narrow_i16, normalize, scale};
use crate::{NOISE_SEED, NUM_ZONES, SAMPLE_RATE, TABLE_LEN, WAVETABLE_SIZE, sine, trigger};

#[test]
fn integrate_round_difference_is_exact_on_integers() {
    // With integer input the rounding pass has nothing to do, so the
    // differencing passes must undo the integration passes exactly.
    let input = vec![3.0, -7.0, 12.0, 0.0, 5.0, -1.0, 32000.0, -32000.0];
    let expected: Vec<i16> = input.iter().map(|&v| v as i16).collect();
    assert_eq!(dither(&input, 2), expected);
    assert_eq!(dither(&input, 4), expected);
}

#[test]
fn zero_order_dither_rounds_ties_to_even() {
    assert_eq!(dither(&[1.4, -2.6, 0.5, 1.5, -0.5], 0), vec![1, -3, 0, 2, 0]);
}

#[test]
fn narrowing_saturates_out_of_range_samples() {
    assert_eq!(
        narrow_i16(&[40000.0, -40000.0, 12.0, -12.0]),
        vec![32767, -32768, 12, -12]
    );
}

#[test]
fn normalize_maps_peaks_onto_range_ends() {
    let config = ScaleConfig {
        center: false,
        ..ScaleConfig::default()
    };
    let out = normalize(&[-1.0, 0.0, 1.0], config).unwrap();
    assert_eq!(out, vec![-32766.0, 0.0, 32766.0]);
}

#[test]
fn normalize_removes_dc_offset() {
    let out = normalize(&sine::sizzle(), ScaleConfig::default()).unwrap();
    let mean = out.iter().sum::<f64>() / out.len() as f64;
    assert!(mean.abs() < 1e-6, "residual mean {}", mean);
}

#[test]
fn scaling_an_all_zero_signal_is_an_error() {
    assert!(scale(&[0.0; TABLE_LEN], ScaleConfig::default()).is_err());
    assert!(trigger::trigger_scale(&[0.0; TABLE_LEN]).is_err());
}

#[test]
fn scaling_a_constant_positive_trigger_shape_is_an_error() {
    // A flat strictly-positive shape has no span to stretch.
    assert!(trigger::trigger_scale(&[1.0; TABLE_LEN]).is_err());
}

#[test]
fn positive_trigger_shape_spans_zero_to_full_scale() {
    let scaled = trigger::trigger_scale(&trigger::exponential()).unwrap();
    assert_eq!(scaled[0], 32767.0);
    assert_eq!(scaled[scaled.len() - 1], 0.0);
}

#[test]
fn bipolar_trigger_shape_keeps_zero_crossings() {
    let scaled = trigger::trigger_scale(&[-0.5, 0.0, 1.0]).unwrap();
    assert_eq!(scaled, vec![-16384.0, 0.0, 32767.0]);
}

#[test]
fn steps_shape_starts_at_exact_zero() {
    let steps = trigger::steps();
    assert_eq!(steps[0], 0.0);
    assert!(steps[1] > 0.0);
}

#[test]
fn noise_shape_is_deterministic_for_a_fixed_seed() {
    let a = trigger::noise(&mut StdRng::seed_from_u64(NOISE_SEED));
    let b = trigger::noise(&mut StdRng::seed_from_u64(NOISE_SEED));
    assert_eq!(a, b);
    assert_eq!(a.len(), TABLE_LEN);
    // The (1-t)^2 envelope closes the shape at exactly zero.
    assert_eq!(a[a.len() - 1], 0.0);
}

#[test]
fn permutation_indices_rotate_modulo_the_cycle() {
    assert_eq!(quadrature_index(0), 64);
    assert_eq!(quadrature_index(200), 8);
    assert_eq!(wrap_index(0), 128);
    assert_eq!(wrap_index(200), 72);
    assert_eq!(fill_index(0), 0);
    assert_eq!(fill_index(WAVETABLE_SIZE), 0);
}

#[test]
fn reindex_produces_a_guarded_rotated_table() {
    let raw = sine::sine();
    let rotated = reindex(&raw, quadrature_index);
    assert_eq!(rotated.len(), TABLE_LEN);
    assert_eq!(rotated[0], raw[64]);
    // Guard sample repeats the cycle start of the rotated read.
    assert_eq!(rotated[WAVETABLE_SIZE], rotated[0]);
}

#[test]
fn zone_ladder_is_equal_tempered_and_capped_under_nyquist() {
    // Zone 0 starts the ladder at MIDI note 18: 440 * 2^((18 - 69) / 12).
    assert!((zone_frequency(0) - 440.0 * 2f64.powf(-51.0 / 12.0)).abs() < 1e-12);
    assert!(zone_frequency(0) > 23.12 && zone_frequency(0) < 23.13);
    for zone in 1..NUM_ZONES {
        assert!(zone_frequency(zone) > zone_frequency(zone - 1));
        assert!(zone_frequency(zone) < SAMPLE_RATE as f64 / 2.0);
    }
    assert_eq!(zone_frequency(NUM_ZONES - 1), 19999.0);
}

#[test]
fn harmonic_count_is_the_nearest_odd_fit() {
    // A 305.78-sample period (a low C at 40 kHz) fits 305 odd harmonics.
    assert_eq!(harmonic_count(305.78), 305.0);
    assert_eq!(harmonic_count(2.0), 3.0);
    let zone_zero_period = SAMPLE_RATE as f64 / zone_frequency(0);
    assert_eq!(harmonic_count(zone_zero_period), 1729.0);
}

#[test]
fn pulse_center_sample_is_exactly_unity() {
    let pulse = bandlimited_pulse(305.0);
    assert_eq!(pulse.len(), WAVETABLE_SIZE);
    assert_eq!(pulse[WAVETABLE_SIZE / 2], 1.0);
    // The kernel is even around the center up to the denominator epsilon.
    assert!((pulse[WAVETABLE_SIZE / 2 - 1] - pulse[WAVETABLE_SIZE / 2 + 1]).abs() < 1e-6);
}
