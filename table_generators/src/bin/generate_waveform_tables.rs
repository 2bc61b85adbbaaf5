use anyhow::Result;
use fixed::types::I1F15 as Q15;

use waveforms::{NOISE_SEED, NUM_ZONES, SAMPLE_RATE, TABLE_LEN, WAVETABLE_SIZE, Waveform};

fn main() -> Result<()> {
    env_logger::init();

    eprintln!("Generating waveform tables:");
    eprintln!("  WAVETABLE_SIZE: {}", WAVETABLE_SIZE);
    eprintln!("  SAMPLE_RATE: {} Hz", SAMPLE_RATE);
    eprintln!("  NUM_ZONES: {}", NUM_ZONES);
    eprintln!("  NOISE_SEED: {}", NOISE_SEED);
    eprintln!();

    let bank = waveforms::build_waveform_bank()?;

    println!("use fixed::types::I1F15 as Q15;");

    for table in &bank {
        print_table(table);
    }

    // Position-indexed pointer table, in bank order.
    println!();
    println!(
        "pub static WAVEFORM_TABLE: [&[Q15; {}]; {}] = [",
        TABLE_LEN,
        bank.len()
    );
    for table in &bank {
        println!("    &{},", static_name(&table.name));
    }
    println!("];");

    eprintln!();
    eprintln!("Sanity checks:");
    eprintln!("  Table count: {} (expected: {})", bank.len(), 6 + NUM_ZONES);
    for table in &bank {
        let samples = to_q15(&table.samples);
        let min = samples.iter().min().unwrap();
        let max = samples.iter().max().unwrap();
        eprintln!(
            "  {}: {} samples, range [{}, {}]",
            table.name,
            samples.len(),
            min,
            max
        );
    }

    // The sine table is quadrature rotated: reads start at the negative
    // peak and reach the positive peak half a cycle later.
    let sine = to_q15(&bank[4].samples);
    eprintln!();
    eprintln!("  sine[0]: {} (expected: ~-1.0)", sine[0]);
    eprintln!(
        "  sine[{}]: {} (expected: ~1.0)",
        WAVETABLE_SIZE / 2,
        sine[WAVETABLE_SIZE / 2]
    );

    Ok(())
}

fn to_q15(samples: &[i16]) -> Vec<Q15> {
    samples.iter().map(|&s| Q15::from_bits(s)).collect()
}

fn static_name(name: &str) -> String {
    format!("WAV_{}", name.to_uppercase())
}

fn print_table(table: &Waveform) {
    println!();
    print!(
        "pub static {}: [Q15; {}] = [",
        static_name(&table.name),
        table.len()
    );

    for &sample in &table.samples {
        println!();
        print!("    Q15::from_bits({:#06x}_u16 as i16),", sample as u16);
    }

    println!();
    println!("];");
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn q15_samples_carry_the_raw_table_bits() {
        let samples = to_q15(&[i16::MIN, -16384, 0, 16384, i16::MAX]);
        let bits: Vec<i16> = samples.iter().map(|q| q.to_bits()).collect();
        assert_eq!(bits, vec![i16::MIN, -16384, 0, 16384, i16::MAX]);
        assert_eq!(samples[2], Q15::ZERO);
    }

    #[test]
    fn static_names_are_uppercased_with_a_wav_prefix() {
        assert_eq!(static_name("sine"), "WAV_SINE");
        assert_eq!(static_name("bandlimited_comb_3"), "WAV_BANDLIMITED_COMB_3");
    }
}
