//! Sample data generation for the demo command.
//!
//! Generated data mixes sections with different symbol distributions so the
//! code tree has an interesting shape:
//! - Skewed text (a few letters dominate, like natural language)
//! - Runs of a single byte (one very short code)
//! - Uniform random bytes (codes close to 8 bits)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letters roughly in English frequency order; earlier ones are picked more.
const SKEWED_ALPHABET: &[u8] = b"etaoin shrdlucmfwypvbgkjqxz.,\n";

/// Generate `size_bytes` of sample data, reproducible from `seed`.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(rng.gen_range(256..=4096));

        match rng.gen_range(0..10) {
            // 60% skewed text
            0..=5 => {
                for _ in 0..section {
                    data.push(skewed_letter(&mut rng));
                }
            }

            // 20% runs
            6..=7 => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(section));
            }

            // 20% noise
            _ => {
                for _ in 0..section {
                    data.push(rng.gen());
                }
            }
        }
    }

    data
}

/// Pick from the alphabet with a geometric-like bias toward the front.
fn skewed_letter(rng: &mut ChaCha8Rng) -> u8 {
    let a = rng.gen_range(0..SKEWED_ALPHABET.len());
    let b = rng.gen_range(0..SKEWED_ALPHABET.len());
    SKEWED_ALPHABET[a.min(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size() {
        for size in [0, 1, 100, 1000, 10000, 100000] {
            assert_eq!(generate_sample_data(999, size).len(), size);
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_sample_data(12345, 5000), generate_sample_data(12345, 5000));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_sample_data(1, 5000), generate_sample_data(2, 5000));
    }

    #[test]
    fn test_compresses() {
        let data = generate_sample_data(7, 64 * 1024);
        let artifact = huffpack_core::compress_bytes(&data).unwrap();
        assert!(artifact.len() < data.len());
    }
}
