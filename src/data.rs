use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 123;

/// Generates `len` uniformly random odd integers (each drawn from
/// 1..=1_000_000 then doubled plus one), so the "is even" query over the
/// result is always vacuously true and every benchmark run scans the full
/// sequence. Deterministic for a given seed.
pub fn generate_odd_values(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(1..=1_000_000) * 2 + 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_values_are_odd() {
        let values = generate_odd_values(1000, DEFAULT_SEED);
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|v| v % 2 == 1));
    }

    #[test]
    fn test_same_seed_same_data() {
        assert_eq!(generate_odd_values(256, 7), generate_odd_values(256, 7));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate_odd_values(256, 7), generate_odd_values(256, 8));
    }
}
