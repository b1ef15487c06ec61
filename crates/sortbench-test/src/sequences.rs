//! Reference input sequences.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `[1, 2, ..., n]`
pub fn one_to(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

/// `[n, n-1, ..., 1]`
pub fn n_down_to_one(n: usize) -> Vec<i64> {
    (1..=n as i64).rev().collect()
}

/// A short input with repeated keys.
pub fn with_duplicates() -> Vec<i64> {
    vec![3, 1, 3, 2, 0, 3, 1]
}

/// `len` copies of `value`.
pub fn all_equal(len: usize, value: i64) -> Vec<i64> {
    vec![value; len]
}

/// `n` draws from `[0, n-1]` using a fixed seed.
pub fn seeded_random(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let upper = n.max(1) as i64;
    (0..n).map(|_| rng.random_range(0..upper)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sequences() {
        assert_eq!(one_to(3), vec![1, 2, 3]);
        assert_eq!(n_down_to_one(3), vec![3, 2, 1]);
        assert!(one_to(0).is_empty());
    }

    #[test]
    fn test_seeded_random_is_stable() {
        assert_eq!(seeded_random(20, 9), seeded_random(20, 9));
        assert!(seeded_random(20, 9).iter().all(|&v| (0..20).contains(&v)));
    }
}
