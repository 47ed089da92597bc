//! # pointerkit-bench: strategy comparison benchmarks
//!
//! Seeded input generators shared by the criterion benches, so every run
//! measures the strategies on exactly the same data.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p pointerkit-bench
//!
//! # Only the two-sum group
//! cargo bench -p pointerkit-bench -- two_sum
//!
//! # Save baseline for comparison
//! cargo bench -p pointerkit-bench -- --save-baseline main
//! ```

// Generators index with usize and produce i64 values
#![allow(clippy::cast_possible_wrap)]

use pointerkit::Color;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Input sizes used by every benchmark group.
pub const SIZES: [usize; 4] = [16, 128, 1024, 8192];

/// Largest input the cubic and quadratic baselines are run on.
pub const BRUTE_FORCE_LIMIT: usize = 1024;

/// Distinct random values with exactly one pair summing to the returned
/// target, placed at random positions.
///
/// Every value but the planted 1 is even and the target is odd, so a match
/// needs the 1, and its partner `target - 1` appears only once.
pub fn numbers_with_pair(len: usize, seed: u64) -> (Vec<i64>, i64) {
    assert!(len >= 2, "need at least two numbers to plant a pair");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut nums: Vec<i64> = (0..len as i64).map(|i| i * 2).collect();
    nums.shuffle(&mut rng);

    let i = rng.gen_range(0..len);
    let mut j = rng.gen_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    let target = 2 * len as i64 + 1;
    nums[i] = 1;
    nums[j] = target - 1;

    (nums, target)
}

pub fn colors(len: usize, seed: u64) -> Vec<Color> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| match rng.gen_range(0..3) {
            0 => Color::Red,
            1 => Color::White,
            _ => Color::Blue,
        })
        .collect()
}

pub fn heights(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..10_000)).collect()
}

/// Random text over the first `alphabet` lowercase letters.
pub fn text(len: usize, alphabet: u8, seed: u64) -> String {
    assert!((1..=26).contains(&alphabet), "alphabet must be 1..=26 letters");
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..alphabet)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointerkit::pair_finder::{self, IndexPair};

    #[test]
    fn planted_pair_is_the_only_solution() {
        let (nums, target) = numbers_with_pair(64, 7);
        let pair = pair_finder::brute_force(&nums, target).unwrap();

        assert_eq!(pair.sum(&nums), i128::from(target));
        let odd = nums.iter().filter(|&&n| n % 2 != 0).count();
        assert_eq!(odd, 1);
        assert_eq!(
            pair_finder::hash_map(&nums, target).map(IndexPair::ascending),
            Some(pair.ascending())
        );
    }

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(numbers_with_pair(32, 1), numbers_with_pair(32, 1));
        assert_eq!(colors(32, 1), colors(32, 1));
        assert_eq!(heights(32, 1), heights(32, 1));
        assert_eq!(text(32, 4, 1), text(32, 4, 1));
    }

    #[test]
    fn text_respects_alphabet() {
        let s = text(200, 3, 9);
        assert_eq!(s.len(), 200);
        assert!(s.chars().all(|c| ('a'..='c').contains(&c)));
    }
}
