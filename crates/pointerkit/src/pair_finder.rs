//! Two-sum: find two elements of a sequence that add up to a target.
//!
//! All strategies report indices into the caller's original (unsorted)
//! slice and return `None` when no pair exists. Sums are computed in
//! `i128`, so extreme `i64` inputs never overflow.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::strategy::{Complexity, Strategy, strategy_name_impls};

/// Two distinct positions in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    pub fn new(first: usize, second: usize) -> Self {
        debug_assert_ne!(first, second, "an index pair needs two distinct positions");
        Self { first, second }
    }

    /// The pair with its indices in ascending order.
    #[must_use]
    pub fn ascending(self) -> Self {
        Self {
            first: self.first.min(self.second),
            second: self.first.max(self.second),
        }
    }

    /// Sum of the two referenced values.
    ///
    /// Panics if either index is out of bounds for `nums`.
    pub fn sum(self, nums: &[i64]) -> i128 {
        i128::from(nums[self.first]) + i128::from(nums[self.second])
    }
}

impl From<IndexPair> for [usize; 2] {
    fn from(pair: IndexPair) -> Self {
        [pair.first, pair.second]
    }
}

/// Contract shared by every two-sum strategy.
pub trait IndexPairFinder {
    fn find_pair(&self, nums: &[i64], target: i64) -> Option<IndexPair>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairStrategy {
    BruteForce,
    HashMap,
    TwoPointer,
    BinarySearch,
}

impl Strategy for PairStrategy {
    const PROBLEM: &'static str = "two-sum";
    const ALL: &'static [Self] = &[
        Self::BruteForce,
        Self::HashMap,
        Self::TwoPointer,
        Self::BinarySearch,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute-force",
            Self::HashMap => "hash-map",
            Self::TwoPointer => "two-pointer",
            Self::BinarySearch => "binary-search",
        }
    }

    fn complexity(self) -> Complexity {
        match self {
            Self::BruteForce => Complexity::new("O(n^2)", "O(1)"),
            Self::HashMap => Complexity::new("O(n)", "O(n)"),
            Self::TwoPointer | Self::BinarySearch => Complexity::new("O(n log n)", "O(n)"),
        }
    }
}

strategy_name_impls!(PairStrategy);

impl IndexPairFinder for PairStrategy {
    fn find_pair(&self, nums: &[i64], target: i64) -> Option<IndexPair> {
        match self {
            Self::BruteForce => brute_force(nums, target),
            Self::HashMap => hash_map(nums, target),
            Self::TwoPointer => two_pointer(nums, target),
            Self::BinarySearch => binary_search(nums, target),
        }
    }
}

/// Runs `strategy` on `nums`.
pub fn find(nums: &[i64], target: i64, strategy: PairStrategy) -> Option<IndexPair> {
    strategy.find_pair(nums, target)
}

/// Checks every `i < j` pair and returns the first match in scan order.
pub fn brute_force(nums: &[i64], target: i64) -> Option<IndexPair> {
    let target = i128::from(target);

    for (i, &a) in nums.iter().enumerate() {
        for (offset, &b) in nums[i + 1..].iter().enumerate() {
            if i128::from(a) + i128::from(b) == target {
                return Some(IndexPair::new(i, i + 1 + offset));
            }
        }
    }
    None
}

/// Single pass with a value -> last-seen-index map.
///
/// Returns `(earlier match, current)`.
pub fn hash_map(nums: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &value) in nums.iter().enumerate() {
        // A complement outside i64 can't be in the map.
        if let Some(&j) = target.checked_sub(value).and_then(|c| seen.get(&c)) {
            return Some(IndexPair::new(j, i));
        }
        seen.insert(value, i);
    }
    None
}

/// Sorts `(value, original index)` pairs and converges from both ends.
pub fn two_pointer(nums: &[i64], target: i64) -> Option<IndexPair> {
    let sorted = sorted_with_index(nums);
    if sorted.len() < 2 {
        return None;
    }

    let target = i128::from(target);
    let (mut left, mut right) = (0, sorted.len() - 1);

    while left < right {
        let sum = i128::from(sorted[left].0) + i128::from(sorted[right].0);
        match sum.cmp(&target) {
            Ordering::Equal => return Some(IndexPair::new(sorted[left].1, sorted[right].1)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Sorts `(value, original index)` pairs, then binary-searches the suffix
/// after each element for its complement.
pub fn binary_search(nums: &[i64], target: i64) -> Option<IndexPair> {
    let sorted = sorted_with_index(nums);
    let target = i128::from(target);

    for (i, &(value, original)) in sorted.iter().enumerate() {
        let complement = target - i128::from(value);
        let suffix = &sorted[i + 1..];

        if let Ok(pos) = suffix.binary_search_by(|&(v, _)| i128::from(v).cmp(&complement)) {
            return Some(IndexPair::new(original, suffix[pos].1));
        }
    }
    None
}

/// Values paired with their original positions, ordered by value then index.
fn sorted_with_index(nums: &[i64]) -> Vec<(i64, usize)> {
    let mut pairs: Vec<(i64, usize)> = nums.iter().copied().zip(0..).collect();
    pairs.sort_unstable();
    pairs
}
