//! Container with most water: pick two lines that hold the most water.
//!
//! Lines `i < j` with heights `h[i]` and `h[j]` hold
//! `(j - i) * min(h[i], h[j])` units. Fewer than two lines hold nothing.

use serde::{Deserialize, Serialize};

use crate::strategy::{Complexity, Strategy, strategy_name_impls};

/// Two lines and the area between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub left: usize,
    pub right: usize,
    pub area: u64,
}

impl Container {
    /// The container formed by lines `left` and `right`, or `None` unless
    /// `left < right < heights.len()`.
    pub fn new(heights: &[u32], left: usize, right: usize) -> Option<Self> {
        (left < right && right < heights.len()).then(|| Self::between(heights, left, right))
    }

    /// Unchecked constructor for the finders, which only ever pass `left < right`.
    fn between(heights: &[u32], left: usize, right: usize) -> Self {
        debug_assert!(left < right, "container needs left < right");
        let width = (right - left) as u64;
        let height = u64::from(heights[left].min(heights[right]));
        Self {
            left,
            right,
            area: width * height,
        }
    }

    pub fn width(self) -> usize {
        self.right - self.left
    }
}

/// Contract shared by every max-area strategy.
pub trait ContainerFinder {
    fn find_container(&self, heights: &[u32]) -> Option<Container>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaStrategy {
    BruteForce,
    TwoPointer,
}

impl Strategy for AreaStrategy {
    const PROBLEM: &'static str = "max-area";
    const ALL: &'static [Self] = &[Self::BruteForce, Self::TwoPointer];

    fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute-force",
            Self::TwoPointer => "two-pointer",
        }
    }

    fn complexity(self) -> Complexity {
        match self {
            Self::BruteForce => Complexity::new("O(n^2)", "O(1)"),
            Self::TwoPointer => Complexity::new("O(n)", "O(1)"),
        }
    }
}

strategy_name_impls!(AreaStrategy);

impl ContainerFinder for AreaStrategy {
    fn find_container(&self, heights: &[u32]) -> Option<Container> {
        match self {
            Self::BruteForce => brute_force(heights),
            Self::TwoPointer => two_pointer(heights),
        }
    }
}

/// Runs `strategy` on `heights`. `None` for fewer than two lines.
pub fn find(heights: &[u32], strategy: AreaStrategy) -> Option<Container> {
    strategy.find_container(heights)
}

/// The best area, or 0 when there is no container.
pub fn max_area(heights: &[u32], strategy: AreaStrategy) -> u64 {
    find(heights, strategy).map_or(0, |c| c.area)
}

/// Evaluates every pair; the first pair reaching the maximum wins.
pub fn brute_force(heights: &[u32]) -> Option<Container> {
    let mut best: Option<Container> = None;

    for left in 0..heights.len() {
        for right in left + 1..heights.len() {
            let candidate = Container::between(heights, left, right);
            if best.is_none_or(|b| candidate.area > b.area) {
                best = Some(candidate);
            }
        }
    }
    best
}

/// Converges from both ends, always moving the shorter line inward.
///
/// Moving the taller line can only shrink the width while the shorter line
/// still caps the height, so it never leads to a larger area. On equal
/// heights the right pointer moves.
pub fn two_pointer(heights: &[u32]) -> Option<Container> {
    if heights.len() < 2 {
        return None;
    }

    let (mut left, mut right) = (0, heights.len() - 1);
    let mut best = Container::between(heights, left, right);

    while left < right {
        let current = Container::between(heights, left, right);
        if current.area > best.area {
            best = current;
        }

        if heights[left] < heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }
    Some(best)
}
