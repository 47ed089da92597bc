//! Longest substring without repeating characters.
//!
//! Strings are processed as sequences of `char`, so offsets and lengths
//! count Unicode scalar values, not bytes. Every strategy reports the
//! earliest of the longest runs, which makes their results identical rather
//! than just equally long.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::strategy::{Complexity, Strategy, strategy_name_impls};

/// A run of characters: `len` chars starting at char offset `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringSpan {
    pub start: usize,
    pub len: usize,
}

impl SubstringSpan {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The part of `s` covered by this span.
    ///
    /// Offsets past the end of `s` are clamped.
    pub fn slice(self, s: &str) -> &str {
        let byte_at = |chars: usize| s.char_indices().nth(chars).map_or(s.len(), |(b, _)| b);
        &s[byte_at(self.start)..byte_at(self.start + self.len)]
    }
}

/// Contract shared by every longest-unique-substring strategy.
pub trait UniqueRunFinder {
    fn find_run(&self, s: &str) -> SubstringSpan;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstringStrategy {
    BruteForce,
    ExpandingSet,
    SlidingWindow,
}

impl Strategy for SubstringStrategy {
    const PROBLEM: &'static str = "longest-unique";
    const ALL: &'static [Self] = &[Self::BruteForce, Self::ExpandingSet, Self::SlidingWindow];

    fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute-force",
            Self::ExpandingSet => "expanding-set",
            Self::SlidingWindow => "sliding-window",
        }
    }

    fn complexity(self) -> Complexity {
        match self {
            Self::BruteForce => Complexity::new("O(n^3)", "O(k)"),
            Self::ExpandingSet => Complexity::new("O(n^2)", "O(k)"),
            Self::SlidingWindow => Complexity::new("O(n)", "O(k)"),
        }
    }
}

strategy_name_impls!(SubstringStrategy);

impl UniqueRunFinder for SubstringStrategy {
    fn find_run(&self, s: &str) -> SubstringSpan {
        match self {
            Self::BruteForce => brute_force(s),
            Self::ExpandingSet => expanding_set(s),
            Self::SlidingWindow => sliding_window(s),
        }
    }
}

/// Runs `strategy` on `s`.
pub fn find(s: &str, strategy: SubstringStrategy) -> SubstringSpan {
    strategy.find_run(s)
}

/// Length of the longest run of distinct characters; 0 for `""`.
pub fn longest_unique_len(s: &str, strategy: SubstringStrategy) -> usize {
    find(s, strategy).len
}

/// Checks every substring: it is unique when its character set is as large
/// as the substring itself.
pub fn brute_force(s: &str) -> SubstringSpan {
    let chars: Vec<char> = s.chars().collect();
    let mut best = SubstringSpan::default();

    for start in 0..chars.len() {
        for end in start..chars.len() {
            let window = &chars[start..=end];
            let distinct: HashSet<char> = window.iter().copied().collect();
            if distinct.len() == window.len() && window.len() > best.len {
                best = SubstringSpan::new(start, window.len());
            }
        }
    }
    best
}

/// From each start, grows a set of seen characters until the first repeat.
pub fn expanding_set(s: &str) -> SubstringSpan {
    let chars: Vec<char> = s.chars().collect();
    let mut best = SubstringSpan::default();
    let mut seen = HashSet::new();

    for start in 0..chars.len() {
        seen.clear();
        for (offset, &c) in chars[start..].iter().enumerate() {
            if !seen.insert(c) {
                break;
            }
            if offset + 1 > best.len {
                best = SubstringSpan::new(start, offset + 1);
            }
        }
    }
    best
}

/// Slides a window whose left edge jumps past the previous occurrence of a
/// repeated character.
pub fn sliding_window(s: &str) -> SubstringSpan {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut best = SubstringSpan::default();
    let mut left = 0;

    for (right, c) in s.chars().enumerate() {
        // Occurrences before `left` are already outside the window.
        if let Some(&prev) = last_seen.get(&c).filter(|&&prev| prev >= left) {
            left = prev + 1;
        }
        last_seen.insert(c, right);

        let len = right - left + 1;
        if len > best.len {
            best = SubstringSpan::new(left, len);
        }
    }
    best
}
