//! The strategy abstraction shared by every problem.
//!
//! Each problem exposes a small `Copy` enum naming its algorithm variants.
//! The enum implements [`Strategy`] so drivers (the CLI, the benches, the
//! cross-check tests) can enumerate and select variants generically, and a
//! problem-specific contract trait that actually runs the algorithm.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, ToolkitError};

/// Documented asymptotic cost of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

impl Complexity {
    pub const fn new(time: &'static str, space: &'static str) -> Self {
        Self { time, space }
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "time {}, space {}", self.time, self.space)
    }
}

/// A selectable algorithm variant for one problem.
pub trait Strategy:
    Copy + Eq + Debug + Display + FromStr<Err = ToolkitError> + Send + Sync + 'static
{
    /// Human-readable problem name, used in error messages and listings.
    const PROBLEM: &'static str;

    /// Every variant, baseline first.
    const ALL: &'static [Self];

    /// Stable kebab-case name. `Display` and `FromStr` round-trip through it.
    fn name(self) -> &'static str;

    fn complexity(self) -> Complexity;
}

/// Shared `FromStr` body: matches `name` against [`Strategy::name`] of
/// every variant.
pub(crate) fn parse_strategy<S: Strategy>(name: &str) -> Result<S> {
    let wanted = name.trim();
    S::ALL
        .iter()
        .copied()
        .find(|s| s.name().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ToolkitError::UnknownStrategy {
            problem: S::PROBLEM,
            name: wanted.to_string(),
        })
}

/// Implements `Display` and `FromStr` for a strategy enum in terms of
/// [`Strategy::name`].
macro_rules! strategy_name_impls {
    ($ty:ty) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::strategy::Strategy::name(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::ToolkitError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::strategy::parse_strategy(s)
            }
        }
    };
}

pub(crate) use strategy_name_impls;

/// Parses a comma- or whitespace-separated list of integers.
///
/// Empty tokens are skipped, so `"1, 2,,3"` and `" 1 2 3 "` both give
/// `[1, 2, 3]`. Surrounding brackets are tolerated so `"[2,7,11,15]"` works.
pub fn parse_sequence<T: FromStr>(input: &str) -> Result<Vec<T>> {
    input
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<T>().map_err(|_| ToolkitError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect()
}
