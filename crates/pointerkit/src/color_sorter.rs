//! Sort colors: order a sequence of three category labels in place.
//!
//! The labels are modelled as [`Color`] so an out-of-range label is
//! rejected when the sequence is built ([`parse_colors`]), not in the
//! middle of a sort.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, ToolkitError};
use crate::strategy::{Complexity, Strategy, strategy_name_impls};

/// One of the three category labels, ordered by label value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Color {
    Red = 0,
    White = 1,
    Blue = 2,
}

impl Color {
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Self::Red),
            1 => Some(Self::White),
            2 => Some(Self::Blue),
            _ => None,
        }
    }

    pub fn label(self) -> u8 {
        self as u8
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.label()
    }
}

/// A lone label has no position in a sequence and reports index 0.
impl TryFrom<i64> for Color {
    type Error = ToolkitError;

    fn try_from(value: i64) -> Result<Self> {
        Self::from_label(value).ok_or(ToolkitError::InvalidColor { index: 0, value })
    }
}

impl FromStr for Color {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let value: i64 = token.parse().map_err(|_| ToolkitError::InvalidNumber {
            token: token.to_string(),
        })?;
        Self::try_from(value)
    }
}

/// Converts raw labels into colors, failing on the first label outside `0..=2`.
pub fn parse_colors(labels: &[i64]) -> Result<Vec<Color>> {
    labels
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            Color::try_from(value).map_err(|_| ToolkitError::InvalidColor { index, value })
        })
        .collect()
}

/// Number of occurrences of each color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColorCounts {
    pub red: usize,
    pub white: usize,
    pub blue: usize,
}

impl ColorCounts {
    pub fn tally(colors: &[Color]) -> Self {
        let mut counts = Self::default();
        for color in colors {
            match color {
                Color::Red => counts.red += 1,
                Color::White => counts.white += 1,
                Color::Blue => counts.blue += 1,
            }
        }
        counts
    }

    pub fn total(self) -> usize {
        self.red + self.white + self.blue
    }
}

/// Contract shared by every sort-colors strategy.
pub trait ColorPartitioner {
    /// Reorders `colors` in place into non-decreasing label order.
    fn partition(&self, colors: &mut [Color]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorStrategy {
    Counting,
    DutchFlag,
}

impl Strategy for ColorStrategy {
    const PROBLEM: &'static str = "sort-colors";
    const ALL: &'static [Self] = &[Self::Counting, Self::DutchFlag];

    fn name(self) -> &'static str {
        match self {
            Self::Counting => "counting",
            Self::DutchFlag => "dutch-flag",
        }
    }

    fn complexity(self) -> Complexity {
        // Counting makes two passes, the flag partition one.
        Complexity::new("O(n)", "O(1)")
    }
}

strategy_name_impls!(ColorStrategy);

impl ColorPartitioner for ColorStrategy {
    fn partition(&self, colors: &mut [Color]) {
        match self {
            Self::Counting => counting(colors),
            Self::DutchFlag => dutch_flag(colors),
        }
    }
}

/// Runs `strategy` on `colors`.
pub fn sort(colors: &mut [Color], strategy: ColorStrategy) {
    strategy.partition(colors);
}

/// Two passes: tally each label, then overwrite the slice region by region.
pub fn counting(colors: &mut [Color]) {
    let counts = ColorCounts::tally(colors);

    let (reds, rest) = colors.split_at_mut(counts.red);
    let (whites, blues) = rest.split_at_mut(counts.white);
    reds.fill(Color::Red);
    whites.fill(Color::White);
    blues.fill(Color::Blue);
}

/// Single-pass three-way partition.
///
/// `[0, low)` holds reds, `[low, mid)` whites, `[high, len)` blues and
/// `[mid, high)` is still unexamined. `high` is exclusive here, so an
/// empty slice needs no special case.
pub fn dutch_flag(colors: &mut [Color]) {
    let (mut low, mut mid, mut high) = (0, 0, colors.len());

    while mid < high {
        match colors[mid] {
            Color::Red => {
                colors.swap(low, mid);
                low += 1;
                mid += 1;
            }
            Color::White => mid += 1,
            Color::Blue => {
                // The value swapped in from `high` is unexamined: keep `mid`.
                high -= 1;
                colors.swap(mid, high);
            }
        }
    }

    debug_assert!(colors.is_sorted());
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn colors(labels: &[i64]) -> Vec<Color> {
        parse_colors(labels).unwrap()
    }

    #[test_case(ColorStrategy::Counting; "counting")]
    #[test_case(ColorStrategy::DutchFlag; "dutch flag")]
    fn classic_example(strategy: ColorStrategy) {
        let mut input = colors(&[2, 0, 2, 1, 1, 0]);
        sort(&mut input, strategy);
        assert_eq!(input, colors(&[0, 0, 1, 1, 2, 2]));
    }

    #[test_case(ColorStrategy::Counting, &[] => Vec::<u8>::new(); "counting empty")]
    #[test_case(ColorStrategy::DutchFlag, &[] => Vec::<u8>::new(); "flag empty")]
    #[test_case(ColorStrategy::Counting, &[2] => vec![2]; "counting single")]
    #[test_case(ColorStrategy::DutchFlag, &[2] => vec![2]; "flag single blue")]
    #[test_case(ColorStrategy::DutchFlag, &[0] => vec![0]; "flag single red")]
    #[test_case(ColorStrategy::Counting, &[2, 0] => vec![0, 2]; "counting pair")]
    #[test_case(ColorStrategy::DutchFlag, &[2, 0] => vec![0, 2]; "flag pair")]
    #[test_case(ColorStrategy::DutchFlag, &[2, 2, 2] => vec![2, 2, 2]; "flag all blue")]
    #[test_case(ColorStrategy::DutchFlag, &[1, 0, 1] => vec![0, 1, 1]; "flag no blue")]
    fn boundaries(strategy: ColorStrategy, labels: &[i64]) -> Vec<u8> {
        let mut input = colors(labels);
        sort(&mut input, strategy);
        input.into_iter().map(Color::label).collect()
    }

    #[test]
    fn rejects_out_of_range_labels() {
        assert_eq!(
            parse_colors(&[0, 1, 3, 2]),
            Err(ToolkitError::InvalidColor { index: 2, value: 3 })
        );
        assert_eq!(
            parse_colors(&[-1]),
            Err(ToolkitError::InvalidColor { index: 0, value: -1 })
        );
    }

    #[test_case("0" => Ok(Color::Red); "red")]
    #[test_case(" 2 " => Ok(Color::Blue); "blue with padding")]
    #[test_case("3" => Err(ToolkitError::InvalidColor { index: 0, value: 3 }); "above range")]
    #[test_case("-1" => Err(ToolkitError::InvalidColor { index: 0, value: -1 }); "negative")]
    #[test_case("blue" => Err(ToolkitError::InvalidNumber { token: "blue".to_string() }); "not a number")]
    fn parses_single_label(input: &str) -> Result<Color> {
        input.parse()
    }

    #[test]
    fn try_from_matches_label() {
        for color in [Color::Red, Color::White, Color::Blue] {
            assert_eq!(Color::try_from(i64::from(color.label())), Ok(color));
        }
        assert!(Color::try_from(i64::MAX).is_err());
    }

    #[test]
    fn tally_counts_each_label() {
        let counts = ColorCounts::tally(&colors(&[2, 0, 2, 1, 1, 0, 2]));
        assert_eq!(
            counts,
            ColorCounts {
                red: 2,
                white: 2,
                blue: 3
            }
        );
        assert_eq!(counts.total(), 7);
    }

    #[test]
    fn colors_serialize_as_labels() {
        let json = serde_json::to_string(&colors(&[0, 1, 2])).unwrap();
        assert_eq!(json, "[0,1,2]");
    }
}
