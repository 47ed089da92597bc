//! Demo command: every strategy on the textbook examples.

use anyhow::Result;
use pointerkit::parse_colors;

use super::{Output, Selection, longest_unique, max_area, sort_colors, two_sum};

pub fn run(output: Output) -> Result<()> {
    two_sum::emit(&two_sum::report(vec![2, 7, 11, 15], 9, Selection::All), output)?;

    let colors = parse_colors(&[2, 0, 2, 1, 1, 0])?;
    sort_colors::emit(&sort_colors::report(colors, Selection::All), output)?;

    for heights in [vec![1, 8, 6, 2, 5, 4, 8, 3, 7], vec![1, 1]] {
        max_area::emit(&max_area::report(heights, Selection::All), output)?;
    }

    longest_unique::emit(
        &longest_unique::report("abcabcbb".to_string(), Selection::All),
        output,
    )
}
