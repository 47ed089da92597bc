//! Sort-colors command implementation.

use anyhow::{Context, Result};
use pointerkit::color_sorter::{self, Color, ColorStrategy};
use pointerkit::{parse_colors, parse_sequence};

use super::{Output, Report, Selection, list, run_strategies};

/// Sorts a copy of `colors` with each selected strategy.
pub fn report(colors: Vec<Color>, selection: Selection<ColorStrategy>) -> Report<Vec<Color>, Vec<Color>> {
    let (runs, agree) = run_strategies(
        &selection.strategies(),
        |strategy| {
            let mut sorted = colors.clone();
            color_sorter::sort(&mut sorted, strategy);
            sorted
        },
        Vec::clone,
    );

    Report {
        problem: "sort-colors",
        input: colors,
        runs,
        agree,
    }
}

pub fn render(colors: &[Color]) -> String {
    let labels: Vec<u8> = colors.iter().map(|c| c.label()).collect();
    list(&labels)
}

pub fn emit(report: &Report<Vec<Color>, Vec<Color>>, output: Output) -> Result<()> {
    let header = format!("sort-colors {}", render(&report.input));
    output.emit(&header, report, |sorted: &Vec<Color>| render(sorted))
}

pub fn run(labels: &str, selection: Selection<ColorStrategy>, output: Output) -> Result<()> {
    let labels: Vec<i64> = parse_sequence(labels).context("failed to parse color labels")?;
    let colors = parse_colors(&labels)?;
    tracing::debug!(len = colors.len(), "parsed sort-colors input");

    emit(&report(colors, selection), output)
}
