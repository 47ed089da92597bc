//! Max-area command implementation.

use anyhow::{Context, Result};
use pointerkit::max_area::{self, AreaStrategy, Container};
use pointerkit::parse_sequence;

use super::{Output, Report, Selection, list, run_strategies};

pub fn report(heights: Vec<u32>, selection: Selection<AreaStrategy>) -> Report<Vec<u32>, Option<Container>> {
    // Tied pairs are fine; the area must match.
    let (runs, agree) = run_strategies(
        &selection.strategies(),
        |strategy| max_area::find(&heights, strategy),
        |container| container.map_or(0, |c| c.area),
    );

    Report {
        problem: "max-area",
        input: heights,
        runs,
        agree,
    }
}

pub fn render(container: Option<&Container>) -> String {
    match container {
        Some(c) => format!("area {} between lines {} and {}", c.area, c.left, c.right),
        None => "area 0 (fewer than two lines)".to_string(),
    }
}

pub fn emit(report: &Report<Vec<u32>, Option<Container>>, output: Output) -> Result<()> {
    let header = format!("max-area {}", list(&report.input));
    output.emit(&header, report, |container| render(container.as_ref()))
}

pub fn run(heights: &str, selection: Selection<AreaStrategy>, output: Output) -> Result<()> {
    let heights: Vec<u32> =
        parse_sequence(heights).context("failed to parse heights (non-negative integers)")?;
    tracing::debug!(len = heights.len(), "parsed max-area input");

    emit(&report(heights, selection), output)
}
