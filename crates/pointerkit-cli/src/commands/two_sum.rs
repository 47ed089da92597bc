//! Two-sum command implementation.

use anyhow::{Context, Result, bail};
use pointerkit::pair_finder::{self, IndexPair, PairStrategy};
use pointerkit::parse_sequence;
use serde::Serialize;

use super::{Output, Report, Selection, list, run_strategies};

#[derive(Debug, Serialize)]
pub struct TwoSumInput {
    pub nums: Vec<i64>,
    pub target: i64,
}

pub fn report(
    nums: Vec<i64>,
    target: i64,
    selection: Selection<PairStrategy>,
) -> Report<TwoSumInput, Option<IndexPair>> {
    // Pairs may legitimately differ between strategies; only existence must match.
    let (runs, agree) = run_strategies(
        &selection.strategies(),
        |strategy| pair_finder::find(&nums, target, strategy),
        Option::is_some,
    );

    Report {
        problem: "two-sum",
        input: TwoSumInput { nums, target },
        runs,
        agree,
    }
}

pub fn render(pair: Option<&IndexPair>) -> String {
    match pair {
        Some(pair) => format!("[{}, {}]", pair.first, pair.second),
        None => "no pair found".to_string(),
    }
}

pub fn emit(report: &Report<TwoSumInput, Option<IndexPair>>, output: Output) -> Result<()> {
    let header = format!(
        "two-sum {} target {}",
        list(&report.input.nums),
        report.input.target
    );
    output.emit(&header, report, |pair| render(pair.as_ref()))
}

/// Finds two numbers summing to `target`. Fails when there is no such pair.
pub fn run(nums: &str, target: i64, selection: Selection<PairStrategy>, output: Output) -> Result<()> {
    let nums: Vec<i64> = parse_sequence(nums).context("failed to parse numbers")?;
    tracing::debug!(len = nums.len(), target, "parsed two-sum input");

    let report = report(nums, target, selection);
    emit(&report, output)?;

    if report.runs.iter().all(|run| run.result.is_none()) {
        bail!("no two numbers sum to {target}");
    }
    Ok(())
}
