//! Longest-unique-substring command implementation.

use anyhow::Result;
use pointerkit::unique_substring::{self, SubstringSpan, SubstringStrategy};

use super::{Output, Report, Selection, run_strategies};

pub fn report(text: String, selection: Selection<SubstringStrategy>) -> Report<String, SubstringSpan> {
    let (runs, agree) = run_strategies(
        &selection.strategies(),
        |strategy| unique_substring::find(&text, strategy),
        |span| *span,
    );

    Report {
        problem: "longest-unique",
        input: text,
        runs,
        agree,
    }
}

pub fn render(text: &str, span: SubstringSpan) -> String {
    if span.is_empty() {
        return "length 0".to_string();
    }
    format!(
        "length {} (\"{}\" at {})",
        span.len,
        span.slice(text),
        span.start
    )
}

pub fn emit(report: &Report<String, SubstringSpan>, output: Output) -> Result<()> {
    let header = format!("longest-unique {:?}", report.input);
    output.emit(&header, report, |span| render(&report.input, *span))
}

pub fn run(text: &str, selection: Selection<SubstringStrategy>, output: Output) -> Result<()> {
    tracing::debug!(chars = text.chars().count(), "parsed longest-unique input");
    emit(&report(text.to_string(), selection), output)
}
