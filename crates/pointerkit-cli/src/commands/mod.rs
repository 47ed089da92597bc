//! CLI command implementations.
//!
//! Every problem command builds a [`Report`] with a pure `report` function
//! and hands it to [`Output`] for printing, so the reports can be tested
//! without capturing stdout.

pub mod config;
pub mod demo;
pub mod longest_unique;
pub mod max_area;
pub mod sort_colors;
pub mod strategies;
pub mod two_sum;
pub mod version;

use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use pointerkit::{Strategy, ToolkitError};
use serde::Serialize;

/// `--strategy` argument: a single strategy or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<S> {
    One(S),
    All,
}

impl<S: Strategy> Selection<S> {
    pub fn strategies(self) -> Vec<S> {
        match self {
            Self::One(strategy) => vec![strategy],
            Self::All => S::ALL.to_vec(),
        }
    }
}

impl<S: Strategy> FromStr for Selection<S> {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::One)
        }
    }
}

/// The result of one strategy.
#[derive(Debug, Serialize)]
pub struct Run<R> {
    pub strategy: &'static str,
    pub result: R,
}

/// Everything one problem command produced.
#[derive(Debug, Serialize)]
pub struct Report<I, R> {
    pub problem: &'static str,
    pub input: I,
    pub runs: Vec<Run<R>>,
    /// Whether all runs agree on the part of the result that must be unique
    /// (the area, the length, ...). Trivially true for a single run.
    pub agree: bool,
}

/// Runs each strategy in turn, logging how long it took, and compares the
/// results by `key`.
pub fn run_strategies<S, R, K>(
    strategies: &[S],
    mut run: impl FnMut(S) -> R,
    key: impl Fn(&R) -> K,
) -> (Vec<Run<R>>, bool)
where
    S: Strategy,
    K: PartialEq,
{
    let runs: Vec<Run<R>> = strategies
        .iter()
        .map(|&strategy| {
            let started = Instant::now();
            let result = run(strategy);
            tracing::info!(
                problem = S::PROBLEM,
                strategy = strategy.name(),
                elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
                "strategy finished"
            );
            Run {
                strategy: strategy.name(),
                result,
            }
        })
        .collect();

    let agree = runs.windows(2).all(|w| key(&w[0].result) == key(&w[1].result));
    if !agree {
        tracing::warn!(problem = S::PROBLEM, "strategies disagree");
    }
    (runs, agree)
}

/// Where and how reports are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Prints a report: one JSON line, or a header plus one line per run.
    pub fn emit<I, R>(
        self,
        header: &str,
        report: &Report<I, R>,
        render: impl Fn(&R) -> String,
    ) -> Result<()>
    where
        I: Serialize,
        R: Serialize,
    {
        if self.json {
            println!("{}", serde_json::to_string(report)?);
            return Ok(());
        }

        println!("{header}");
        for run in &report.runs {
            println!("  {:<15} {}", run.strategy, render(&run.result));
        }
        if report.runs.len() > 1 {
            println!(
                "  strategies agree: {}",
                if report.agree { "yes" } else { "no" }
            );
        }
        Ok(())
    }
}

/// `[1, 2, 3]`-style rendering for text output.
pub fn list<T: std::fmt::Display>(items: &[T]) -> String {
    let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointerkit::{AreaStrategy, PairStrategy};

    #[test]
    fn selection_parses_all_and_single() {
        assert_eq!(
            "all".parse::<Selection<PairStrategy>>().unwrap(),
            Selection::All
        );
        assert_eq!(
            "hash-map".parse::<Selection<PairStrategy>>().unwrap(),
            Selection::One(PairStrategy::HashMap)
        );
        assert!("heap".parse::<Selection<PairStrategy>>().is_err());
    }

    #[test]
    fn selection_expands_to_every_strategy() {
        assert_eq!(
            Selection::<AreaStrategy>::All.strategies(),
            AreaStrategy::ALL.to_vec()
        );
    }

    #[test]
    fn disagreement_is_reported() {
        let (runs, agree) =
            run_strategies(AreaStrategy::ALL, |s| s == AreaStrategy::BruteForce, |r| *r);
        assert_eq!(runs.len(), 2);
        assert!(!agree);
    }

    #[test]
    fn list_formats_like_a_slice() {
        assert_eq!(list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(list::<u8>(&[]), "[]");
    }
}
