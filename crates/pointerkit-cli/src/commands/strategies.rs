//! Strategies command: lists every algorithm variant and its cost.

use anyhow::Result;
use pointerkit::{AreaStrategy, ColorStrategy, Complexity, PairStrategy, Strategy, SubstringStrategy};
use serde::Serialize;

use super::Output;

#[derive(Debug, Serialize)]
pub struct StrategyInfo {
    pub problem: &'static str,
    pub strategy: &'static str,
    pub complexity: Complexity,
}

fn describe<S: Strategy>() -> impl Iterator<Item = StrategyInfo> {
    S::ALL.iter().map(|&s| StrategyInfo {
        problem: S::PROBLEM,
        strategy: s.name(),
        complexity: s.complexity(),
    })
}

pub fn catalog() -> Vec<StrategyInfo> {
    describe::<PairStrategy>()
        .chain(describe::<ColorStrategy>())
        .chain(describe::<AreaStrategy>())
        .chain(describe::<SubstringStrategy>())
        .collect()
}

pub fn run(output: Output) -> Result<()> {
    let catalog = catalog();

    if output.json {
        println!("{}", serde_json::to_string(&catalog)?);
        return Ok(());
    }

    println!("{:<16} {:<16} {:<12} space", "problem", "strategy", "time");
    for info in &catalog {
        println!(
            "{:<16} {:<16} {:<12} {}",
            info.problem, info.strategy, info.complexity.time, info.complexity.space
        );
    }
    Ok(())
}
