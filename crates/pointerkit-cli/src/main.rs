//! pointerkit CLI.
//!
//! Runs the two-pointer puzzle strategies on input from the command line.
//!
//! # Quick Start
//!
//! ```bash
//! # Every strategy on the textbook examples
//! pointerkit demo
//!
//! # Two-sum with a specific strategy
//! pointerkit two-sum 2,7,11,15 --target 9 --strategy binary-search
//!
//! # Compare all strategies, as JSON
//! pointerkit --json max-area 1,8,6,2,5,4,8,3,7 --strategy all
//! ```

mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pointerkit::{AreaStrategy, ColorStrategy, PairStrategy, SubstringStrategy};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use commands::{Output, Selection};
use settings::ConfigLoader;

/// pointerkit - classic two-pointer and hashing puzzles, several ways each.
#[derive(Parser)]
#[command(name = "pointerkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file to load on top of ./pointerkit.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print one JSON object per report instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// List every strategy with its time and space complexity.
    Strategies,

    /// Run every strategy on the textbook examples.
    Demo,

    /// Find two numbers that add up to a target.
    TwoSum {
        /// Comma- or space-separated integers, e.g. 2,7,11,15.
        #[arg(allow_hyphen_values = true)]
        nums: String,

        /// Target sum.
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,

        /// brute-force, hash-map, two-pointer, binary-search or all.
        #[arg(short, long)]
        strategy: Option<Selection<PairStrategy>>,
    },

    /// Sort a sequence of 0/1/2 color labels.
    SortColors {
        /// Comma- or space-separated labels, e.g. 2,0,2,1,1,0.
        #[arg(allow_hyphen_values = true)]
        labels: String,

        /// counting, dutch-flag or all.
        #[arg(short, long)]
        strategy: Option<Selection<ColorStrategy>>,
    },

    /// Find the two lines that hold the most water.
    MaxArea {
        /// Comma- or space-separated non-negative heights.
        #[arg(allow_hyphen_values = true)]
        heights: String,

        /// brute-force, two-pointer or all.
        #[arg(short, long)]
        strategy: Option<Selection<AreaStrategy>>,
    },

    /// Find the longest substring without repeating characters.
    LongestUnique {
        /// Input text.
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// brute-force, expanding-set, sliding-window or all.
        #[arg(short, long)]
        strategy: Option<Selection<SubstringStrategy>>,
    },

    /// Show the effective configuration.
    Config {
        /// Output format (text, toml, json).
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging. Reports go to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ConfigLoader::new()
        .with_file(cli.config.as_ref())
        .load()
        .context("failed to load configuration")?;
    let defaults = config.resolve()?;
    tracing::debug!(?defaults, json = config.output.json, "configuration resolved");

    let output = Output {
        json: cli.json || config.output.json,
    };

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Strategies => commands::strategies::run(output),
        Commands::Demo => commands::demo::run(output),
        Commands::TwoSum {
            nums,
            target,
            strategy,
        } => commands::two_sum::run(
            &nums,
            target,
            strategy.unwrap_or(Selection::One(defaults.pair)),
            output,
        ),
        Commands::SortColors { labels, strategy } => commands::sort_colors::run(
            &labels,
            strategy.unwrap_or(Selection::One(defaults.color)),
            output,
        ),
        Commands::MaxArea { heights, strategy } => commands::max_area::run(
            &heights,
            strategy.unwrap_or(Selection::One(defaults.area)),
            output,
        ),
        Commands::LongestUnique { text, strategy } => commands::longest_unique::run(
            &text,
            strategy.unwrap_or(Selection::One(defaults.substring)),
            output,
        ),
        Commands::Config { format } => commands::config::show(&config, &format),
    }
}
