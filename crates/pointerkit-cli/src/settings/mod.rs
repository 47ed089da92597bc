//! Configuration for the CLI driver
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (`POINTERKIT_*`, `__` between sections)
//! 3. An explicit `--config` file
//! 4. pointerkit.toml in the working directory
//! 5. Built-in defaults (lowest precedence)

use pointerkit::{AreaStrategy, ColorStrategy, PairStrategy, Strategy, SubstringStrategy};
use serde::{Deserialize, Serialize};

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::ConfigLoader;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "pointerkit.toml";

/// Main pointerkit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerkitConfig {
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

/// Strategy used by each subcommand when `--strategy` is not given.
///
/// Stored as names so the file stays readable; [`PointerkitConfig::resolve`]
/// turns them into typed strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub pair_strategy: String,
    pub color_strategy: String,
    pub area_strategy: String,
    pub substring_strategy: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            pair_strategy: PairStrategy::HashMap.name().to_string(),
            color_strategy: ColorStrategy::DutchFlag.name().to_string(),
            area_strategy: AreaStrategy::TwoPointer.name().to_string(),
            substring_strategy: SubstringStrategy::SlidingWindow.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
}

/// Typed view of [`DefaultsConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub pair: PairStrategy,
    pub color: ColorStrategy,
    pub area: AreaStrategy,
    pub substring: SubstringStrategy,
}

impl PointerkitConfig {
    /// Parses every strategy name, reporting the first invalid key.
    pub fn resolve(&self) -> Result<Defaults, ConfigError> {
        let d = &self.defaults;
        Ok(Defaults {
            pair: parse_key("defaults.pair_strategy", &d.pair_strategy)?,
            color: parse_key("defaults.color_strategy", &d.color_strategy)?,
            area: parse_key("defaults.area_strategy", &d.area_strategy)?,
            substring: parse_key("defaults.substring_strategy", &d.substring_strategy)?,
        })
    }
}

fn parse_key<S: Strategy>(key: &'static str, value: &str) -> Result<S, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::Invalid { key, source })
}
