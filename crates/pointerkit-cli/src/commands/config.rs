//! Configuration commands.

use anyhow::{Result, bail};

use crate::settings::PointerkitConfig;

/// Show the effective configuration.
pub fn show(config: &PointerkitConfig, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(config)?),
        "toml" => print!("{}", toml::to_string_pretty(config)?),
        "text" => {
            let defaults = config.resolve()?;
            println!("Default strategies:");
            println!("  two-sum:        {}", defaults.pair);
            println!("  sort-colors:    {}", defaults.color);
            println!("  max-area:       {}", defaults.area);
            println!("  longest-unique: {}", defaults.substring);
            println!();
            println!("Output:");
            println!("  JSON: {}", config.output.json);
        }
        other => bail!("unknown format '{other}' (expected text, toml or json)"),
    }
    Ok(())
}
