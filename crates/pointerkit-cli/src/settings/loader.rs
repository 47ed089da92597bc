//! Configuration loader with multi-source merging

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use super::{ConfigError, PROJECT_CONFIG_FILE, PointerkitConfig};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    explicit_file: Option<PathBuf>,
    env_prefix: String,
    env_source: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Create a new config loader rooted at the current directory
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            explicit_file: None,
            env_prefix: "POINTERKIT".to_string(),
            env_source: None,
        }
    }

    /// Load this file on top of the project config. It must exist.
    #[must_use]
    pub fn with_file(mut self, path: Option<impl AsRef<Path>>) -> Self {
        self.explicit_file = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<PointerkitConfig, ConfigError> {
        let mut builder = config::Config::builder();

        // 1. Built-in defaults
        builder = builder.add_source(config::Config::try_from(&PointerkitConfig::default())?);

        // 2. Project config (pointerkit.toml)
        let project_file = self.project_dir.join(PROJECT_CONFIG_FILE);
        if project_file.exists() {
            tracing::debug!(path = %project_file.display(), "loading project config");
            builder = builder.add_source(
                config::File::from(project_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 3. Explicit --config file
        if let Some(path) = self.explicit_file {
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            tracing::debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(
                config::File::from(path)
                    .required(true)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Environment variables (POINTERKIT_OUTPUT__JSON=true)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(self.env_source),
        );

        let config: PointerkitConfig = builder.build()?.try_deserialize()?;

        // Fail early on bad strategy names rather than at first use.
        config.resolve()?;

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

// Test hooks: pin the project directory and environment.
#[cfg(test)]
impl ConfigLoader {
    /// Set the directory searched for pointerkit.toml
    #[must_use]
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Read environment overrides from `vars` instead of the process env.
    #[must_use]
    pub fn with_env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointerkit::{AreaStrategy, PairStrategy};
    use std::fs;
    use tempfile::tempdir;

    fn isolated(dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(dir)
            .with_env_source(HashMap::new())
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = isolated(temp_dir.path())
            .load()
            .expect("Failed to load config");

        assert_eq!(config, PointerkitConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            r#"
[defaults]
pair_strategy = "binary-search"

[output]
json = true
"#,
        )
        .expect("Failed to write config");

        let config = isolated(temp_dir.path())
            .load()
            .expect("Failed to load config");

        let defaults = config.resolve().unwrap();
        assert_eq!(defaults.pair, PairStrategy::BinarySearch);
        // Untouched keys keep their defaults.
        assert_eq!(defaults.area, AreaStrategy::TwoPointer);
        assert!(config.output.json);
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "[defaults]\npair_strategy = \"binary-search\"\n",
        )
        .expect("Failed to write project config");

        let explicit = temp_dir.path().join("other.toml");
        fs::write(&explicit, "[defaults]\npair_strategy = \"two-pointer\"\n")
            .expect("Failed to write explicit config");

        let config = isolated(temp_dir.path())
            .with_file(Some(&explicit))
            .load()
            .expect("Failed to load config");

        assert_eq!(config.resolve().unwrap().pair, PairStrategy::TwoPointer);
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.toml");

        let err = isolated(temp_dir.path())
            .with_file(Some(&missing))
            .load()
            .unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(path) if path == missing));
    }

    #[test]
    fn test_env_overrides_files() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "[output]\njson = false\n",
        )
        .expect("Failed to write config");

        let env = HashMap::from([
            ("POINTERKIT_OUTPUT__JSON".to_string(), "true".to_string()),
            (
                "POINTERKIT_DEFAULTS__AREA_STRATEGY".to_string(),
                "brute-force".to_string(),
            ),
        ]);

        let config = ConfigLoader::new()
            .with_project_dir(temp_dir.path())
            .with_env_source(env)
            .load()
            .expect("Failed to load config");

        assert!(config.output.json);
        assert_eq!(config.resolve().unwrap().area, AreaStrategy::BruteForce);
    }

    #[test]
    fn test_invalid_strategy_is_rejected_at_load() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "[defaults]\ncolor_strategy = \"bubble\"\n",
        )
        .expect("Failed to write config");

        let err = isolated(temp_dir.path()).load().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "defaults.color_strategy",
                ..
            }
        ));
    }
}
