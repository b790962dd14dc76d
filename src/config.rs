//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Environment variables
//! 2. `.sql-generator.toml` in current directory
//! 3. `~/.config/sql-generator/config.toml`
//! 4. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [generator]
//! top_limit = 5          # LIMIT for "top"/"highest" questions without a number
//! preview_limit = 10     # LIMIT for the default listing
//! disabled = ["group_by"]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_GENERATOR_TOP_LIMIT` | Default TopN limit |
//! | `SQL_GENERATOR_PREVIEW_LIMIT` | Default listing limit |
//! | `SQL_GENERATOR_DISABLED` | Comma-separated intent ids to disable |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

pub const ENV_TOP_LIMIT: &str = "SQL_GENERATOR_TOP_LIMIT";
pub const ENV_PREVIEW_LIMIT: &str = "SQL_GENERATOR_PREVIEW_LIMIT";
pub const ENV_DISABLED: &str = "SQL_GENERATOR_DISABLED";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig
}

/// Query generator configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// LIMIT used by top-N questions that carry no number
    pub top_limit:     u64,
    /// LIMIT used by the default listing
    pub preview_limit: u64,
    /// Intent ids to skip (`count`, `average`, `top_n`, `group_by`)
    pub disabled:      Vec<String>
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            top_limit:     5,
            preview_limit: 10,
            disabled:      Vec::new()
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-generator.toml)
    /// 3. Config file in home directory (~/.config/sql-generator/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-generator")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Current directory overrides home config
        let local_config = PathBuf::from(".sql-generator.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Read a TOML config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse TOML config content
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    /// Override values from environment lookups
    ///
    /// Takes the lookup as a function so callers can supply a fake environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>
    {
        if let Some(value) = lookup(ENV_TOP_LIMIT) {
            self.generator.top_limit = parse_limit(ENV_TOP_LIMIT, &value)?;
        }

        if let Some(value) = lookup(ENV_PREVIEW_LIMIT) {
            self.generator.preview_limit = parse_limit(ENV_PREVIEW_LIMIT, &value)?;
        }

        if let Some(value) = lookup(ENV_DISABLED) {
            self.generator.disabled = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(())
    }
}

fn parse_limit(name: &str, value: &str) -> AppResult<u64> {
    value.trim().parse().map_err(|_| {
        config_error(format!(
            "{} must be a non-negative integer, got '{}'",
            name, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn fake_env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_apply_env_limits() {
        let mut config = Config::default();
        config
            .apply_env(fake_env(&[(ENV_TOP_LIMIT, "7"), (ENV_PREVIEW_LIMIT, " 25 ")]))
            .unwrap();
        assert_eq!(config.generator.top_limit, 7);
        assert_eq!(config.generator.preview_limit, 25);
    }

    #[test]
    fn test_apply_env_disabled_list() {
        let mut config = Config::default();
        config
            .apply_env(fake_env(&[(ENV_DISABLED, "count, ,top_n")]))
            .unwrap();
        assert_eq!(config.generator.disabled, vec!["count", "top_n"]);
    }

    #[test]
    fn test_apply_env_invalid_limit() {
        let mut config = Config::default();
        let result = config.apply_env(fake_env(&[(ENV_TOP_LIMIT, "five")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_env_empty_keeps_defaults() {
        let mut config = Config::default();
        config.apply_env(fake_env(&[])).unwrap();
        assert_eq!(config.generator.top_limit, 5);
        assert_eq!(config.generator.preview_limit, 10);
    }
}
