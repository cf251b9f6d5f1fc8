//! User configuration loaded from TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::history::DEFAULT_LIMIT;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
    pub history: HistoryConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub enabled: bool,
    /// Maximum number of calculations kept.
    pub limit: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show results with thousands separators.
    pub group_thousands: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            history: HistoryConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// `<config dir>/pocketcalc/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pocketcalc").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and a missing file means default settings.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            log_level = "debug"

            [history]
            limit = 10

            [display]
            group_thousands = true
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.history.enabled);
        assert_eq!(config.history.limit, 10);
        assert!(config.display.group_thousands);
    }

    #[test]
    fn test_malformed_config() {
        assert!(Config::from_toml("history = 3").is_err());
        assert!(Config::from_toml("[history").is_err());
    }

    #[test]
    fn test_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/pocketcalc.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
