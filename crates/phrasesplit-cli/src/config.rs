//! CLI configuration — parsed from TOML file + environment variable overrides.
//!
//! Priority: command-line flags > environment variables > config file > defaults.

use anyhow::{Context, Result};
use phrasesplit_shamir::SplitConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Share count and threshold used by `split`
    #[serde(default)]
    pub split: SplitConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Config file looked up when no `--config` is given
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config/phrasesplit.toml"))
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default path if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `PHRASESPLIT_SHARES`
    /// - `PHRASESPLIT_THRESHOLD`
    /// - `PHRASESPLIT_LOG_LEVEL`
    ///
    /// An unparsable count is an error, as it is for the matching flag.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let shares = lookup("PHRASESPLIT_SHARES")
            .map(|v| parse_count("PHRASESPLIT_SHARES", &v))
            .transpose()?;
        let threshold = lookup("PHRASESPLIT_THRESHOLD")
            .map(|v| parse_count("PHRASESPLIT_THRESHOLD", &v))
            .transpose()?;

        if let Some(n) = shares {
            self.split.total_shares = n;
        }
        if let Some(k) = threshold {
            self.split.threshold = k;
        }
        if let Some(v) = lookup("PHRASESPLIT_LOG_LEVEL") {
            self.logging.log_level = v;
        }
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.split
            .validate()
            .context("Invalid [split] section")?;

        let level = self.logging.log_level.to_lowercase();
        if !["error", "warn", "info", "debug", "trace", "off"].contains(&level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.log_level);
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<u8> {
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {}: {}", key, value))
}
