use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// User-facing configuration, persisted as bechdel.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Returns the config file path within the given directory.
    pub fn path(config_dir: &Path) -> PathBuf {
        config_dir.join("bechdel.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.dataset.source.trim().is_empty() {
            errors.push("dataset.source must not be empty".to_string());
        }

        if self.dataset.timeout_secs == 0 {
            errors.push("dataset.timeout_secs must be at least 1".to_string());
        }

        if !(0.0..=1.0).contains(&self.search.fuzzy_ratio) {
            errors.push("search.fuzzy_ratio must be between 0.0 and 1.0".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            dataset: DatasetConfig {
                source: if self.dataset.source.trim().is_empty() {
                    defaults.dataset.source
                } else {
                    self.dataset.source.clone()
                },
                timeout_secs: if self.dataset.timeout_secs == 0 {
                    defaults.dataset.timeout_secs
                } else {
                    self.dataset.timeout_secs
                },
            },
            search: SearchSettings {
                fuzzy_min_threshold: self.search.fuzzy_min_threshold,
                fuzzy_ratio: if (0.0..=1.0).contains(&self.search.fuzzy_ratio) {
                    self.search.fuzzy_ratio
                } else {
                    defaults.search.fuzzy_ratio
                },
            },
            display: self.display.clone(),
        }
    }
}

/// Where the movie dataset comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Filesystem path or http(s) URL of `movies.json`.
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl DatasetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_source() -> String {
    "movies.json".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Fuzzy fallback tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Smallest edit distance ever accepted, whatever the query length.
    #[serde(default = "default_fuzzy_min_threshold")]
    pub fuzzy_min_threshold: usize,
    /// Share of the query length accepted as edits.
    #[serde(default = "default_fuzzy_ratio")]
    pub fuzzy_ratio: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            fuzzy_min_threshold: default_fuzzy_min_threshold(),
            fuzzy_ratio: default_fuzzy_ratio(),
        }
    }
}

fn default_fuzzy_min_threshold() -> usize {
    3
}

fn default_fuzzy_ratio() -> f64 {
    0.4
}

/// Presentation settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
}

/// Language of user-facing messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Fr => write!(f, "fr"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
