//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/icsmith/config.toml` by default. Every setting is optional;
//! anything unset falls back to the built-in defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use icsmith_core::Defaults;

/// Configuration for the icsmith CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default `PRODID` value for generated documents.
    pub product_id: Option<String>,

    /// Default title for events without one.
    pub title: Option<String>,

    /// Directory where .ics files are written by default.
    pub output_dir: Option<PathBuf>,

    /// Default output file stem (an `.ics` extension is appended).
    pub filename: Option<String>,
}

impl CliConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("icsmith")
    }

    /// Builds a fresh defaults table with the configured overrides applied.
    pub fn build_defaults(&self) -> Defaults {
        let mut defaults = Defaults::generate();
        if let Some(ref product_id) = self.product_id {
            defaults.product_id = product_id.clone();
        }
        if let Some(ref title) = self.title {
            defaults.title = title.clone();
        }
        if let Some(ref filename) = self.filename {
            defaults.filename = filename.clone();
        }
        defaults
    }
}
