use anyhow::{Context, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, num::NonZeroU32, path::PathBuf};

use crate::error::{Result, WeatherAppError};

pub const API_KEY_VAR: &str = "API_KEY";
pub const MAX_ATTEMPTS_VAR: &str = "WEATHER_MAX_ATTEMPTS";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Settings persisted by `weather-app configure`.
///
/// Example TOML:
/// api_key = "..."
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoredConfig {
    pub api_key: Option<String>,
}

impl StoredConfig {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: StoredConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    pub fn config_file_path() -> anyhow::Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-app", "weather-app")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Process-wide settings, built once at startup and handed to every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    /// `None` means retry forever.
    pub max_attempts: Option<NonZeroU32>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            max_attempts: NonZeroU32::new(DEFAULT_MAX_ATTEMPTS),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = NonZeroU32::new(max_attempts);
        self
    }

    /// Read `.env`, then the process environment, then the stored config file.
    ///
    /// Variables already set in the process win over `.env` entries.
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => tracing::debug!("No .env file found"),
            Err(err) => {
                return Err(WeatherAppError::invalid_config(format!(
                    "failed to read .env file: {err}"
                )));
            }
        }

        let stored = StoredConfig::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring stored config: {err:#}");
            StoredConfig::default()
        });

        Self::resolve(|name| std::env::var(name).ok(), &stored)
    }

    /// Build a config from a variable lookup and the stored file contents.
    pub fn resolve<F>(lookup: F, stored: &StoredConfig) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .or_else(|| {
                stored.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty()).map(String::from)
            })
            .ok_or(WeatherAppError::ConfigMissing)?;

        let mut config = Config::new(api_key);

        if let Some(raw) = lookup(MAX_ATTEMPTS_VAR) {
            let attempts: u32 = raw.trim().parse().map_err(|_| {
                WeatherAppError::invalid_config(format!(
                    "{MAX_ATTEMPTS_VAR} must be a non-negative integer, got '{raw}'"
                ))
            })?;
            config = config.with_max_attempts(attempts);
        }

        Ok(config)
    }
}
