//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the storymap application.

use serde::{Deserialize, Serialize};

use crate::board::BoardConfig;
use crate::error::Result;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::polling::WireframePolling;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "STORYMAP_API_URL";

/// Environment variable overriding the project id.
pub const ENV_PROJECT_ID: &str = "STORYMAP_PROJECT_ID";

/// Backend connection settings.
///
/// When `base_url` is unset the application runs against a built-in
/// sample project instead of a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// The project to open on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Session token for the backend.
    ///
    /// Prefer the `STORYMAP_TOKEN` environment variable over storing a
    /// token in a config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// The main configuration struct for the storymap application.
///
/// # Examples
///
/// ```
/// use storymap_config::{BoardConfig, Config, WireframePolling};
///
/// let config = Config::default();
/// assert!(config.api.base_url.is_none());
/// assert_eq!(config.polling, WireframePolling::default());
/// assert_eq!(config.board, BoardConfig::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Wireframe status poll timing.
    #[serde(default)]
    pub polling: WireframePolling,

    /// Board layout and interaction tuning.
    #[serde(default)]
    pub board: BoardConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations, then
    /// applies environment overrides.
    ///
    /// Search order:
    ///
    /// 1. Local: `./storymap.json5` or `./storymap.json`
    /// 2. User: `~/.config/storymap/config.json5` or `.json`
    /// 3. Built-in defaults
    ///
    /// Environment variables (`STORYMAP_API_URL`, `STORYMAP_PROJECT_ID`)
    /// override file values.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the merged configuration fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use storymap_config::Config;
    ///
    /// # async fn example() -> storymap_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("interval: {} ms", config.polling.interval_ms);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file::<Config>(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied here; this entry point is
    /// primarily for tests and explicit `--config` style use.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration fails validation.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any section fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use storymap_config::{Config, WireframePolling};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.polling = WireframePolling::new(1, 1); // Below minimum
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api.base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(crate::ConfigError::InvalidBaseUrl(url.clone()));
        }
        self.polling.validate()?;
        self.board.validate()?;
        Ok(())
    }

    /// Returns `true` when a backend is configured.
    #[must_use]
    pub fn has_backend(&self) -> bool {
        self.api.base_url.is_some()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_API_URL)
            && !url.is_empty()
        {
            self.api.base_url = Some(url);
        }
        if let Ok(id) = std::env::var(ENV_PROJECT_ID)
            && let Ok(id) = id.parse::<u64>()
        {
            self.api.project_id = Some(id);
        }
    }
}
