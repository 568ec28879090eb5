//! Client configuration management.
//!
//! Holds everything needed to build an API client: base URL, bearer token,
//! optional project/team scope, retry and timeout settings, and logging
//! preferences. Configuration can be persisted as TOML on disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{RwError, RwResult};

/// Top-level client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL including the version prefix (e.g. "https://api.relaywarden.eu/api/v1").
    #[serde(default)]
    pub base_url: String,

    /// Bearer token sent in the `Authorization` header.
    #[serde(default)]
    pub token: String,

    /// Initial project scope, sent as `X-Project-Id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Initial team scope, sent as `X-Team-Id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    /// Retries after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Per-attempt request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override.
    #[serde(default = "constants::user_agent")]
    pub user_agent: String,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. Empty means console only.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured output for the file layer.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde
fn default_max_retries() -> u32 {
    constants::DEFAULT_MAX_RETRIES
}

fn default_timeout_secs() -> u64 {
    constants::DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            project_id: None,
            team_id: None,
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
            user_agent: constants::user_agent(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL and token with default settings.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    /// Set the number of retries after the first attempt.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the per-attempt timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load configuration from the default config file path.
    ///
    /// Returns the defaults when no file exists yet.
    pub fn load_default() -> RwResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> RwResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&contents)?;
        tracing::debug!("loaded client config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> RwResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    ///
    /// - Linux: `~/.config/relaywarden/config.toml`
    /// - macOS: `~/Library/Application Support/relaywarden/config.toml`
    /// - Windows: `%APPDATA%/relaywarden/config.toml`
    pub fn default_config_path() -> RwResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| RwError::Config("could not determine config directory".into()))?;
        Ok(base.join("relaywarden").join("config.toml"))
    }

    /// Get the log directory, or `None` when logging is console only.
    pub fn effective_log_dir(&self) -> Option<PathBuf> {
        if self.logging.directory.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.logging.directory))
        }
    }

    /// Per-attempt timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check whether the base URL and token are both set.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.token.is_empty()
    }

    /// Sanitize and normalize an API base URL.
    ///
    /// Strips whitespace, surrounding quotes and trailing slashes. The URL must
    /// carry an explicit http or https scheme.
    pub fn normalize_base_url(base_url: &str) -> RwResult<String> {
        let trimmed = base_url.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return Err(RwError::Config("base URL is empty".into()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(RwError::Config(format!(
                "base URL must start with http:// or https://: {trimmed}"
            )));
        }
        Ok(trimmed.trim_end_matches('/').to_string())
    }
}
