//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.userdata-report.toml` in the working directory
//! 4. `~/.config/userdata-report/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    self, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECS, DEFAULT_USERS_URL, DEFAULT_USER_AGENT,
};
use crate::env::{Env, EnvOverrides};
use crate::fetch::fallback_users;
use crate::models::UserRecord;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid fetch URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub report: ReportConfig,
    pub fallback: FallbackConfig,
}

/// Live fetch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_USERS_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Replace (or add) the `page` query parameter of the fetch URL.
    ///
    /// Other query parameters are kept in their original order.
    pub fn set_page(&mut self, page: &str) -> Result<(), ConfigError> {
        let mut url = url::Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.url.clone(),
            source: e,
        })?;
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != "page")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.append_pair("page", page);
            for (k, v) in &kept {
                pairs.append_pair(k, v);
            }
        }
        self.url = url.to_string();
        Ok(())
    }
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Optional replacement for the built-in fallback dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub users: Option<Vec<UserRecord>>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, the working directory config, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        config.apply_env_vars(EnvOverrides::from_env(env));

        Ok(config)
    }

    /// The dataset substituted when the live fetch fails.
    pub fn fallback_dataset(&self) -> Vec<UserRecord> {
        self.fallback.users.clone().unwrap_or_else(fallback_users)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        if config.fetch.timeout_secs == 0 {
            tracing::warn!(path = %path.display(), "ignoring timeout_secs = 0");
            config.fetch.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        Ok(config)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_fetch = FetchConfig::default();
        if other.fetch.url != default_fetch.url {
            self.fetch.url = other.fetch.url;
        }
        if other.fetch.timeout_secs != default_fetch.timeout_secs {
            self.fetch.timeout_secs = other.fetch.timeout_secs;
        }
        if other.fetch.user_agent != default_fetch.user_agent {
            self.fetch.user_agent = other.fetch.user_agent;
        }

        if other.report.output != ReportConfig::default().output {
            self.report.output = other.report.output;
        }

        if other.fallback.users.is_some() {
            self.fallback.users = other.fallback.users;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, overrides: EnvOverrides) {
        if let Some(url) = overrides.url {
            self.fetch.url = url;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.fetch.timeout_secs = secs;
        }
        if let Some(user_agent) = overrides.user_agent {
            self.fetch.user_agent = user_agent;
        }
        if let Some(output) = overrides.output {
            self.report.output = output;
        }
    }
}
