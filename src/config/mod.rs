//
//  cloudfoundry-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the `cf` configuration: the default target (API endpoint,
//! organization, space) and the polling settings used when waiting on jobs
//! and staging.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/cf/config.toml`
//! - **macOS**: `~/Library/Application Support/cf/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\cf\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [target]
//! api = "https://api.run.example.com"
//! organization = "my-org"
//! space = "development"
//!
//! [polling]
//! interval_secs = 1
//! job_timeout_secs = 300
//! staging_timeout_secs = 900
//! startup_timeout_secs = 300
//! ```
//!
//! ## Keys
//!
//! | Key | Section field |
//! |-----|---------------|
//! | `api` | `target.api` |
//! | `organization` | `target.organization` |
//! | `space` | `target.space` |
//! | `poll_interval` | `polling.interval_secs` |
//! | `job_timeout` | `polling.job_timeout_secs` |
//! | `staging_timeout` | `polling.staging_timeout_secs` |
//! | `startup_timeout` | `polling.startup_timeout_secs` |
//!
//! Command-line flags and `CF_*` environment variables take precedence over
//! the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::operations::PollConfig;

/// Every key accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &[
    "api",
    "organization",
    "space",
    "poll_interval",
    "job_timeout",
    "staging_timeout",
    "startup_timeout",
];

/// The complete configuration file.
///
/// # Examples
///
/// ```rust
/// use cloudfoundry_client::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.polling.interval_secs, 1);
/// assert_eq!(config.polling.job_timeout_secs, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default target.
    #[serde(default)]
    pub target: TargetConfig,

    /// Polling settings.
    #[serde(default)]
    pub polling: PollingConfig,
}

/// Default API endpoint, organization and space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TargetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
}

/// Interval and deadlines, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Pause between status queries.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Deadline for background jobs.
    #[serde(default = "default_job_timeout_secs")]
    pub job_timeout_secs: u64,

    /// Deadline for application staging.
    #[serde(default = "default_staging_timeout_secs")]
    pub staging_timeout_secs: u64,

    /// Deadline for an instance to start once staged.
    #[serde(default = "default_startup_timeout_secs")]
    pub startup_timeout_secs: u64,
}

fn default_interval_secs() -> u64 {
    1
}

fn default_job_timeout_secs() -> u64 {
    300
}

fn default_staging_timeout_secs() -> u64 {
    900
}

fn default_startup_timeout_secs() -> u64 {
    300
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            job_timeout_secs: default_job_timeout_secs(),
            staging_timeout_secs: default_staging_timeout_secs(),
            startup_timeout_secs: default_startup_timeout_secs(),
        }
    }
}

impl PollingConfig {
    /// Interval and job deadline as a [`PollConfig`].
    pub fn poll_config(&self) -> PollConfig {
        PollConfig::new(
            Duration::from_secs(self.interval_secs),
            Duration::from_secs(self.job_timeout_secs),
        )
    }

    /// The staging deadline.
    pub fn staging_timeout(&self) -> Duration {
        Duration::from_secs(self.staging_timeout_secs)
    }

    /// The startup deadline.
    pub fn startup_timeout(&self) -> Duration {
        Duration::from_secs(self.startup_timeout_secs)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Path of the configuration file.
    ///
    /// `CF_CONFIG` overrides the platform default.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os("CF_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("", "", "cf")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get a configuration value by key.
    ///
    /// Returns `None` for unknown keys and for target values that are unset.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api" => self.target.api.clone(),
            "organization" => self.target.organization.clone(),
            "space" => self.target.space.clone(),
            "poll_interval" => Some(self.polling.interval_secs.to_string()),
            "job_timeout" => Some(self.polling.job_timeout_secs.to_string()),
            "staging_timeout" => Some(self.polling.staging_timeout_secs.to_string()),
            "startup_timeout" => Some(self.polling.startup_timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys, invalid endpoints, and values that are not a
    /// whole number of seconds (zero is rejected for intervals and deadlines).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api" => self.target.api = Some(validate_endpoint(value)?),
            "organization" => self.target.organization = Some(value.to_string()),
            "space" => self.target.space = Some(value.to_string()),
            "poll_interval" => self.polling.interval_secs = parse_positive_secs(key, value)?,
            "job_timeout" => self.polling.job_timeout_secs = parse_positive_secs(key, value)?,
            "staging_timeout" => self.polling.staging_timeout_secs = parse_positive_secs(key, value)?,
            "startup_timeout" => self.polling.startup_timeout_secs = parse_positive_secs(key, value)?,
            _ => bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }
}

fn validate_endpoint(value: &str) -> Result<String> {
    let url = Url::parse(value).with_context(|| format!("Invalid API endpoint '{}'", value))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        bail!("Invalid API endpoint '{}': expected http(s)://host", value);
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn parse_positive_secs(key: &str, value: &str) -> Result<u64> {
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{} must be a whole number of seconds, got '{}'", key, value))?;
    if secs == 0 {
        bail!("{} must be greater than zero", key);
    }
    Ok(secs)
}
