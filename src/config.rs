use crate::error::StatsError;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MonitorConfig {
    /// Full URL of the monitor daemon's stats endpoint
    #[serde(default)]
    pub url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WatchConfig {
    /// Seconds between polls in watch mode
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    30
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl MonitorConfig {
    /// Validate the monitor section
    pub fn validate(&self) -> Result<()> {
        if !self.url.is_empty() {
            let parsed = reqwest::Url::parse(&self.url)
                .with_context(|| format!("Invalid stats endpoint URL '{}'", self.url))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!(
                    "Stats endpoint URL must use http or https, got '{}'",
                    self.url
                );
            }
        }

        if self.timeout_secs == 0 {
            anyhow::bail!("Request timeout must be at least 1 second");
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl WatchConfig {
    /// Validate the watch section
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == 0 {
            anyhow::bail!("Watch interval must be at least 1 second");
        }

        Ok(())
    }
}

impl Config {
    /// Resolve the stats endpoint URL: an explicit override wins, then the
    /// config file, otherwise the user is told how to set one.
    pub fn endpoint_url(&self, override_url: Option<String>) -> Result<String> {
        if let Some(url) = override_url {
            return Ok(url);
        }

        if !self.monitor.url.is_empty() {
            return Ok(self.monitor.url.clone());
        }

        Err(StatsError::NoEndpoint.into())
    }

    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.monitor.validate()?;
        self.watch.validate()?;
        Ok(())
    }
}

/// Path of the config file, ~/.linkstat/config.toml
pub fn config_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".linkstat");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to read config file")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn load() -> Result<Config> {
    let config = load_from_path(config_path()?)?;

    // Validate configuration
    config.validate()?;

    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(path, toml_string).context("Failed to write config file")?;

    Ok(())
}
