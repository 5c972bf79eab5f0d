use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::ui::formatters::DEFAULT_DATE_FORMAT;

/// Environment variable that overrides `api_base`.
pub const API_BASE_ENV: &str = "MOOD_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_api_base() -> String {
    "http://localhost:5000".to_string()
}

fn default_lookback_days() -> u32 {
    7
}

fn default_request_timeout() -> u64 {
    30
}

fn default_tick_rate() -> u64 {
    100
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            lookback_days: default_lookback_days(),
            request_timeout_secs: default_request_timeout(),
            tick_rate_ms: default_tick_rate(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("market-mood");
        Ok(config_dir.join("config.json"))
    }

    /// Read the config file if there is one, then apply the environment
    /// override. A missing file yields the defaults; nothing is written.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Self::from_json(&content).with_context(|| format!("parsing {}", path.display()))?
        } else {
            Config::default()
        };

        config.apply_api_base_override(std::env::var(API_BASE_ENV).ok());
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    /// Replace `api_base` unless the override is absent or blank.
    pub fn apply_api_base_override(&mut self, value: Option<String>) {
        if let Some(base) = value.filter(|v| !v.trim().is_empty()) {
            self.api_base = base.trim().to_string();
            self.normalize();
        }
    }

    fn normalize(&mut self) {
        let trimmed = self.api_base.trim().trim_end_matches('/');
        self.api_base = if trimmed.is_empty() {
            default_api_base()
        } else {
            trimmed.to_string()
        };
        if self.lookback_days == 0 {
            self.lookback_days = default_lookback_days();
        }
        if self.tick_rate_ms == 0 {
            self.tick_rate_ms = default_tick_rate();
        }
        if self.date_format.trim().is_empty() {
            self.date_format = default_date_format();
        }
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
