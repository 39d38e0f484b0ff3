//! Configuration management

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{FEED_POLL_INTERVAL_SECS, FEED_WIDGET_LIMIT, LOGS_POLL_INTERVAL_SECS};
use crate::types::Language;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub polling: PollingConfig,
    pub ui: UiConfig,
    pub downloads: DownloadConfig,
}

/// Backend location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend origin, e.g. `http://localhost:8001`. The client appends `/api`.
    ///
    /// Empty means "not configured"; the loader rejects that.
    pub url: String,
}

/// Polling cadence for the live pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub logs_interval_seconds: u64,
    pub feed_interval_seconds: u64,
    pub feed_limit: usize,
}

impl PollingConfig {
    pub fn logs_interval(&self) -> Duration {
        Duration::from_secs(self.logs_interval_seconds.max(1))
    }

    pub fn feed_interval(&self) -> Duration {
        Duration::from_secs(self.feed_interval_seconds.max(1))
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            logs_interval_seconds: LOGS_POLL_INTERVAL_SECS,
            feed_interval_seconds: FEED_POLL_INTERVAL_SECS,
            feed_limit: FEED_WIDGET_LIMIT,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Language active when the session starts.
    pub language: Language,
}

/// Where downloaded files land
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub directory: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from(".") }
    }
}
