//! Activity feed
//!
//! Read-only view over `GET /logs`. The full Logs page and the dashboard
//! widget are the same feed with different options.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use deskmate_domain::constants::{
    FEED_POLL_INTERVAL_SECS, FEED_WIDGET_LIMIT, LOGS_POLL_INTERVAL_SECS,
};
use deskmate_domain::LogEntry;

use crate::ports::{AssistantApi, Refreshable};
use crate::view_state::{Applied, LoadPhase, Resource};

/// Page size and cadence of a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOptions {
    /// Keep only the first `limit` entries; `None` keeps all.
    pub limit: Option<usize>,
    pub poll_interval: Duration,
}

impl FeedOptions {
    /// Dashboard widget: five most recent entries every ten seconds.
    pub const fn widget() -> Self {
        Self {
            limit: Some(FEED_WIDGET_LIMIT),
            poll_interval: Duration::from_secs(FEED_POLL_INTERVAL_SECS),
        }
    }

    /// Logs page: every entry every five seconds.
    pub const fn full_page() -> Self {
        Self { limit: None, poll_interval: Duration::from_secs(LOGS_POLL_INTERVAL_SECS) }
    }
}

/// Polled list of log entries
pub struct ActivityFeed {
    api: Arc<dyn AssistantApi>,
    options: FeedOptions,
    logs: Resource<Vec<LogEntry>>,
}

impl ActivityFeed {
    pub fn new(api: Arc<dyn AssistantApi>, options: FeedOptions) -> Self {
        Self { api, options, logs: Resource::new("logs") }
    }

    pub fn options(&self) -> FeedOptions {
        self.options
    }

    pub fn poll_interval(&self) -> Duration {
        self.options.poll_interval
    }

    pub async fn load(&self) -> Applied {
        let limit = self.options.limit;
        self.logs
            .load(async {
                let mut entries = self.api.list_logs().await?;
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                Ok(entries)
            })
            .await
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.logs.get()
    }

    pub fn phase(&self) -> LoadPhase {
        self.logs.phase()
    }

    pub fn resource(&self) -> &Resource<Vec<LogEntry>> {
        &self.logs
    }
}

#[async_trait]
impl Refreshable for ActivityFeed {
    fn resource_name(&self) -> &'static str {
        self.logs.name()
    }

    async fn refresh(&self) {
        self.load().await;
    }
}
