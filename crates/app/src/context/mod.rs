//! Application context - dependency injection container

use std::sync::Arc;

use deskmate_core::{
    AssistantApi, FeedOptions, FileSink, LanguageContext, NotificationCenter, PageContext,
};
use deskmate_domain::{Config, DeskError, Result};
use deskmate_infra::{config, ApiClient, DiskFileSink};
use tracing::info;

/// Shared collaborators for one session
pub struct AppContext {
    pub config: Config,
    pub api: Arc<dyn AssistantApi>,
    pub notifications: Arc<NotificationCenter>,
    pub i18n: LanguageContext,
    pub downloads: Arc<dyn FileSink>,
}

impl AppContext {
    /// Wire the REST client, notification queue and download sink.
    ///
    /// # Errors
    /// Returns `DeskError::Config` if the backend URL is unusable.
    pub fn new(config: Config) -> Result<Self> {
        config::validate(&config)?;
        let api = ApiClient::new(&config.backend.url).map_err(DeskError::from)?;
        info!(base_url = %api.base_url(), language = %config.ui.language, "backend client ready");

        let downloads = Arc::new(DiskFileSink::new(config.downloads.directory.clone()));
        Ok(Self::with_ports(config, Arc::new(api), downloads))
    }

    /// Assemble a context around caller-supplied ports.
    pub fn with_ports(
        config: Config,
        api: Arc<dyn AssistantApi>,
        downloads: Arc<dyn FileSink>,
    ) -> Self {
        let i18n = LanguageContext::new(config.ui.language);
        Self { config, api, notifications: Arc::new(NotificationCenter::new()), i18n, downloads }
    }

    pub fn page_context(&self) -> PageContext {
        PageContext::new(Arc::clone(&self.api), self.notifications.clone(), self.i18n.clone())
    }

    /// Dashboard widget cadence and size from configuration.
    pub fn widget_feed(&self) -> FeedOptions {
        FeedOptions {
            limit: Some(self.config.polling.feed_limit),
            poll_interval: self.config.polling.feed_interval(),
        }
    }

    /// Logs page cadence from configuration.
    pub fn logs_feed(&self) -> FeedOptions {
        FeedOptions { limit: None, poll_interval: self.config.polling.logs_interval() }
    }
}
