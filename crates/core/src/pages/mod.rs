//! Page view-models
//!
//! Every page follows the same contract:
//! - `mount` issues exactly one read per resource it shows
//! - reads fail silently (logged, previous data kept)
//! - writes validate locally, notify once, and on success close the form
//!   and re-read the affected resource exactly once
//!
//! Pages are `Send + Sync` and shared behind `Arc`; interior locks are never
//! held across an `.await`.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use deskmate_domain::{DeskError, Result};
use tracing::{info, warn};

use crate::feed::ActivityFeed;
use crate::i18n::LanguageContext;
use crate::navigation::Route;
use crate::notifications::{Notification, NotificationLevel, Notifier};
use crate::ports::AssistantApi;

pub mod calendar;
pub mod dashboard;
pub mod emails;
pub mod files;
pub mod logs;
pub mod tasks;

pub use calendar::CalendarPage;
pub use dashboard::{DashboardPage, DashboardStats};
pub use emails::{EmailsPage, ReplyDraft};
pub use files::{FileDraft, FilesPage};
pub use logs::LogsPage;
pub use tasks::{TaskBoard, TasksPage};

/// Collaborators handed to every page
#[derive(Clone)]
pub struct PageContext {
    pub api: Arc<dyn AssistantApi>,
    pub notifier: Arc<dyn Notifier>,
    pub i18n: LanguageContext,
}

impl PageContext {
    pub fn new(
        api: Arc<dyn AssistantApi>,
        notifier: Arc<dyn Notifier>,
        i18n: LanguageContext,
    ) -> Self {
        Self { api, notifier, i18n }
    }

    pub fn notify_success(&self, description: impl Into<String>) {
        self.notifier.notify(Notification {
            level: NotificationLevel::Success,
            title: self.i18n.t("success").to_string(),
            description: description.into(),
        });
    }

    /// Error toast carrying the backend's `detail` when it sent one.
    pub fn notify_failure(&self, err: &DeskError, fallback: &str) {
        let description = err.user_detail().unwrap_or(fallback).to_string();
        self.notifier.notify(Notification {
            level: NotificationLevel::Error,
            title: self.i18n.t("error").to_string(),
            description,
        });
    }

    /// Refuse a submit before any request goes out.
    pub fn reject(&self, message: &str) -> DeskError {
        info!(reason = message, "submit rejected by local validation");
        let err = DeskError::Validation(message.to_string());
        self.notify_failure(&err, message);
        err
    }

    /// Run a write and raise exactly one notification for its outcome.
    pub(crate) async fn write<F>(
        &self,
        action: &'static str,
        request: F,
        success: &str,
        failure: &str,
    ) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        match request.await {
            Ok(()) => {
                info!(action, "write succeeded");
                self.notify_success(success);
                Ok(())
            }
            Err(err) => {
                warn!(action, error = %err, kind = err.label(), "write failed");
                self.notify_failure(&err, failure);
                Err(err)
            }
        }
    }
}

/// A mountable screen
#[async_trait]
pub trait Page: Send + Sync {
    fn route(&self) -> Route;

    /// Issue the initial reads.
    async fn mount(&self);

    /// Feeds that must be re-read on a timer while the page is mounted.
    fn live_feeds(&self) -> Vec<Arc<ActivityFeed>> {
        Vec::new()
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
