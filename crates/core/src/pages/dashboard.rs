//! Dashboard: summary counters, quick actions and the activity widget

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use deskmate_domain::{CalendarEvent, Email, GeneratedFile, Task, TaskStatus};

use super::{Page, PageContext};
use crate::feed::{ActivityFeed, FeedOptions};
use crate::navigation::{quick_actions, QuickAction, Route};
use crate::view_state::{Applied, LoadPhase, Resource};

/// Counters shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub unread_emails: usize,
    pub today_events: usize,
    pub todo_tasks: usize,
    pub files: usize,
}

impl DashboardStats {
    pub fn compute(
        emails: &[Email],
        events: &[CalendarEvent],
        tasks: &[Task],
        files: &[GeneratedFile],
        today: NaiveDate,
    ) -> Self {
        Self {
            unread_emails: emails.iter().filter(|email| email.is_unread()).count(),
            today_events: events.iter().filter(|event| event.start_date() == Some(today)).count(),
            todo_tasks: tasks.iter().filter(|task| task.status == TaskStatus::Todo).count(),
            files: files.len(),
        }
    }
}

pub struct DashboardPage {
    ctx: PageContext,
    stats: Resource<DashboardStats>,
    feed: Arc<ActivityFeed>,
}

impl DashboardPage {
    pub fn new(ctx: PageContext, feed_options: FeedOptions) -> Self {
        let feed = Arc::new(ActivityFeed::new(ctx.api.clone(), feed_options));
        Self { ctx, stats: Resource::new("dashboard"), feed }
    }

    /// Read emails, calendar, tasks and files together.
    ///
    /// All four must succeed for the counters to change.
    pub async fn load_stats(&self) -> Applied {
        let api = &self.ctx.api;
        self.stats
            .load(async {
                let (emails, events, tasks, files) = futures::try_join!(
                    api.list_emails(),
                    api.list_events(),
                    api.list_tasks(),
                    api.list_files()
                )?;
                let today = Local::now().date_naive();
                Ok(DashboardStats::compute(&emails, &events, &tasks, &files, today))
            })
            .await
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats.get()
    }

    pub fn phase(&self) -> LoadPhase {
        self.stats.phase()
    }

    pub fn feed(&self) -> &Arc<ActivityFeed> {
        &self.feed
    }

    pub fn quick_actions(&self) -> [QuickAction; 4] {
        quick_actions()
    }
}

#[async_trait]
impl Page for DashboardPage {
    fn route(&self) -> Route {
        Route::Dashboard
    }

    async fn mount(&self) {
        futures::join!(self.load_stats(), self.feed.load());
    }

    fn live_feeds(&self) -> Vec<Arc<ActivityFeed>> {
        vec![self.feed.clone()]
    }
}
