//! Activity log table

use std::sync::Arc;

use async_trait::async_trait;
use deskmate_domain::LogEntry;

use super::{Page, PageContext};
use crate::feed::{ActivityFeed, FeedOptions};
use crate::navigation::Route;
use crate::view_state::LoadPhase;

pub struct LogsPage {
    feed: Arc<ActivityFeed>,
}

impl LogsPage {
    pub fn new(ctx: &PageContext, options: FeedOptions) -> Self {
        Self { feed: Arc::new(ActivityFeed::new(ctx.api.clone(), options)) }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.feed.entries()
    }

    pub fn phase(&self) -> LoadPhase {
        self.feed.phase()
    }

    pub fn feed(&self) -> &Arc<ActivityFeed> {
        &self.feed
    }
}

#[async_trait]
impl Page for LogsPage {
    fn route(&self) -> Route {
        Route::Logs
    }

    async fn mount(&self) {
        self.feed.load().await;
    }

    fn live_feeds(&self) -> Vec<Arc<ActivityFeed>> {
        vec![self.feed.clone()]
    }
}
