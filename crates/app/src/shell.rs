//! Navigation shell
//!
//! Owns the mounted page and the pollers keeping its live feeds fresh.
//! Every poller of the previous page is stopped before the next page
//! mounts.

use std::sync::Arc;

use deskmate_core::{
    nav_items, CalendarPage, DashboardPage, EmailsPage, FilesPage, LogsPage, NavItem, Page,
    Route, TasksPage,
};
use deskmate_domain::Language;
use deskmate_infra::{Poller, SchedulerError};
use tracing::{info, instrument, warn};

use crate::context::AppContext;

/// The page currently on screen
pub enum MountedPage {
    Dashboard(Arc<DashboardPage>),
    Emails(Arc<EmailsPage>),
    Tasks(Arc<TasksPage>),
    Calendar(Arc<CalendarPage>),
    Excel(Arc<FilesPage>),
    Logs(Arc<LogsPage>),
}

impl MountedPage {
    /// Construct the page for `route` with fresh, empty view state.
    pub fn build(ctx: &AppContext, route: Route) -> Self {
        let page_ctx = ctx.page_context();
        match route {
            Route::Dashboard => {
                Self::Dashboard(Arc::new(DashboardPage::new(page_ctx, ctx.widget_feed())))
            }
            Route::Emails => Self::Emails(Arc::new(EmailsPage::new(page_ctx))),
            Route::Tasks => Self::Tasks(Arc::new(TasksPage::new(page_ctx))),
            Route::Calendar => Self::Calendar(Arc::new(CalendarPage::new(page_ctx))),
            Route::Excel => {
                Self::Excel(Arc::new(FilesPage::new(page_ctx, Arc::clone(&ctx.downloads))))
            }
            Route::Logs => Self::Logs(Arc::new(LogsPage::new(&page_ctx, ctx.logs_feed()))),
        }
    }

    pub fn as_page(&self) -> &dyn Page {
        match self {
            Self::Dashboard(page) => &**page,
            Self::Emails(page) => &**page,
            Self::Tasks(page) => &**page,
            Self::Calendar(page) => &**page,
            Self::Excel(page) => &**page,
            Self::Logs(page) => &**page,
        }
    }

    pub fn route(&self) -> Route {
        self.as_page().route()
    }
}

pub struct Shell {
    ctx: Arc<AppContext>,
    current: Option<MountedPage>,
    pollers: Vec<Poller>,
}

impl Shell {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx, current: None, pollers: Vec::new() }
    }

    pub fn context(&self) -> &Arc<AppContext> {
        &self.ctx
    }

    /// Leave the current page and mount the one at `route`.
    ///
    /// # Errors
    /// Returns an error if a poller for the new page fails to start; the
    /// page stays mounted without it.
    #[instrument(skip(self), fields(path = route.path()))]
    pub async fn navigate(&mut self, route: Route) -> Result<(), SchedulerError> {
        self.unmount().await;

        let page = MountedPage::build(&self.ctx, route);
        page.as_page().mount().await;
        let feeds = page.as_page().live_feeds();
        self.current = Some(page);

        for feed in feeds {
            let interval = feed.poll_interval();
            let mut poller = Poller::new(feed, interval);
            poller.start().await?;
            self.pollers.push(poller);
        }

        info!(pollers = self.pollers.len(), "page mounted");
        Ok(())
    }

    /// Stop the current page's pollers and drop its view state.
    pub async fn unmount(&mut self) {
        for mut poller in self.pollers.drain(..) {
            if let Err(err) = poller.stop().await {
                warn!(error = %err, "poller did not stop cleanly");
            }
        }
        if let Some(page) = self.current.take() {
            info!(path = page.route().path(), "page unmounted");
        }
    }

    pub fn current(&self) -> Option<&MountedPage> {
        self.current.as_ref()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current.as_ref().map(MountedPage::route)
    }

    pub fn active_pollers(&self) -> usize {
        self.pollers.iter().filter(|poller| poller.is_running()).count()
    }

    /// Side panel for the current location.
    pub fn nav(&self) -> Vec<NavItem> {
        let path = self.current_route().unwrap_or(Route::Dashboard).path();
        nav_items(path, self.ctx.i18n.translator())
    }

    /// Flip the session language. Pages re-render; nothing is re-fetched.
    pub fn toggle_language(&self) -> Language {
        self.ctx.i18n.toggle()
    }
}
