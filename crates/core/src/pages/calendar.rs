//! Calendar

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use deskmate_domain::{CalendarEvent, NewEvent, Result};
use parking_lot::Mutex;
use tracing::instrument;

use super::{is_blank, Page, PageContext};
use crate::forms::FormState;
use crate::navigation::Route;
use crate::view_state::{Applied, LoadPhase, Resource};

pub struct CalendarPage {
    ctx: PageContext,
    events: Resource<Vec<CalendarEvent>>,
    selected: Mutex<NaiveDate>,
    form: Mutex<FormState<NewEvent>>,
}

impl CalendarPage {
    /// Starts with today selected.
    pub fn new(ctx: PageContext) -> Self {
        Self::with_selected_date(ctx, Local::now().date_naive())
    }

    pub fn with_selected_date(ctx: PageContext, selected: NaiveDate) -> Self {
        Self {
            ctx,
            events: Resource::new("calendar"),
            selected: Mutex::new(selected),
            form: Mutex::new(FormState::new()),
        }
    }

    pub async fn load(&self) -> Applied {
        self.events.load(self.ctx.api.list_events()).await
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        self.events.get()
    }

    pub fn phase(&self) -> LoadPhase {
        self.events.phase()
    }

    pub fn resource(&self) -> &Resource<Vec<CalendarEvent>> {
        &self.events
    }

    pub fn select_date(&self, date: NaiveDate) {
        *self.selected.lock() = date;
    }

    pub fn selected_date(&self) -> NaiveDate {
        *self.selected.lock()
    }

    pub fn open_create(&self) {
        self.form.lock().open();
    }

    pub fn close_create(&self) {
        self.form.lock().close();
    }

    pub fn is_create_open(&self) -> bool {
        self.form.lock().is_open()
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut NewEvent)) {
        edit(self.form.lock().draft_mut());
    }

    pub fn draft(&self) -> NewEvent {
        self.form.lock().draft().clone()
    }

    /// `POST /calendar`. Title, start and end are required.
    #[instrument(skip(self))]
    pub async fn submit_create(&self) -> Result<()> {
        let draft = self.draft();
        if is_blank(&draft.title) || is_blank(&draft.start_time) || is_blank(&draft.end_time) {
            return Err(self.ctx.reject("All fields are required"));
        }

        self.ctx
            .write(
                "create_event",
                self.ctx.api.create_event(&draft),
                "Event created",
                "Failed to create event",
            )
            .await?;

        self.form.lock().close_and_reset();
        self.load().await;
        Ok(())
    }

    /// Events starting on `date` in local time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        self.events.with(|events| {
            events.iter().filter(|event| event.start_date() == Some(date)).cloned().collect()
        })
    }

    pub fn events_for_selected_date(&self) -> Vec<CalendarEvent> {
        self.events_on(self.selected_date())
    }

    /// Events grouped by local start day. Events whose start does not parse
    /// are left out.
    pub fn events_by_day(&self) -> BTreeMap<NaiveDate, Vec<CalendarEvent>> {
        self.events.with(|events| {
            let mut days: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();
            for event in events {
                if let Some(day) = event.start_date() {
                    days.entry(day).or_default().push(event.clone());
                }
            }
            days
        })
    }
}

#[async_trait]
impl Page for CalendarPage {
    fn route(&self) -> Route {
        Route::Calendar
    }

    async fn mount(&self) {
        self.load().await;
    }
}
