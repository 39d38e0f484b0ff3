//! Calendar commands

use deskmate_core::CalendarPage;
use deskmate_domain::{NewEvent, Result};

use crate::context::AppContext;
use crate::render::render_calendar;
use crate::utils::command_helpers::execute_with_logging;

#[derive(Debug, Clone)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub reminder: u32,
}

pub async fn add(ctx: &AppContext, input: EventInput) -> Result<String> {
    let page = CalendarPage::new(ctx.page_context());
    execute_with_logging("event::add", async {
        page.open_create();
        page.edit_draft(|draft| {
            *draft = NewEvent {
                title: input.title,
                description: input.description,
                start_time: input.start,
                end_time: input.end,
                reminder: input.reminder,
            };
        });
        page.submit_create().await?;
        Ok(render_calendar(&page, ctx.i18n.translator()))
    })
    .await
}
