//! Page actions runnable from the command line
//!
//! Every command drives the same page view-model a mounted page would, so
//! validation, notifications and the post-write re-read behave identically.
//! The returned text is what the command prints on stdout.

pub mod calendar;
pub mod files;
pub mod mail;
pub mod tasks;

use deskmate_domain::Result;

use crate::cli::{Command, EventCommand, FileCommand, MailCommand, TaskCommand};
use crate::context::AppContext;

/// Run `command` against the backend.
///
/// # Errors
/// Returns the failure the page reported; its notification has already
/// been raised on the context's notification center.
pub async fn execute(ctx: &AppContext, command: Command) -> Result<String> {
    match command {
        Command::Task(TaskCommand::Add { title, description, task_type, priority, due }) => {
            tasks::add(ctx, tasks::TaskInput { title, description, task_type, priority, due }).await
        }
        Command::Task(TaskCommand::Status { id, status }) => {
            tasks::set_status(ctx, &id, status).await
        }
        Command::Event(EventCommand::Add { title, start, end, description, reminder }) => {
            calendar::add(ctx, calendar::EventInput { title, description, start, end, reminder })
                .await
        }
        Command::File(FileCommand::Create { request, data, sample }) => {
            files::create(ctx, &request, data, sample).await
        }
        Command::File(FileCommand::Download { id, dir }) => files::download(ctx, &id, dir).await,
        Command::Mail(MailCommand::Fetch) => mail::fetch(ctx).await,
        Command::Mail(MailCommand::Reply { id, text }) => mail::reply(ctx, &id, text).await,
        Command::Mail(MailCommand::Action { id, action }) => mail::action(ctx, &id, action).await,
        Command::Mail(MailCommand::Config(args)) => mail::configure(ctx, args).await,
    }
}
