//! Task board commands

use deskmate_core::TasksPage;
use deskmate_domain::{NewTask, Priority, Result, TaskStatus, TaskType};

use crate::context::AppContext;
use crate::render::render_tasks;
use crate::utils::command_helpers::execute_with_logging;

/// Fields of a new task as given on the command line
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub task_type: TaskType,
    pub priority: Priority,
    pub due: String,
}

impl From<TaskInput> for NewTask {
    fn from(input: TaskInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            task_type: input.task_type,
            priority: input.priority,
            due_date: input.due,
        }
    }
}

pub async fn add(ctx: &AppContext, input: TaskInput) -> Result<String> {
    let page = TasksPage::new(ctx.page_context());
    execute_with_logging("task::add", async {
        page.open_create();
        page.edit_draft(|draft| *draft = input.into());
        page.submit_create().await?;
        Ok(render_tasks(&page, ctx.i18n.translator()))
    })
    .await
}

pub async fn set_status(ctx: &AppContext, id: &str, status: TaskStatus) -> Result<String> {
    let page = TasksPage::new(ctx.page_context());
    execute_with_logging("task::status", async {
        page.update_status(id, status).await?;
        Ok(render_tasks(&page, ctx.i18n.translator()))
    })
    .await
}
