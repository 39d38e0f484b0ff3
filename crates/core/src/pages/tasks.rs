//! Task board

use async_trait::async_trait;
use deskmate_domain::{NewTask, Result, Task, TaskStatus};
use parking_lot::Mutex;
use tracing::instrument;

use super::{is_blank, Page, PageContext};
use crate::forms::FormState;
use crate::navigation::Route;
use crate::view_state::{Applied, LoadPhase, Resource};

/// Tasks split into the three board columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    pub todo: Vec<Task>,
    pub in_validation: Vec<Task>,
    pub done: Vec<Task>,
}

impl TaskBoard {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.column_mut(task.status).push(task.clone());
        }
        board
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InValidation => &self.in_validation,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InValidation => &mut self.in_validation,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Columns in display order with their catalog label keys.
    pub fn columns(&self) -> [(TaskStatus, &'static str, &[Task]); 3] {
        [
            (TaskStatus::Todo, "todo", &self.todo),
            (TaskStatus::InValidation, "inValidation", &self.in_validation),
            (TaskStatus::Done, "done", &self.done),
        ]
    }
}

pub struct TasksPage {
    ctx: PageContext,
    tasks: Resource<Vec<Task>>,
    form: Mutex<FormState<NewTask>>,
}

impl TasksPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, tasks: Resource::new("tasks"), form: Mutex::new(FormState::new()) }
    }

    pub async fn load(&self) -> Applied {
        self.tasks.load(self.ctx.api.list_tasks()).await
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.get()
    }

    pub fn phase(&self) -> LoadPhase {
        self.tasks.phase()
    }

    pub fn resource(&self) -> &Resource<Vec<Task>> {
        &self.tasks
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

    pub fn edit_draft(&self, edit: impl FnOnce(&mut NewTask)) {
        edit(self.form.lock().draft_mut());
    }

    pub fn draft(&self) -> NewTask {
        self.form.lock().draft().clone()
    }

    /// `POST /tasks` with the current draft.
    ///
    /// The new task shows up under [`NewTask::SERVER_DEFAULT_STATUS`] once
    /// the board is re-read.
    #[instrument(skip(self))]
    pub async fn submit_create(&self) -> Result<()> {
        let draft = self.draft();
        if is_blank(&draft.title) {
            return Err(self.ctx.reject("Title is required"));
        }

        self.ctx
            .write("create_task", self.ctx.api.create_task(&draft), "Task created", "Failed to create task")
            .await?;

        self.form.lock().close_and_reset();
        self.load().await;
        Ok(())
    }

    /// Move a task to another column. Any transition is allowed.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: &str, status: TaskStatus) -> Result<()> {
        self.ctx
            .write(
                "update_task_status",
                self.ctx.api.update_task_status(id, status),
                "Task updated",
                "Failed to update task",
            )
            .await?;

        self.load().await;
        Ok(())
    }

    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks.with(|tasks| tasks.iter().filter(|task| task.status == status).cloned().collect())
    }

    pub fn board(&self) -> TaskBoard {
        self.tasks.with(|tasks| TaskBoard::from_tasks(tasks))
    }
}

#[async_trait]
impl Page for TasksPage {
    fn route(&self) -> Route {
        Route::Tasks
    }

    async fn mount(&self) {
        self.load().await;
    }
}
