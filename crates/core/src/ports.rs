//! Port interfaces
//!
//! These traits define the boundary between page logic and the
//! infrastructure that talks to the backend or the local machine.

use std::path::PathBuf;

use async_trait::async_trait;
use deskmate_domain::{
    CalendarEvent, Email, EmailActionRequest, EmailConfig, FileRequest, GeneratedFile, LogEntry,
    NewEvent, NewTask, Result, SendReply, Task, TaskStatus,
};

/// REST surface of the assistant backend
///
/// One method per endpoint. Implementations issue exactly one request per
/// call and never retry; failures come back as `DeskError`.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// `GET /emails`
    async fn list_emails(&self) -> Result<Vec<Email>>;

    /// `POST /emails/fetch`: ask the backend to ingest and analyse new mail.
    async fn fetch_emails(&self) -> Result<()>;

    /// `POST /emails/send`
    async fn send_reply(&self, reply: &SendReply) -> Result<()>;

    /// `POST /emails/action`
    async fn email_action(&self, request: &EmailActionRequest) -> Result<()>;

    /// `GET /email-config`. `None` when no account is configured yet.
    async fn get_email_config(&self) -> Result<Option<EmailConfig>>;

    /// `POST /email-config`
    async fn save_email_config(&self, config: &EmailConfig) -> Result<()>;

    /// `GET /tasks`
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// `POST /tasks`
    async fn create_task(&self, task: &NewTask) -> Result<()>;

    /// `PUT /tasks/{id}?status=`
    async fn update_task_status(&self, id: &str, status: TaskStatus) -> Result<()>;

    /// `GET /calendar`
    async fn list_events(&self) -> Result<Vec<CalendarEvent>>;

    /// `POST /calendar`
    async fn create_event(&self, event: &NewEvent) -> Result<()>;

    /// `GET /excel`
    async fn list_files(&self) -> Result<Vec<GeneratedFile>>;

    /// `POST /excel/create`
    async fn create_file(&self, request: &FileRequest) -> Result<()>;

    /// `GET /excel/download/{id}`: raw file bytes.
    async fn download_file(&self, id: &str) -> Result<Vec<u8>>;

    /// `GET /logs`
    async fn list_logs(&self) -> Result<Vec<LogEntry>>;
}

/// Local destination for downloaded files
#[async_trait]
pub trait FileSink: Send + Sync {
    /// Save `bytes` under `file_name`, returning where they landed.
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf>;
}

/// Something a poller can re-read on a timer
#[async_trait]
pub trait Refreshable: Send + Sync {
    /// Resource name for logs.
    fn resource_name(&self) -> &'static str;

    /// Re-issue the read. Failures are absorbed by the implementor.
    async fn refresh(&self);
}
