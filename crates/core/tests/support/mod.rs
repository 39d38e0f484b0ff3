//! Shared test helpers for `deskmate-core` integration tests.
//!
//! `MockAssistantApi` plays the backend: it keeps in-memory collections,
//! applies writes the way the real service does (new tasks land in `todo`),
//! and records every call as `"METHOD /path"` so tests can assert on the
//! exact request sequence.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use deskmate_core::{
    AssistantApi, FileSink, LanguageContext, NotificationCenter, PageContext,
};
use deskmate_domain::{
    CalendarEvent, DeskError, Email, EmailAction, EmailActionRequest, EmailConfig, EmailStatus,
    FileKind, FileRequest, GeneratedFile, LogEntry, LogStatus, NewEvent, NewTask, Result,
    SendReply, Task, TaskStatus,
};
use serde_json::{json, Value};

#[derive(Default)]
struct State {
    emails: Vec<Email>,
    tasks: Vec<Task>,
    events: Vec<CalendarEvent>,
    files: Vec<GeneratedFile>,
    logs: Vec<LogEntry>,
    config: Option<EmailConfig>,
    downloads: HashMap<String, Vec<u8>>,
    calls: Vec<String>,
    bodies: Vec<(String, Value)>,
    failures: HashMap<String, DeskError>,
    next_id: u64,
}

/// In-memory backend
#[derive(Default, Clone)]
pub struct MockAssistantApi {
    state: Arc<Mutex<State>>,
}

impl MockAssistantApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_emails(self, emails: Vec<Email>) -> Self {
        self.state.lock().unwrap().emails = emails;
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.state.lock().unwrap().tasks = tasks;
        self
    }

    pub fn with_events(self, events: Vec<CalendarEvent>) -> Self {
        self.state.lock().unwrap().events = events;
        self
    }

    pub fn with_files(self, files: Vec<GeneratedFile>) -> Self {
        self.state.lock().unwrap().files = files;
        self
    }

    pub fn with_logs(self, logs: Vec<LogEntry>) -> Self {
        self.state.lock().unwrap().logs = logs;
        self
    }

    pub fn with_download(self, id: &str, bytes: &[u8]) -> Self {
        self.state.lock().unwrap().downloads.insert(id.to_string(), bytes.to_vec());
        self
    }

    /// Make every subsequent `call` (e.g. `"POST /tasks"`) fail with `err`.
    pub fn fail(&self, call: &str, err: DeskError) {
        self.state.lock().unwrap().failures.insert(call.to_string(), err);
    }

    pub fn recover(&self, call: &str) {
        self.state.lock().unwrap().failures.remove(call);
    }

    pub fn push_log(&self, entry: LogEntry) {
        self.state.lock().unwrap().logs.insert(0, entry);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| *c == call).count()
    }

    /// Write calls only, in order.
    pub fn writes(&self) -> Vec<String> {
        self.calls().into_iter().filter(|call| !call.starts_with("GET ")).collect()
    }

    pub fn bodies(&self, call: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .bodies
            .iter()
            .filter(|(c, _)| c == call)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn reset_calls(&self) {
        let mut state = self.state.lock().unwrap();
        state.calls.clear();
        state.bodies.clear();
    }

    fn record(&self, call: &str, body: Option<Value>) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.to_string());
        if let Some(body) = body {
            state.bodies.push((call.to_string(), body));
        }
        match state.failures.get(call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        format!("new-{}", state.next_id)
    }
}

#[async_trait]
impl AssistantApi for MockAssistantApi {
    async fn list_emails(&self) -> Result<Vec<Email>> {
        self.record("GET /emails", None)?;
        Ok(self.state.lock().unwrap().emails.clone())
    }

    async fn fetch_emails(&self) -> Result<()> {
        self.record("POST /emails/fetch", None)
    }

    async fn send_reply(&self, reply: &SendReply) -> Result<()> {
        self.record("POST /emails/send", Some(json!(reply)))?;
        let mut state = self.state.lock().unwrap();
        if let Some(email) = state.emails.iter_mut().find(|e| e.id == reply.email_id) {
            email.status = EmailStatus::Responded;
        }
        Ok(())
    }

    async fn email_action(&self, request: &EmailActionRequest) -> Result<()> {
        self.record("POST /emails/action", Some(json!(request)))?;
        let mut state = self.state.lock().unwrap();
        if let Some(email) = state.emails.iter_mut().find(|e| e.id == request.email_id) {
            email.status = match request.action {
                EmailAction::MarkRead => EmailStatus::Read,
                EmailAction::Archive => EmailStatus::Archived,
            };
        }
        Ok(())
    }

    async fn get_email_config(&self) -> Result<Option<EmailConfig>> {
        self.record("GET /email-config", None)?;
        Ok(self.state.lock().unwrap().config.clone())
    }

    async fn save_email_config(&self, config: &EmailConfig) -> Result<()> {
        self.record("POST /email-config", Some(json!(config)))?;
        self.state.lock().unwrap().config = Some(config.clone());
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.record("GET /tasks", None)?;
        Ok(self.state.lock().unwrap().tasks.clone())
    }

    async fn create_task(&self, task: &NewTask) -> Result<()> {
        self.record("POST /tasks", Some(json!(task)))?;
        let id = self.next_id();
        self.state.lock().unwrap().tasks.push(Task {
            id,
            title: task.title.clone(),
            description: task.description.clone(),
            task_type: task.task_type,
            priority: task.priority,
            status: NewTask::SERVER_DEFAULT_STATUS,
            due_date: (!task.due_date.is_empty()).then(|| task.due_date.clone()),
        });
        Ok(())
    }

    async fn update_task_status(&self, id: &str, status: TaskStatus) -> Result<()> {
        self.record(&format!("PUT /tasks/{id}?status={status}"), None)?;
        let mut state = self.state.lock().unwrap();
        if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }
        Ok(())
    }

    async fn list_events(&self) -> Result<Vec<CalendarEvent>> {
        self.record("GET /calendar", None)?;
        Ok(self.state.lock().unwrap().events.clone())
    }

    async fn create_event(&self, event: &NewEvent) -> Result<()> {
        self.record("POST /calendar", Some(json!(event)))?;
        let id = self.next_id();
        self.state.lock().unwrap().events.push(CalendarEvent {
            id,
            title: event.title.clone(),
            description: event.description.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            reminder: Some(event.reminder),
        });
        Ok(())
    }

    async fn list_files(&self) -> Result<Vec<GeneratedFile>> {
        self.record("GET /excel", None)?;
        Ok(self.state.lock().unwrap().files.clone())
    }

    async fn create_file(&self, request: &FileRequest) -> Result<()> {
        self.record("POST /excel/create", Some(json!(request)))?;
        let id = self.next_id();
        self.state.lock().unwrap().files.push(GeneratedFile {
            id,
            name: request.request_text.clone(),
            file_type: FileKind::Sheet,
            created_at: "2024-05-01T09:00:00Z".into(),
            preview_data: None,
        });
        Ok(())
    }

    async fn download_file(&self, id: &str) -> Result<Vec<u8>> {
        self.record(&format!("GET /excel/download/{id}"), None)?;
        self.state
            .lock()
            .unwrap()
            .downloads
            .get(id)
            .cloned()
            .ok_or(DeskError::Api { status: 404, detail: Some("File not found".into()) })
    }

    async fn list_logs(&self) -> Result<Vec<LogEntry>> {
        self.record("GET /logs", None)?;
        Ok(self.state.lock().unwrap().logs.clone())
    }
}

/// `FileSink` that keeps saved files in memory
#[derive(Default, Clone)]
pub struct RecordingSink {
    saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl RecordingSink {
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileSink for RecordingSink {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        self.saved.lock().unwrap().push((file_name.to_string(), bytes));
        Ok(PathBuf::from("/downloads").join(file_name))
    }
}

/// Everything a page test needs
pub struct Harness {
    pub api: MockAssistantApi,
    pub notifications: Arc<NotificationCenter>,
    pub i18n: LanguageContext,
    pub ctx: PageContext,
}

impl Harness {
    pub fn new(api: MockAssistantApi) -> Self {
        let notifications = Arc::new(NotificationCenter::new());
        let i18n = LanguageContext::default();
        let ctx = PageContext::new(Arc::new(api.clone()), notifications.clone(), i18n.clone());
        Self { api, notifications, i18n, ctx }
    }
}

pub fn email(id: &str, status: EmailStatus, draft: Option<&str>) -> Email {
    serde_json::from_value(json!({
        "id": id,
        "subject": format!("Subject {id}"),
        "from_email": "boss@example.com",
        "status": status.as_str(),
        "priority": "medium",
        "summary": "Needs a reply",
        "draft_response": draft,
    }))
    .unwrap()
}

pub fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    serde_json::from_value(json!({"id": id, "title": title, "status": status.as_str()})).unwrap()
}

pub fn event(id: &str, title: &str, start: &str, end: &str) -> CalendarEvent {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "start_time": start,
        "end_time": end,
        "reminder": 30,
    }))
    .unwrap()
}

pub fn log(id: u32, action: &str) -> LogEntry {
    LogEntry {
        id: id.to_string(),
        timestamp: format!("2024-05-01T09:{:02}:00Z", id % 60),
        action: action.to_string(),
        details: String::new(),
        status: LogStatus::Completed,
    }
}
