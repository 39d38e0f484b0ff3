//! End-to-end tests for the shell and CLI commands against a mock backend

use std::sync::Arc;

use deskmate_app::cli::{Command, FileCommand, MailCommand, MailConfigArgs, TaskCommand};
use deskmate_app::render::render_screen;
use deskmate_app::{commands, AppContext, Shell};
use deskmate_core::Route;
use deskmate_domain::{Config, DeskError, Language, Priority, TaskType};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend() -> MockServer {
    let server = MockServer::start().await;
    for (route, body) in [
        ("/api/emails", json!([])),
        ("/api/email-config", json!(null)),
        ("/api/calendar", json!([])),
        ("/api/excel", json!([])),
        ("/api/logs", json!([
            {"id": 1, "timestamp": "2024-05-01T09:00:00", "action": "create_task",
             "details": "Pay rent", "status": "completed"}
        ])),
        ("/api/tasks", json!([
            {"id": 1, "title": "Pay rent", "task_type": "expense",
             "priority": "high", "status": "todo"}
        ])),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }
    server
}

fn context(server: &MockServer, downloads: &TempDir) -> Arc<AppContext> {
    let mut config = Config::default();
    config.backend.url = server.uri();
    config.downloads.directory = downloads.path().to_path_buf();
    Arc::new(AppContext::new(config).expect("context"))
}

async fn requests_to(server: &MockServer, route: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == route)
        .count()
}

#[tokio::test]
async fn navigation_swaps_pollers_with_the_page() {
    let server = backend().await;
    let dir = TempDir::new().unwrap();
    let mut shell = Shell::new(context(&server, &dir));

    shell.navigate(Route::Logs).await.unwrap();
    assert_eq!(shell.current_route(), Some(Route::Logs));
    assert_eq!(shell.active_pollers(), 1);
    assert_eq!(requests_to(&server, "/api/logs").await, 1);

    shell.navigate(Route::Tasks).await.unwrap();
    assert_eq!(shell.current_route(), Some(Route::Tasks));
    assert_eq!(shell.active_pollers(), 0);
    assert_eq!(requests_to(&server, "/api/tasks").await, 1);

    shell.navigate(Route::Dashboard).await.unwrap();
    assert_eq!(shell.active_pollers(), 1);

    shell.unmount().await;
    assert_eq!(shell.current_route(), None);
    assert_eq!(shell.active_pollers(), 0);
}

#[tokio::test]
async fn dashboard_renders_stats_and_activity() {
    let server = backend().await;
    let dir = TempDir::new().unwrap();
    let ctx = context(&server, &dir);
    let mut shell = Shell::new(Arc::clone(&ctx));

    shell.navigate(Route::Dashboard).await.unwrap();
    let screen =
        render_screen(&shell.nav(), shell.current().unwrap(), ctx.i18n.translator());

    assert!(screen.contains("[Home]"));
    assert!(screen.contains("Recent activity"));
    assert!(screen.contains("create_task"));
    shell.unmount().await;
}

#[tokio::test]
async fn language_toggle_rerenders_without_requests() {
    let server = backend().await;
    let dir = TempDir::new().unwrap();
    let ctx = context(&server, &dir);
    let mut shell = Shell::new(Arc::clone(&ctx));
    shell.navigate(Route::Tasks).await.unwrap();
    let before = server.received_requests().await.unwrap_or_default().len();

    assert_eq!(shell.toggle_language(), Language::Fr);
    let screen =
        render_screen(&shell.nav(), shell.current().unwrap(), ctx.i18n.translator());

    assert!(screen.contains("[Tâches]"));
    assert!(screen.contains("À faire (1)"));
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), before);
}

#[tokio::test]
async fn task_add_command_posts_and_rereads() {
    let server = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(json!({"title": "Pay rent", "task_type": "expense", "priority": "high"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let ctx = context(&server, &dir);

    let output = commands::execute(
        &ctx,
        Command::Task(TaskCommand::Add {
            title: "Pay rent".into(),
            description: String::new(),
            task_type: TaskType::Expense,
            priority: Priority::High,
            due: String::new(),
        }),
    )
    .await
    .expect("task created");

    assert!(output.contains("Pay rent"));
    let notifications = ctx.notifications.drain();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].description, "Task created");
}

#[tokio::test]
async fn invalid_file_data_is_rejected_locally() {
    let server = backend().await;
    let dir = TempDir::new().unwrap();
    let ctx = context(&server, &dir);

    let err = commands::execute(
        &ctx,
        Command::File(FileCommand::Create {
            request: "Q2 budget".into(),
            data: Some("{not json".into()),
            sample: false,
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err, DeskError::Validation("Invalid JSON data format".into()));
    assert_eq!(requests_to(&server, "/api/excel/create").await, 0);
    assert_eq!(ctx.notifications.error_count(), 1);
}

#[tokio::test]
async fn file_download_command_saves_into_directory() {
    let server = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/excel/download/42"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let ctx = context(&server, &dir);

    let output = commands::execute(
        &ctx,
        Command::File(FileCommand::Download { id: "42".into(), dir: None }),
    )
    .await
    .expect("download succeeds");

    let expected = dir.path().join("file_42.xlsx");
    assert_eq!(output, expected.display().to_string());
    assert_eq!(std::fs::read(expected).unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn reply_to_unknown_email_sends_nothing() {
    let server = backend().await;
    let dir = TempDir::new().unwrap();
    let ctx = context(&server, &dir);

    let result = commands::execute(
        &ctx,
        Command::Mail(MailCommand::Reply { id: "404".into(), text: Some("Thanks".into()) }),
    )
    .await;

    assert!(matches!(result, Err(DeskError::Validation(_))));
    assert_eq!(requests_to(&server, "/api/emails/send").await, 0);
}

#[tokio::test]
async fn mail_config_is_not_saved_when_stored_record_is_unreadable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/email-config"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/email-config"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let ctx = context(&server, &dir);

    let result = commands::execute(
        &ctx,
        Command::Mail(MailCommand::Config(MailConfigArgs {
            smtp_server: Some("smtp.new.example".into()),
            ..Default::default()
        })),
    )
    .await;

    assert!(matches!(result, Err(DeskError::Api { status: 503, .. })));
    assert_eq!(ctx.notifications.error_count(), 1);
}

#[tokio::test]
async fn reply_reports_inbox_read_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/emails"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "IMAP down"})))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let ctx = context(&server, &dir);

    let result = commands::execute(
        &ctx,
        Command::Mail(MailCommand::Reply { id: "1".into(), text: Some("Thanks".into()) }),
    )
    .await;

    assert!(matches!(result, Err(DeskError::Api { status: 500, .. })));
    let notifications = ctx.notifications.drain();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].description, "IMAP down");
    assert_eq!(requests_to(&server, "/api/emails/send").await, 0);
}
