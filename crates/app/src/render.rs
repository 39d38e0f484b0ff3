//! Plain-text rendering of pages
//!
//! Pure functions from view state to text. Everything user-facing goes
//! through the translator; backend content is shown as received.

use deskmate_core::{
    CalendarPage, DashboardPage, EmailsPage, FilesPage, LoadPhase, LogsPage, NavItem,
    Notification, TasksPage, Translator,
};
use deskmate_domain::utils::time::format_timestamp;
use deskmate_domain::{CalendarEvent, LogEntry, Priority};

use crate::shell::MountedPage;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const CLOCK_FORMAT: &str = "%H:%M";

/// Full screen: side panel, then the page body.
pub fn render_screen(nav: &[NavItem], page: &MountedPage, t: Translator) -> String {
    let mut out = render_nav(nav, t);
    out.push('\n');
    out.push_str(&render_page(page, t));
    out
}

pub fn render_nav(nav: &[NavItem], t: Translator) -> String {
    let entries: Vec<String> = nav
        .iter()
        .map(|item| if item.active { format!("[{}]", item.label) } else { item.label.clone() })
        .collect();
    format!("{} | {}  ({})\n", t.t("appName"), entries.join("  "), t.language().native_name())
}

pub fn render_page(page: &MountedPage, t: Translator) -> String {
    match page {
        MountedPage::Dashboard(page) => render_dashboard(page, t),
        MountedPage::Emails(page) => render_emails(page, t),
        MountedPage::Tasks(page) => render_tasks(page, t),
        MountedPage::Calendar(page) => render_calendar(page, t),
        MountedPage::Excel(page) => render_files(page, t),
        MountedPage::Logs(page) => render_logs(page, t),
    }
}

/// `Success: Task created`
pub fn render_notification(notification: &Notification) -> String {
    format!("{}: {}", notification.title, notification.description)
}

fn heading(title: &str) -> String {
    format!("{title}\n{}\n", "=".repeat(title.chars().count()))
}

fn loading_line(phase: LoadPhase, t: Translator) -> Option<String> {
    (phase == LoadPhase::Loading).then(|| format!("  {}\n", t.t("loading")))
}

fn priority_label(priority: Priority, t: Translator) -> &'static str {
    t.t(priority.as_str())
}

pub fn render_dashboard(page: &DashboardPage, t: Translator) -> String {
    let mut out = heading(t.t("dashboard"));
    if let Some(line) = loading_line(page.phase(), t) {
        out.push_str(&line);
    }

    let stats = page.stats();
    for (key, value) in [
        ("unreadEmails", stats.unread_emails),
        ("upcomingEvents", stats.today_events),
        ("tasks", stats.todo_tasks),
        ("excelFiles", stats.files),
    ] {
        out.push_str(&format!("  {:<24}{value}\n", t.t(key)));
    }

    out.push_str(&format!("\n{}\n", t.t("quickActions")));
    for action in page.quick_actions() {
        let target = action.target.map_or("-", |route| route.path());
        out.push_str(&format!("  {:<24}{target}\n", t.t(action.label_key)));
    }

    out.push_str(&format!("\n{}\n", t.t("recentActivity")));
    out.push_str(&render_log_rows(&page.feed().entries()));
    out
}

pub fn render_emails(page: &EmailsPage, t: Translator) -> String {
    let mut out = heading(t.t("emailInbox"));
    if let Some(line) = loading_line(page.phase(), t) {
        out.push_str(&line);
    }

    match page.config() {
        Some(config) => out.push_str(&format!("  {}: {}\n\n", t.t("emailConfig"), config.email)),
        None => out.push_str(&format!("  {}: -\n\n", t.t("emailConfig"))),
    }

    for email in page.emails() {
        let marker = if email.is_unread() { "*" } else { " " };
        out.push_str(&format!(
            "{marker} #{} [{}] {}\n    {}: {}\n",
            email.id,
            priority_label(email.priority, t),
            email.subject,
            t.t("from"),
            email.from_email,
        ));
        if let Some(summary) = email.summary.as_deref().filter(|s| !s.trim().is_empty()) {
            out.push_str(&format!("    {}: {summary}\n", t.t("summary")));
        }
        if let Some(draft) = email.draft() {
            out.push_str(&format!("    {}: {draft}\n", t.t("draftResponse")));
        }
    }
    out
}

pub fn render_tasks(page: &TasksPage, t: Translator) -> String {
    let mut out = heading(t.t("taskBoard"));
    if let Some(line) = loading_line(page.phase(), t) {
        out.push_str(&line);
    }

    let board = page.board();
    for (_, label_key, tasks) in board.columns() {
        out.push_str(&format!("\n{} ({})\n", t.t(label_key), tasks.len()));
        for task in tasks {
            out.push_str(&format!(
                "  #{} [{}] {} ({})",
                task.id,
                priority_label(task.priority, t),
                task.title,
                task.task_type,
            ));
            if let Some(due) = task.due_date.as_deref().filter(|d| !d.trim().is_empty()) {
                let due = format_timestamp(due, TIME_FORMAT);
                out.push_str(&format!(" {}: {due}", t.t("dueDate")));
            }
            out.push('\n');
        }
    }
    out
}

pub fn render_calendar(page: &CalendarPage, t: Translator) -> String {
    let mut out = heading(t.t("calendarView"));
    if let Some(line) = loading_line(page.phase(), t) {
        out.push_str(&line);
    }

    for (day, events) in page.events_by_day() {
        let selected = if day == page.selected_date() { " <" } else { "" };
        out.push_str(&format!("\n{}{selected}\n", day.format("%A %Y-%m-%d")));
        for event in events {
            out.push_str(&render_event(&event));
        }
    }
    out
}

fn render_event(event: &CalendarEvent) -> String {
    let mut line = format!(
        "  {}-{} {}",
        format_timestamp(&event.start_time, CLOCK_FORMAT),
        format_timestamp(&event.end_time, CLOCK_FORMAT),
        event.title,
    );
    if !event.description.trim().is_empty() {
        line.push_str(&format!(" ({})", event.description));
    }
    line.push('\n');
    line
}

pub fn render_files(page: &FilesPage, t: Translator) -> String {
    let mut out = heading(t.t("dataManagement"));
    if let Some(line) = loading_line(page.phase(), t) {
        out.push_str(&line);
    }

    for file in page.files() {
        out.push_str(&format!(
            "  #{} {} [{}] {}",
            file.id,
            file.name,
            file.file_type,
            format_timestamp(&file.created_at, TIME_FORMAT),
        ));
        if let Some(preview) = &file.preview_data {
            out.push_str(&format!(" {}x{}", preview.rows, preview.columns));
        }
        out.push('\n');
    }
    out
}

pub fn render_logs(page: &LogsPage, t: Translator) -> String {
    let mut out = heading(t.t("activityLogs"));
    if let Some(line) = loading_line(page.phase(), t) {
        out.push_str(&line);
    }
    out.push_str(&format!(
        "  {:<17} {:<24} {:<10} {}\n",
        t.t("time"),
        t.t("action"),
        t.t("status"),
        t.t("details")
    ));
    out.push_str(&render_log_rows(&page.entries()));
    out
}

fn render_log_rows(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "  {:<17} {:<24} {:<10} {}\n",
                format_timestamp(&entry.timestamp, TIME_FORMAT),
                entry.action,
                entry.status.as_str(),
                entry.details
            )
        })
        .collect()
}
