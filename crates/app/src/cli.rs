//! Command-line surface
//!
//! ```bash
//! # Open the dashboard once
//! deskmate
//!
//! # Watch the activity log until Ctrl-C, in French
//! deskmate /logs --watch --lang fr
//!
//! # Page actions without opening a page
//! deskmate task add "Pay rent" --type expense --priority high --due 2024-05-01T09:00
//! deskmate file download 42 --dir ~/Downloads
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use deskmate_core::Route;
use deskmate_domain::constants::DEFAULT_REMINDER_MINUTES;
use deskmate_domain::{Config, EmailAction, Language, Priority, TaskStatus, TaskType};

#[derive(Debug, Parser)]
#[command(name = "deskmate")]
#[command(version)]
#[command(about = "Terminal dashboard for the personal assistant backend")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Page to open: /, /emails, /tasks, /calendar, /excel or /logs
    #[arg(value_parser = parse_route)]
    pub route: Option<Route>,

    /// Keep the page mounted and re-render until Ctrl-C
    #[arg(long, short)]
    pub watch: bool,

    /// Starting language (en or fr)
    #[arg(long, global = true, value_parser = parse_wire::<Language>)]
    pub lang: Option<Language>,

    /// Backend origin, overriding DESKMATE_BACKEND_URL
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Explicit config file (TOML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Page to open when no subcommand is given.
    pub fn route(&self) -> Route {
        self.route.unwrap_or(Route::Dashboard)
    }

    /// Layer flag values over the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(backend) = &self.backend {
            config.backend.url = backend.trim().to_string();
        }
        if let Some(language) = self.lang {
            config.ui.language = language;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Task board actions
    #[command(subcommand)]
    Task(TaskCommand),

    /// Calendar actions
    #[command(subcommand)]
    Event(EventCommand),

    /// Spreadsheet generation and download
    #[command(subcommand)]
    File(FileCommand),

    /// Inbox actions
    #[command(subcommand)]
    Mail(MailCommand),
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Create a task (filed under "todo" by the backend)
    Add {
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long = "type", default_value = "email", value_parser = parse_wire::<TaskType>)]
        task_type: TaskType,

        #[arg(long, default_value = "medium", value_parser = parse_wire::<Priority>)]
        priority: Priority,

        /// Due date, e.g. 2024-05-01T09:00
        #[arg(long, default_value = "")]
        due: String,
    },

    /// Move a task to another column
    Status {
        id: String,

        /// todo, in_validation or done
        #[arg(value_parser = parse_wire::<TaskStatus>)]
        status: TaskStatus,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Create a calendar event
    Add {
        title: String,

        /// Start, e.g. 2024-05-01T09:00
        #[arg(long)]
        start: String,

        /// End, e.g. 2024-05-01T10:00
        #[arg(long)]
        end: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Reminder lead time in minutes
        #[arg(long, default_value_t = DEFAULT_REMINDER_MINUTES)]
        reminder: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// Ask the backend to generate a spreadsheet
    Create {
        /// What the spreadsheet should contain
        request: String,

        /// Tabular data as JSON
        #[arg(long, conflicts_with = "sample")]
        data: Option<String>,

        /// Attach the built-in sample data
        #[arg(long)]
        sample: bool,
    },

    /// Save a generated file as file_{id}.xlsx
    Download {
        id: String,

        /// Target directory, overriding DESKMATE_DOWNLOAD_DIR
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum MailCommand {
    /// Pull and analyse new mail on the backend
    Fetch,

    /// Send a reply, defaulting to the backend's draft
    Reply {
        id: String,

        #[arg(long)]
        text: Option<String>,
    },

    /// Mark an email as read or archive it
    Action {
        id: String,

        /// mark_read or archive
        #[arg(value_parser = parse_wire::<EmailAction>)]
        action: EmailAction,
    },

    /// Update the stored mail account settings
    Config(MailConfigArgs),
}

/// Fields left unset keep their stored value.
#[derive(Debug, Clone, Default, Args)]
pub struct MailConfigArgs {
    #[arg(long)]
    pub imap_server: Option<String>,

    #[arg(long)]
    pub imap_port: Option<u16>,

    #[arg(long)]
    pub smtp_server: Option<String>,

    #[arg(long)]
    pub smtp_port: Option<u16>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

/// Accepts `/tasks`, `tasks` and `dashboard` for `/`.
pub fn parse_route(raw: &str) -> Result<Route, String> {
    let trimmed = raw.trim();
    let path = match trimmed {
        "dashboard" | "home" => "/".to_string(),
        p if p.starts_with('/') => p.to_string(),
        p => format!("/{p}"),
    };

    Route::from_path(&path).ok_or_else(|| {
        let known: Vec<&str> = Route::ALL.iter().map(|route| route.path()).collect();
        format!("unknown page '{raw}' (expected one of {})", known.join(", "))
    })
}

fn parse_wire<T>(raw: &str) -> Result<T, String>
where
    T: FromStr<Err = String>,
{
    raw.parse()
}

/// Single-line commands accepted while watching a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchKey {
    ToggleLanguage,
    Quit,
}

impl WatchKey {
    pub const HELP: &'static str = "[l] language  [q] quit";

    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "l" => Some(Self::ToggleLanguage),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}
