//! # Deskmate Core
//!
//! Client-side behaviour of the dashboard, free of any transport.
//!
//! This crate contains:
//! - Port interfaces (backend API, file sink, notifications)
//! - The view-state cell every page keeps its copy of a resource in
//! - Page view-models implementing the refresh/mutate contract
//! - Localization context, navigation table and the activity feed
//!
//! ## Architecture Principles
//! - Only depends on `deskmate-domain`
//! - No HTTP, filesystem or timer code; infra supplies those
//! - All external collaborators via traits

pub mod feed;
pub mod forms;
pub mod i18n;
pub mod navigation;
pub mod notifications;
pub mod pages;
pub mod ports;
pub mod view_state;

// Re-export specific items to avoid ambiguity
pub use feed::{ActivityFeed, FeedOptions};
pub use forms::FormState;
pub use i18n::{LanguageContext, Translator};
pub use navigation::{nav_items, quick_actions, NavItem, QuickAction, Route};
pub use notifications::{Notification, NotificationCenter, NotificationLevel, Notifier};
pub use pages::{
    CalendarPage, DashboardPage, DashboardStats, EmailsPage, FileDraft, FilesPage, LogsPage, Page,
    PageContext, ReplyDraft, TaskBoard, TasksPage,
};
pub use ports::{AssistantApi, FileSink, Refreshable};
pub use view_state::{Applied, LoadPhase, Resource, Ticket};
