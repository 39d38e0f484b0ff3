//! Application constants
//!
//! Centralized location for domain-level constants shared by the pages,
//! the API client and the configuration loader.

// Backend
pub const API_PATH_PREFIX: &str = "/api";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// Polling cadence
pub const LOGS_POLL_INTERVAL_SECS: u64 = 5;
pub const FEED_POLL_INTERVAL_SECS: u64 = 10;
pub const FEED_WIDGET_LIMIT: usize = 5;

// Email account defaults (implicit TLS ports)
pub const DEFAULT_IMAP_PORT: u16 = 993;
pub const DEFAULT_SMTP_PORT: u16 = 465;

// Calendar
pub const DEFAULT_REMINDER_MINUTES: u32 = 30;

// Downloads
pub const DOWNLOAD_FILE_PREFIX: &str = "file_";
pub const DOWNLOAD_FILE_EXTENSION: &str = "xlsx";
