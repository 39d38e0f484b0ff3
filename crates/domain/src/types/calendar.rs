//! Calendar event types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{id_format, null_as_default};
use crate::constants::DEFAULT_REMINDER_MINUTES;
use crate::utils::time::local_date_of;

/// Scheduled event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(deserialize_with = "id_format::deserialize")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    /// Minutes before `start_time`.
    #[serde(default)]
    pub reminder: Option<u32>,
}

impl CalendarEvent {
    /// Local calendar day the event starts on, if `start_time` parses.
    pub fn start_date(&self) -> Option<NaiveDate> {
        local_date_of(&self.start_time)
    }
}

/// Body of `POST /calendar`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub reminder: u32,
}

impl Default for NewEvent {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            reminder: DEFAULT_REMINDER_MINUTES,
        }
    }
}
