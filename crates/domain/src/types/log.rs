//! Activity log types

use serde::{Deserialize, Serialize};

use super::{id_format, null_as_default};
use crate::impl_wire_str_conversions;

/// Append-only record of a backend side effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(deserialize_with = "id_format::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
    #[serde(default)]
    pub status: LogStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    Completed,
    #[default]
    Pending,
    Failed,
    #[serde(other)]
    Other,
}

impl_wire_str_conversions!(LogStatus {
    Completed => "completed",
    Pending => "pending",
    Failed => "failed",
    Other => "other",
});
