//! Domain types mirrored from the backend
//!
//! Every entity here is owned by the backend. The client only keeps
//! disposable copies scoped to a page visit, so none of these types carry
//! behaviour beyond small derived helpers.

pub mod calendar;
pub mod email;
pub mod file;
pub mod language;
pub mod log;
pub mod task;

use serde::{Deserialize, Serialize};

pub use calendar::{CalendarEvent, NewEvent};
pub use email::{Email, EmailAction, EmailActionRequest, EmailConfig, EmailStatus, SendReply};
pub use file::{FileKind, FileRequest, GeneratedFile, PreviewData};
pub use language::Language;
pub use log::{LogEntry, LogStatus};
pub use task::{NewTask, Task, TaskStatus, TaskType};

use crate::impl_wire_str_conversions;

/// Priority shared by emails and tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl_wire_str_conversions!(Priority {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Identifier of a backend record.
///
/// The backend hands out string ids (UUIDs in practice) but some fixtures
/// and older records use integers, so both are accepted on the way in.
pub(crate) mod id_format {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        })
    }
}

/// Deserialize `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
