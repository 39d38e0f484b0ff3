//! Email triage types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{id_format, null_as_default, Priority};
use crate::constants::{DEFAULT_IMAP_PORT, DEFAULT_SMTP_PORT};
use crate::impl_wire_str_conversions;

/// Email as analysed by the backend (summary and draft reply included)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    #[serde(deserialize_with = "id_format::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_email: String,
    #[serde(default)]
    pub status: EmailStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub draft_response: Option<String>,
}

impl Email {
    pub fn is_unread(&self) -> bool {
        self.status == EmailStatus::Unread
    }

    /// Draft reply, if the backend produced a non-empty one.
    pub fn draft(&self) -> Option<&str> {
        self.draft_response.as_deref().filter(|draft| !draft.trim().is_empty())
    }
}

/// Triage state. Open-ended on the backend side; unknown values map to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    #[default]
    Unread,
    Read,
    Responded,
    Archived,
    #[serde(other)]
    Other,
}

impl_wire_str_conversions!(EmailStatus {
    Unread => "unread",
    Read => "read",
    Responded => "responded",
    Archived => "archived",
    Other => "other",
});

/// Quick actions available on a single email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailAction {
    MarkRead,
    Archive,
}

impl_wire_str_conversions!(EmailAction {
    MarkRead => "mark_read",
    Archive => "archive",
});

/// Body of `POST /emails/action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailActionRequest {
    pub email_id: String,
    pub action: EmailAction,
}

/// Body of `POST /emails/send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReply {
    pub email_id: String,
    pub response_text: String,
}

/// Mail account settings, a single record on the backend
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub imap_server: String,
    pub imap_port: u16,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub email: String,
    pub password: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            imap_server: String::new(),
            imap_port: DEFAULT_IMAP_PORT,
            smtp_server: String::new(),
            smtp_port: DEFAULT_SMTP_PORT,
            email: String::new(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("imap_server", &self.imap_server)
            .field("imap_port", &self.imap_port)
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_backend_email() {
        let email: Email = serde_json::from_value(json!({
            "id": "e-1",
            "subject": "Invoice",
            "from_email": "billing@example.com",
            "status": "unread",
            "priority": "high",
            "summary": "Invoice due Friday",
            "draft_response": "Thanks, will pay.",
            "received_at": "2024-05-01T09:00:00"
        }))
        .unwrap();

        assert_eq!(email.id, "e-1");
        assert!(email.is_unread());
        assert_eq!(email.priority, Priority::High);
        assert_eq!(email.draft(), Some("Thanks, will pay."));
    }

    #[test]
    fn unknown_status_maps_to_other() {
        let email: Email =
            serde_json::from_value(json!({"id": 7, "status": "snoozed", "subject": null})).unwrap();
        assert_eq!(email.id, "7");
        assert_eq!(email.status, EmailStatus::Other);
        assert_eq!(email.subject, "");
    }

    #[test]
    fn blank_draft_is_not_a_draft() {
        let email: Email =
            serde_json::from_value(json!({"id": "e", "draft_response": "  "})).unwrap();
        assert_eq!(email.draft(), None);
    }

    #[test]
    fn action_request_wire_shape() {
        let body = EmailActionRequest { email_id: "e-9".into(), action: EmailAction::MarkRead };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"email_id": "e-9", "action": "mark_read"})
        );
    }

    #[test]
    fn config_debug_redacts_password() {
        let config = EmailConfig { password: "hunter2".into(), ..EmailConfig::default() };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("993"));
    }
}
