//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Deskmate
///
/// Every failure a page can observe collapses into one of these variants
/// before it reaches the page boundary, where it is logged and, for writes,
/// turned into a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DeskError {
    /// Transport failure: connection refused, DNS, reset, body read.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status.
    #[error("Backend returned {status}{}", fmt_detail(.detail))]
    Api {
        status: u16,
        /// Human-readable `detail` from the response body, when present.
        detail: Option<String>,
    },

    /// Response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Local validation rejected user input before any request was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl DeskError {
    /// The backend's own explanation of a failure, if it sent one.
    pub fn user_detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            Self::Validation(message) => Some(message),
            _ => None,
        }
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Api { .. } => "api",
            Self::Decode(_) => "decode",
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<std::io::Error> for DeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Deskmate operations
pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_detail() {
        let err = DeskError::Api { status: 400, detail: Some("IMAP login failed".into()) };
        assert_eq!(err.to_string(), "Backend returned 400: IMAP login failed");

        let bare = DeskError::Api { status: 502, detail: None };
        assert_eq!(bare.to_string(), "Backend returned 502");
    }

    #[test]
    fn user_detail_only_for_api_and_validation() {
        let api = DeskError::Api { status: 422, detail: Some("bad date".into()) };
        assert_eq!(api.user_detail(), Some("bad date"));
        assert_eq!(DeskError::Validation("Title is required".into()).user_detail(), Some("Title is required"));
        assert_eq!(DeskError::Network("refused".into()).user_detail(), None);
    }

    #[test]
    fn serializes_with_tag() {
        let json = serde_json::to_value(DeskError::Config("missing url".into())).unwrap();
        assert_eq!(json["type"], "Config");
        assert_eq!(json["message"], "missing url");
    }
}
