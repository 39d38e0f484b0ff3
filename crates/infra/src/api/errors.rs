//! API-specific error types
//!
//! Classifies transport and HTTP failures coming back from the assistant
//! backend. Nothing here is retried; the category only drives logging and
//! the mapping into [`DeskError`].

use deskmate_domain::DeskError;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::errors::InfraError;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx)
    Client,
    /// Network/connection errors
    Network,
    /// Body did not have the expected shape
    Decode,
    /// Bad base URL or request construction
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Server error {status}{}", fmt_detail(.detail))]
    Server { status: u16, detail: Option<String> },

    #[error("Client error {status}{}", fmt_detail(.detail))]
    Client { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Build from a non-2xx status and its raw body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = extract_detail(body);
        let status = status.as_u16();
        if (500..600).contains(&status) {
            Self::Server { status, detail }
        } else {
            Self::Client { status, detail }
        }
    }

    /// The backend's `detail` message, if the error body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } | Self::Client { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Pull the human-readable `detail` out of an error body.
///
/// Accepts `{"detail": "..."}` and the list form
/// `{"detail": [{"msg": "..."}, ...]}` used for request validation errors.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> =
                items.iter().filter_map(|item| item.get("msg").and_then(Value::as_str)).collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

impl From<ApiError> for DeskError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Server { status, detail } | ApiError::Client { status, detail } => {
                DeskError::Api { status, detail }
            }
            ApiError::Network(message) => DeskError::Network(message),
            ApiError::Decode(message) => DeskError::Decode(message),
            ApiError::Config(message) => DeskError::Config(message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        DeskError::from(InfraError::from(err)).into()
    }
}

impl From<DeskError> for ApiError {
    fn from(err: DeskError) -> Self {
        match err {
            DeskError::Network(message) => Self::Network(message),
            DeskError::Api { status, detail } if status >= 500 => Self::Server { status, detail },
            DeskError::Api { status, detail } => Self::Client { status, detail },
            DeskError::Decode(message) => Self::Decode(message),
            DeskError::Config(message) | DeskError::Validation(message) => Self::Config(message),
            DeskError::Io(message) | DeskError::Internal(message) => Self::Network(message),
        }
    }
}
