//! Conversions from external infrastructure errors into domain errors.

use deskmate_domain::DeskError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DeskError);

impl From<InfraError> for DeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DeskError> for InfraError {
    fn from(value: DeskError) -> Self {
        InfraError(value)
    }
}

trait IntoDeskError {
    fn into_desk(self) -> DeskError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DeskError */
/* -------------------------------------------------------------------------- */

impl IntoDeskError for HttpError {
    fn into_desk(self) -> DeskError {
        if self.is_builder() {
            return DeskError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_timeout() {
            return DeskError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return DeskError::Network(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            return DeskError::Api { status: status.as_u16(), detail: None };
        }

        if self.is_decode() {
            return DeskError::Decode(self.to_string());
        }

        DeskError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_desk())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → DeskError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(DeskError::Decode(value.to_string()))
    }
}
