//! Poller lifecycle errors

use deskmate_domain::DeskError;
use thiserror::Error;

use crate::errors::InfraError;

/// Misuse or failure of a poller's start/stop lifecycle
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Poller already running")]
    AlreadyRunning,

    #[error("Poller not running")]
    NotRunning,

    /// Background task did not finish in time after cancellation
    #[error("Poll task did not stop within {seconds}s")]
    Timeout { seconds: u64 },

    /// The poll task panicked or was aborted
    #[error("Poll task failed: {0}")]
    TaskJoinFailed(String),
}

impl From<tokio::task::JoinError> for SchedulerError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::TaskJoinFailed(err.to_string())
    }
}

impl From<SchedulerError> for InfraError {
    fn from(err: SchedulerError) -> Self {
        InfraError(DeskError::Internal(err.to_string()))
    }
}

impl From<SchedulerError> for DeskError {
    fn from(err: SchedulerError) -> Self {
        InfraError::from(err).into()
    }
}

/// Result of poller lifecycle calls
pub type SchedulerResult<T> = Result<T, SchedulerError>;
