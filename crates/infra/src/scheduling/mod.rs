//! Polling infrastructure for mounted pages
//!
//! Pollers follow the runtime rules used throughout this crate:
//! - Explicit lifecycle management (start/stop)
//! - Join handles for spawned tasks
//! - Cancellation token support, with cancellation on drop
//! - Structured tracing

pub mod error;
pub mod poller;

pub use error::{SchedulerError, SchedulerResult};
pub use poller::Poller;
