//! # Deskmate Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The REST client for the assistant backend (`AssistantApi`)
//! - The shared HTTP transport
//! - Configuration loading (`.env`, file, environment)
//! - Pollers that keep live pages fresh
//! - The on-disk download sink (`FileSink`)
//!
//! ## Architecture
//! - Implements traits defined in `deskmate-core`
//! - Depends on `deskmate-domain` and `deskmate-core`
//! - Contains all "impure" code (network, filesystem, timers)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod scheduling;
pub mod storage;

// Re-export commonly used items
pub use api::{ApiClient, ApiError, ApiErrorCategory};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use scheduling::{Poller, SchedulerError};
pub use storage::DiskFileSink;
