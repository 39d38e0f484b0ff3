//! Assistant backend API client
//!
//! `ApiClient` implements the core `AssistantApi` port over the REST
//! surface mounted at `<backend>/api`.
//!
//! # Architecture
//!
//! - Uses the crate's `HttpClient` (no direct reqwest elsewhere)
//! - One request per call: no retry, no timeout, no auth header
//! - Non-2xx answers are classified by `ApiError` and carry the backend's
//!   `detail` message through to `DeskError::Api`

pub mod client;
pub mod errors;

pub use client::ApiClient;
pub use errors::{extract_detail, ApiError, ApiErrorCategory};
