//! # Deskmate Domain
//!
//! Domain types mirrored from the assistant backend.
//!
//! This crate contains:
//! - Entities (emails, tasks, calendar events, generated files, log entries)
//! - Request bodies posted back to the backend
//! - The cross-crate error type and `Result` alias
//! - Configuration structures and defaults
//!
//! ## Architecture
//! - No dependencies on other Deskmate crates
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
