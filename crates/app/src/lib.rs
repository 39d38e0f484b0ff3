//! # Deskmate App
//!
//! Terminal front end: CLI, wiring and rendering.
//!
//! This crate contains:
//! - The clap command line and its page-action commands
//! - Application context (dependency injection)
//! - The navigation shell owning the mounted page and its pollers
//! - Plain-text rendering of every page
//!
//! ## Architecture
//! - Depends on `domain`, `core` and `infra`
//! - Wires the REST client and download sink into the page view-models

pub mod cli;
pub mod commands;
pub mod context;
pub mod render;
pub mod shell;
pub mod utils;

pub use cli::{Cli, WatchKey};
pub use context::AppContext;
pub use shell::{MountedPage, Shell};
