//! Configuration loading
//!
//! Reads `.env`, an optional TOML/JSON file and `DESKMATE_*` environment
//! variables into a validated [`deskmate_domain::Config`].

pub mod loader;

pub use loader::{
    apply_overrides, load, load_from_file, probe_config_paths, resolve, validate,
};
