//! Configuration loader
//!
//! ## Loading Strategy
//! 1. `.env` in the working directory (or a parent) is loaded via `dotenvy`
//! 2. A config file is read if one is found, otherwise defaults are used
//! 3. Environment variables override file values
//! 4. The result is validated; a missing or malformed backend URL is fatal
//!
//! ## Environment Variables
//! - `DESKMATE_BACKEND_URL`: Backend origin (required, `/api` is appended by
//!   the client)
//! - `DESKMATE_LOGS_POLL_SECS`: Logs page poll interval in seconds
//! - `DESKMATE_FEED_POLL_SECS`: Dashboard activity widget poll interval
//! - `DESKMATE_FEED_LIMIT`: Entries shown by the activity widget
//! - `DESKMATE_LANGUAGE`: Starting language (`en` or `fr`)
//! - `DESKMATE_DOWNLOAD_DIR`: Directory downloaded files are saved to
//!
//! ## File Locations
//! The loader probes the working directory, then the executable's directory,
//! for `deskmate.toml`, `deskmate.json`, `config.toml` and `config.json`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use deskmate_domain::{Config, DeskError, Language, Result};
use url::Url;

pub const ENV_BACKEND_URL: &str = "DESKMATE_BACKEND_URL";
pub const ENV_LOGS_POLL_SECS: &str = "DESKMATE_LOGS_POLL_SECS";
pub const ENV_FEED_POLL_SECS: &str = "DESKMATE_FEED_POLL_SECS";
pub const ENV_FEED_LIMIT: &str = "DESKMATE_FEED_LIMIT";
pub const ENV_LANGUAGE: &str = "DESKMATE_LANGUAGE";
pub const ENV_DOWNLOAD_DIR: &str = "DESKMATE_DOWNLOAD_DIR";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["deskmate.toml", "deskmate.json", "config.toml", "config.json"];

/// Load configuration from `.env`, an optional file and the environment.
///
/// # Errors
/// Returns `DeskError::Config` if a file is malformed, a variable has an
/// invalid value, or no usable backend URL is configured.
pub fn load() -> Result<Config> {
    let config = resolve(None)?;
    validate(&config)?;
    tracing::info!(backend = %config.backend.url, "configuration loaded");
    Ok(config)
}

/// Merge `.env`, a config file and the environment without validating.
///
/// `path` names the file explicitly; `None` probes the standard locations
/// and falls back to defaults when nothing is found. Callers layering their
/// own overrides (CLI flags) validate afterwards.
///
/// # Errors
/// Returns `DeskError::Config` if `.env` or the file is malformed or a
/// variable has an invalid value.
pub fn resolve(path: Option<PathBuf>) -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => return Err(DeskError::Config(format!("Invalid .env file: {err}"))),
    }

    let mut config = match path.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `DeskError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DeskError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DeskError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DeskError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DeskError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DeskError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DeskError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the working directory or next to the
/// executable.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Overlay variables returned by `lookup` onto `config`.
///
/// # Errors
/// Returns `DeskError::Config` naming the variable whose value is invalid.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_BACKEND_URL) {
        config.backend.url = url.trim().to_string();
    }
    if let Some(secs) = parse_var(&lookup, ENV_LOGS_POLL_SECS)? {
        config.polling.logs_interval_seconds = secs;
    }
    if let Some(secs) = parse_var(&lookup, ENV_FEED_POLL_SECS)? {
        config.polling.feed_interval_seconds = secs;
    }
    if let Some(limit) = parse_var(&lookup, ENV_FEED_LIMIT)? {
        config.polling.feed_limit = limit;
    }
    if let Some(language) = parse_var::<Language, _>(&lookup, ENV_LANGUAGE)? {
        config.ui.language = language;
    }
    if let Some(dir) = lookup(ENV_DOWNLOAD_DIR).filter(|dir| !dir.trim().is_empty()) {
        config.downloads.directory = PathBuf::from(dir);
    }
    Ok(())
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| DeskError::Config(format!("Invalid {key} '{raw}': {e}"))),
    }
}

/// Check the configuration can start a session.
///
/// # Errors
/// Returns `DeskError::Config` if the backend URL is empty or not an
/// http(s) URL.
pub fn validate(config: &Config) -> Result<()> {
    let raw = config.backend.url.trim();
    if raw.is_empty() {
        return Err(DeskError::Config(format!(
            "Backend URL is not configured; set {ENV_BACKEND_URL}"
        )));
    }

    let url = Url::parse(raw)
        .map_err(|e| DeskError::Config(format!("Invalid backend URL '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DeskError::Config(format!(
            "Backend URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(())
}
