use std::time::Duration;

use deskmate_domain::DeskError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "deskmate=info,deskmate_core=info,deskmate_infra=info";

/// Install the global subscriber. Logs go to stderr so rendered pages on
/// stdout stay clean.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing(json: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a stable identifier such as `"task::add"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, outcome: Result<(), &DeskError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match outcome {
        Ok(()) => info!(command, duration_ms, "command_execution_success"),
        Err(err) => {
            warn!(command, duration_ms, error_type = err.label(), "command_execution_failure");
        }
    }
}
