//! Command execution helpers

use std::future::Future;
use std::time::Instant;

use deskmate_domain::Result;

use crate::utils::logging::log_command_execution;

/// Run one command, timing it and logging the outcome.
///
/// # Example
///
/// ```rust,ignore
/// let output = execute_with_logging("task::add", async {
///     page.submit_create().await?;
///     Ok(render_tasks(&page, t))
/// })
/// .await?;
/// ```
pub async fn execute_with_logging<F, T>(command_name: &str, command: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let result = command.await;
    log_command_execution(command_name, start.elapsed(), result.as_ref().map(|_| ()));
    result
}
