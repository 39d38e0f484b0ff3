//! Fixed-interval poller for a mounted page resource.
//!
//! A `Poller` re-reads one [`Refreshable`] every `interval` until stopped or
//! dropped. The first refresh happens one full interval after `start`; the
//! page's mount already issued the initial read.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use deskmate_core::ActivityFeed;
//! use deskmate_infra::scheduling::Poller;
//!
//! # async fn example(feed: Arc<ActivityFeed>) -> Result<(), deskmate_infra::scheduling::SchedulerError> {
//! let mut poller = Poller::new(feed.clone(), feed.poll_interval());
//! poller.start().await?;
//! // ... page stays mounted ...
//! poller.stop().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use deskmate_core::Refreshable;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// How long `stop` waits for an in-flight refresh to finish.
const JOIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Cancellable timer driving one resource's re-reads
pub struct Poller {
    target: Arc<dyn Refreshable>,
    interval: Duration,
    cancellation: CancellationToken,
    task_handle: TaskHandle,
}

impl Poller {
    pub fn new(target: Arc<dyn Refreshable>, interval: Duration) -> Self {
        Self {
            target,
            interval,
            cancellation: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the background loop.
    ///
    /// # Errors
    ///
    /// Returns error if the poller is already running
    #[instrument(skip(self), fields(resource = self.target.resource_name()))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        // Fresh token so a stopped poller can be restarted
        self.cancellation = CancellationToken::new();

        let target = Arc::clone(&self.target);
        let interval = self.interval;
        let cancel = self.cancellation.clone();
        let handle = tokio::spawn(async move {
            Self::poll_loop(target, interval, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        info!(interval_ms = self.interval.as_millis() as u64, "poller started");
        Ok(())
    }

    /// Cancel the loop and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns error if the poller is not running, or the task fails to
    /// finish within the join timeout
    #[instrument(skip(self), fields(resource = self.target.resource_name()))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            tokio::time::timeout(JOIN_TIMEOUT, handle)
                .await
                .map_err(|_| SchedulerError::Timeout { seconds: JOIN_TIMEOUT.as_secs() })??;
        }

        info!("poller stopped");
        Ok(())
    }

    /// A poller is running if it has an active task handle that hasn't
    /// finished.
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    async fn poll_loop(
        target: Arc<dyn Refreshable>,
        interval: Duration,
        cancel: CancellationToken,
    ) {
        let resource = target.resource_name();
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(resource, "poll loop cancelled");
                    break;
                }
                _ = tokio::time::sleep(interval) => {
                    debug!(resource, "poll tick");
                    target.refresh().await;
                }
            }
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        if self.is_running() {
            warn!(resource = self.target.resource_name(), "poller dropped while running; cancelling");
        }
        self.cancellation.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct CountingTarget {
        refreshes: AtomicUsize,
    }

    impl CountingTarget {
        fn new() -> Arc<Self> {
            Arc::new(Self { refreshes: AtomicUsize::new(0) })
        }

        fn count(&self) -> usize {
            self.refreshes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Refreshable for CountingTarget {
        fn resource_name(&self) -> &'static str {
            "counter"
        }

        async fn refresh(&self) {
            self.refreshes.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Let the spawned loop observe the current (paused) clock.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn one_refresh_per_tick_starting_after_one_interval() {
        let target = CountingTarget::new();
        let mut poller = Poller::new(target.clone(), Duration::from_secs(5));
        poller.start().await.expect("start succeeds");
        settle().await;
        assert_eq!(target.count(), 0);

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(target.count(), 1);

        for _ in 0..3 {
            tokio::time::advance(Duration::from_secs(5)).await;
            settle().await;
        }
        assert_eq!(target.count(), 4);

        poller.stop().await.expect("stop succeeds");
    }

    #[tokio::test(start_paused = true)]
    async fn no_refresh_after_stop() {
        let target = CountingTarget::new();
        let mut poller = Poller::new(target.clone(), Duration::from_secs(10));
        poller.start().await.expect("start succeeds");
        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        poller.stop().await.expect("stop succeeds");
        let after_stop = target.count();

        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;

        assert_eq!(target.count(), after_stop);
        assert!(!poller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_cancels_the_loop() {
        let target = CountingTarget::new();
        let mut poller = Poller::new(target.clone(), Duration::from_secs(5));
        poller.start().await.expect("start succeeds");
        drop(poller);
        settle().await;

        tokio::time::advance(Duration::from_secs(30)).await;
        settle().await;

        assert_eq!(target.count(), 0);
    }

    #[tokio::test]
    async fn double_start_is_rejected() {
        let mut poller = Poller::new(CountingTarget::new(), Duration::from_secs(60));
        poller.start().await.expect("first start");
        let err = poller.start().await.expect_err("second start fails");
        assert!(matches!(err, SchedulerError::AlreadyRunning));
        poller.stop().await.expect("stop succeeds");
    }

    #[tokio::test]
    async fn stop_without_start_is_rejected() {
        let mut poller = Poller::new(CountingTarget::new(), Duration::from_secs(60));
        assert!(matches!(poller.stop().await, Err(SchedulerError::NotRunning)));
    }

    #[tokio::test]
    async fn restart_after_stop_succeeds() {
        let mut poller = Poller::new(CountingTarget::new(), Duration::from_secs(60));
        poller.start().await.expect("start succeeds");
        poller.stop().await.expect("stop succeeds");
        assert!(!poller.is_running());

        poller.start().await.expect("start again");
        assert!(poller.is_running());
        poller.stop().await.expect("stop again");
    }
}
