//! Page-scoped view state for one backend resource
//!
//! A [`Resource`] holds the page's disposable copy of a backend collection.
//! It moves `Empty → Loading → Loaded` and re-enters `Loaded` on every
//! successful refetch. Reads that fail keep whatever was there before.
//!
//! Reads may overlap (mount, timer tick and a post-write resync can all be
//! in flight together). Every read takes a [`Ticket`] from a monotonically
//! increasing counter and only the response carrying the newest ticket is
//! applied; older responses are dropped on arrival.

use std::future::Future;

use deskmate_domain::{DeskError, Result};
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Lifecycle of a resource within a page visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet, or the first read failed.
    Empty,
    /// First read in flight.
    Loading,
    /// At least one read succeeded.
    Loaded,
}

/// Sequence number of an issued read
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// What happened to a completed read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Response replaced the local copy.
    Updated,
    /// A newer read was issued meanwhile; response discarded.
    Superseded,
    /// Latest read failed; previous data kept.
    Failed(DeskError),
}

impl Applied {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

struct Inner<T> {
    value: T,
    phase: LoadPhase,
    issued: u64,
    updates: u64,
    stale: bool,
}

/// Shared cell holding a page's copy of one resource
pub struct Resource<T> {
    name: &'static str,
    inner: Mutex<Inner<T>>,
}

impl<T: Clone + Default> Resource<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Mutex::new(Inner {
                value: T::default(),
                phase: LoadPhase::Empty,
                issued: 0,
                updates: 0,
                stale: false,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a new read and hand back its ticket.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.inner.lock();
        inner.issued += 1;
        if inner.phase == LoadPhase::Empty {
            inner.phase = LoadPhase::Loading;
        }
        Ticket(inner.issued)
    }

    /// Settle a read started with [`Resource::begin`].
    pub fn complete(&self, ticket: Ticket, outcome: Result<T>) -> Applied {
        let mut inner = self.inner.lock();
        if ticket.0 != inner.issued {
            debug!(
                resource = self.name,
                ticket = ticket.0,
                latest = inner.issued,
                "discarding superseded response"
            );
            return Applied::Superseded;
        }

        match outcome {
            Ok(value) => {
                inner.value = value;
                inner.phase = LoadPhase::Loaded;
                inner.updates += 1;
                inner.stale = false;
                Applied::Updated
            }
            Err(err) => {
                warn!(resource = self.name, error = %err, "read failed; keeping previous data");
                if inner.phase == LoadPhase::Loading {
                    inner.phase = if inner.updates == 0 { LoadPhase::Empty } else { LoadPhase::Loaded };
                }
                inner.stale = true;
                Applied::Failed(err)
            }
        }
    }

    /// Issue a read through `fetch` and apply its outcome.
    ///
    /// The ticket is taken before `fetch` is first polled, so a read started
    /// later always wins regardless of which response lands first.
    pub async fn load<F>(&self, fetch: F) -> Applied
    where
        F: Future<Output = Result<T>>,
    {
        let ticket = self.begin();
        let outcome = fetch.await;
        self.complete(ticket, outcome)
    }

    /// Clone of the current local copy.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Borrow the current local copy for a derived view.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.lock().value)
    }

    pub fn phase(&self) -> LoadPhase {
        self.inner.lock().phase
    }

    /// Whether the most recent read failed and the copy may be out of date.
    pub fn is_stale(&self) -> bool {
        self.inner.lock().stale
    }

    /// Number of responses applied so far.
    pub fn updates(&self) -> u64 {
        self.inner.lock().updates
    }

    /// Latest ticket handed out, if any.
    #[cfg(test)]
    fn latest_ticket(&self) -> Option<Ticket> {
        let issued = self.inner.lock().issued;
        (issued > 0).then_some(Ticket(issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> Resource<Vec<u32>> {
        Resource::new("numbers")
    }

    #[test]
    fn starts_empty() {
        let res = resource();
        assert_eq!(res.phase(), LoadPhase::Empty);
        assert!(res.get().is_empty());
        assert_eq!(res.latest_ticket(), None);
    }

    #[test]
    fn successful_read_loads() {
        let res = resource();
        let ticket = res.begin();
        assert_eq!(res.phase(), LoadPhase::Loading);

        assert_eq!(res.complete(ticket, Ok(vec![1, 2])), Applied::Updated);
        assert_eq!(res.phase(), LoadPhase::Loaded);
        assert_eq!(res.get(), vec![1, 2]);
        assert_eq!(res.updates(), 1);
    }

    #[test]
    fn failed_first_read_returns_to_empty() {
        let res = resource();
        let ticket = res.begin();
        let outcome = res.complete(ticket, Err(DeskError::Network("refused".into())));

        assert!(matches!(outcome, Applied::Failed(DeskError::Network(_))));
        assert_eq!(res.phase(), LoadPhase::Empty);
        assert!(res.is_stale());
    }

    #[test]
    fn failed_refetch_keeps_previous_data() {
        let res = resource();
        let first = res.begin();
        res.complete(first, Ok(vec![7]));

        let second = res.begin();
        assert_eq!(res.phase(), LoadPhase::Loaded);
        res.complete(second, Err(DeskError::Api { status: 500, detail: None }));

        assert_eq!(res.get(), vec![7]);
        assert_eq!(res.phase(), LoadPhase::Loaded);
        assert!(res.is_stale());
    }

    #[test]
    fn older_response_is_discarded_even_if_it_lands_last() {
        let res = resource();
        let mount = res.begin();
        let tick = res.begin();

        assert_eq!(res.complete(tick, Ok(vec![2])), Applied::Updated);
        assert_eq!(res.complete(mount, Ok(vec![1])), Applied::Superseded);
        assert_eq!(res.get(), vec![2]);
        assert_eq!(res.updates(), 1);
    }

    #[test]
    fn older_response_is_discarded_if_it_lands_first() {
        let res = resource();
        let mount = res.begin();
        let tick = res.begin();

        assert_eq!(res.complete(mount, Ok(vec![1])), Applied::Superseded);
        assert_eq!(res.phase(), LoadPhase::Loading);
        assert_eq!(res.complete(tick, Ok(vec![2])), Applied::Updated);
        assert_eq!(res.get(), vec![2]);
    }

    #[test]
    fn success_clears_stale_marker() {
        let res = resource();
        let failed = res.begin();
        res.complete(failed, Err(DeskError::Network("down".into())));
        let retried = res.begin();
        res.complete(retried, Ok(vec![3]));
        assert!(!res.is_stale());
    }

    #[tokio::test]
    async fn load_applies_future_output() {
        let res = resource();
        let outcome = res.load(async { Ok(vec![9, 9]) }).await;
        assert!(outcome.is_updated());
        assert_eq!(res.get(), vec![9, 9]);
        assert_eq!(res.latest_ticket().map(Ticket::sequence), Some(1));
    }
}
