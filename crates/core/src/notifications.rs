//! Transient user notifications ("toasts")

use parking_lot::Mutex;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// One toast: a translated title and a free-form description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Sink for notifications raised by pages
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// In-memory notification queue.
///
/// Pages push, the front end drains and displays.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    pending: Mutex<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything raised since the last drain.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending.lock())
    }

    /// Copy of the pending queue without consuming it.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.pending.lock().clone()
    }

    pub fn error_count(&self) -> usize {
        self.pending.lock().iter().filter(|n| n.is_error()).count()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        self.pending.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_queue() {
        let center = NotificationCenter::new();
        center.notify(Notification {
            level: NotificationLevel::Error,
            title: "Error".into(),
            description: "Failed to create task".into(),
        });

        assert_eq!(center.error_count(), 1);
        assert_eq!(center.drain().len(), 1);
        assert!(center.snapshot().is_empty());
    }
}
