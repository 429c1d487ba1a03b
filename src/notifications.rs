//! Notifications
//!
//! Transient success and error messages shown alongside the cart.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;

/// Delay before a success notification is removed.
pub const SUCCESS_DISMISS_DELAY: Duration = Duration::from_millis(2_000);

/// Notification identifier, unique within one [`Notifications`] store.
pub type NotificationId = u64;

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Confirms a completed action; removed automatically.
    Success,

    /// Reports a failed action; stays until dismissed.
    Error,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier used for dismissal
    pub id: NotificationId,

    /// Kind of notification
    pub kind: NotificationKind,

    /// Message text
    pub message: String,
}

impl Notification {
    /// Whether this notification should be removed after [`SUCCESS_DISMISS_DELAY`].
    pub fn auto_dismiss(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Ordered notification store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    entries: Vec<Notification>,
    next_id: NotificationId,
}

impl Notifications {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        self.entries.push(Notification {
            id,
            kind,
            message: message.into(),
        });

        id
    }

    /// Remove a notification. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();

        self.entries.retain(|entry| entry.id != id);

        self.entries.len() != before
    }

    /// Look up a live notification.
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Notifications of one kind, oldest first.
    pub fn of_kind(&self, kind: NotificationKind) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(move |entry| entry.kind == kind)
    }

    /// Number of live notifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no live notifications.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Clock used to schedule notification removal.
#[automock]
#[async_trait(?Send)]
pub trait DismissTimer {
    /// Resolve once `delay` has elapsed.
    async fn wait(&self, delay: Duration);
}

/// Remove an auto-dismissing notification once `delay` has elapsed.
///
/// Notifications that stay until the user closes them return straight away
/// without waiting. Returns whether `dismiss` was called.
pub async fn expire<T>(
    timer: &T,
    notification: &Notification,
    delay: Duration,
    dismiss: impl FnOnce(NotificationId),
) -> bool
where
    T: DismissTimer + ?Sized,
{
    if !notification.auto_dismiss() {
        return false;
    }

    timer.wait(delay).await;
    dismiss(notification.id);

    true
}
