//! Signal-backed rendering target.

use std::{future::Future, time::Duration};

use leptos::{prelude::*, task};

use trolley::{
    controller::CartView,
    notifications::{NotificationId, NotificationKind, Notifications, expire},
    render::CartPageView,
};

use crate::{
    dom::{self, MAIN_HOST_ID},
    timer::BrowserTimer,
};

/// Publishes controller output into reactive signals for the mounted components.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SignalView {
    pub item_count: RwSignal<u64>,
    pub page: RwSignal<Option<CartPageView>>,
    pub notifications: RwSignal<Notifications>,
    dismiss_after: Duration,
}

impl SignalView {
    pub(crate) fn new(dismiss_after: Duration) -> Self {
        Self {
            item_count: RwSignal::new(0),
            page: RwSignal::new(None),
            notifications: RwSignal::new(Notifications::new()),
            dismiss_after,
        }
    }

    /// Remove a notification; a no-op once the widget is gone.
    pub(crate) fn dismiss(notifications: RwSignal<Notifications>, id: NotificationId) {
        let _removed = notifications.try_update(|entries| entries.dismiss(id));
    }

    /// Store a notification and return the task that expires it.
    ///
    /// The task resolves to whether the notification was removed.
    pub(crate) fn notify(
        &self,
        kind: NotificationKind,
        message: &str,
    ) -> Option<impl Future<Output = bool> + use<>> {
        let notification = self
            .notifications
            .try_update(|entries| {
                let id = entries.push(kind, message);

                entries.get(id).cloned()
            })
            .flatten()?;

        let notifications = self.notifications;
        let delay = self.dismiss_after;

        Some(async move {
            expire(&BrowserTimer, &notification, delay, |id| {
                Self::dismiss(notifications, id);
            })
            .await
        })
    }

    fn publish(&self, kind: NotificationKind, message: &str) {
        if let Some(expiry) = self.notify(kind, message) {
            task::spawn_local(async move {
                let _expired = expiry.await;
            });
        }
    }
}

impl CartView for SignalView {
    fn show_item_count(&self, count: u64) {
        self.item_count.set(count);
    }

    fn show_page(&self, page: CartPageView) {
        self.page.set(Some(page));

        dom::release_host(MAIN_HOST_ID);
    }

    fn show_success(&self, message: &str) {
        self.publish(NotificationKind::Success, message);
    }

    fn show_error(&self, message: &str) {
        self.publish(NotificationKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use tokio::time::{Instant, sleep};

    use trolley::notifications::SUCCESS_DISMISS_DELAY;

    use super::*;

    fn messages(view: &SignalView) -> Vec<String> {
        view.notifications.with_untracked(|entries| {
            entries
                .iter()
                .map(|entry| entry.message.clone())
                .collect()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn success_clears_after_the_delay_while_errors_stay() -> TestResult {
        let view = SignalView::new(SUCCESS_DISMISS_DELAY);

        let success = view
            .notify(NotificationKind::Success, "Added to cart.")
            .ok_or("success was not stored")?;
        let error = view
            .notify(NotificationKind::Error, "Add to cart failed.")
            .ok_or("error was not stored")?;

        let started = Instant::now();

        let (success_expired, error_expired, shown_before_delay) = tokio::join!(
            success,
            error,
            async {
                sleep(SUCCESS_DISMISS_DELAY - Duration::from_millis(1)).await;
                messages(&view)
            },
        );

        assert!(success_expired);
        assert!(!error_expired);
        assert_eq!(
            shown_before_delay,
            vec!["Added to cart.".to_string(), "Add to cart failed.".to_string()]
        );
        assert!(started.elapsed() >= SUCCESS_DISMISS_DELAY);
        assert_eq!(messages(&view), vec!["Add to cart failed.".to_string()]);

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn each_success_removes_only_itself() -> TestResult {
        let view = SignalView::new(SUCCESS_DISMISS_DELAY);

        let first = view
            .notify(NotificationKind::Success, "Added to cart.")
            .ok_or("first success was not stored")?;

        let (first_expired, second_expired, shown_between) = tokio::join!(
            first,
            async {
                sleep(Duration::from_millis(500)).await;

                match view.notify(NotificationKind::Success, "Cart updated.") {
                    Some(expiry) => expiry.await,
                    None => false,
                }
            },
            async {
                sleep(SUCCESS_DISMISS_DELAY + Duration::from_millis(1)).await;
                messages(&view)
            },
        );

        assert!(first_expired);
        assert!(second_expired);
        assert_eq!(shown_between, vec!["Cart updated.".to_string()]);
        assert!(messages(&view).is_empty());

        Ok(())
    }
}
