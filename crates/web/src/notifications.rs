//! Notification lists.

use leptos::prelude::*;

use trolley::notifications::{Notification, NotificationKind, Notifications};

use crate::view::SignalView;

fn visible(notifications: RwSignal<Notifications>, kind: NotificationKind) -> Vec<Notification> {
    notifications.with(|entries| entries.of_kind(kind).cloned().collect())
}

/// Success messages; each removes itself after the dismiss delay.
#[component]
pub(crate) fn SuccessMessages(notifications: RwSignal<Notifications>) -> impl IntoView {
    move || {
        visible(notifications, NotificationKind::Success)
            .into_iter()
            .map(|notification| {
                view! {
                    <div class="alert alert-success" role="status">
                        {notification.message}
                    </div>
                }
            })
            .collect_view()
    }
}

/// Error messages; each stays until its close button is pressed.
#[component]
pub(crate) fn ErrorMessages(notifications: RwSignal<Notifications>) -> impl IntoView {
    move || {
        visible(notifications, NotificationKind::Error)
            .into_iter()
            .map(|notification| {
                let id = notification.id;

                view! {
                    <div class="alert alert-danger" role="alert">
                        <span>{notification.message}</span>
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Dismiss"
                            on:click=move |_| SignalView::dismiss(notifications, id)
                        ></button>
                    </div>
                }
            })
            .collect_view()
    }
}

/// Item count badge.
#[component]
pub(crate) fn ItemCount(item_count: RwSignal<u64>) -> impl IntoView {
    move || item_count.get().to_string()
}
