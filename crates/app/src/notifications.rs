//! Client copy of the worker's notifications.
//!
//! The server hub is authoritative. `NotificationStore` mirrors it in
//! signals, applies commands optimistically through the same
//! `NotificationEvent::apply` the hub uses, then forwards them to the
//! server. Components read the signals and mutate only through
//! `NotificationCommands`.

use dioxus::prelude::*;
use shared_types::{unread_count, Notification, NotificationEvent};
use uuid::Uuid;

/// Commands a notification view can issue.
pub trait NotificationCommands {
    /// Idempotent: marking a read notification again changes nothing.
    fn mark_as_read(&mut self, id: Uuid);
    fn mark_all_as_read(&mut self);
    fn clear_all(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotificationStore {
    /// Newest first.
    pub notifications: Signal<Vec<Notification>>,
    /// True until the first successful load, and during `refresh()`.
    pub loading: Signal<bool>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            notifications: Signal::new(Vec::new()),
            loading: Signal::new(true),
        }
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.notifications.read())
    }

    /// Apply a change locally. Returns whether anything changed.
    pub fn apply(&mut self, event: &NotificationEvent) -> bool {
        self.notifications.with_mut(|list| event.apply(list)) > 0
    }

    /// Drop the local copy and show the loading state until the next load.
    pub fn reset(&mut self) {
        self.notifications.set(Vec::new());
        self.loading.set(true);
    }

    /// Take the result of a list load. A failed load keeps the previous
    /// list; either way the loading state ends.
    pub fn finish_load<E: std::fmt::Display>(&mut self, result: Result<Vec<Notification>, E>) {
        match result {
            Ok(list) => self.notifications.set(list),
            Err(e) => tracing::warn!(error = %e, "Failed to load notifications"),
        }
        self.loading.set(false);
    }

    /// Reload the full list, showing the loading placeholder meanwhile.
    pub async fn refresh(mut self) {
        self.loading.set(true);
        self.sync().await;
    }

    /// Replace the local list with the server's.
    pub async fn sync(mut self) {
        let result = server::api::list_notifications().await;
        self.finish_load(result);
    }
}

impl NotificationCommands for NotificationStore {
    fn mark_as_read(&mut self, id: Uuid) {
        self.apply(&NotificationEvent::Read { id });
        spawn(async move {
            if let Err(e) = server::api::mark_notification_read(id).await {
                tracing::warn!(%id, error = %e, "Failed to mark notification read");
            }
        });
    }

    fn mark_all_as_read(&mut self) {
        self.apply(&NotificationEvent::AllRead);
        spawn(async move {
            if let Err(e) = server::api::mark_all_notifications_read().await {
                tracing::warn!(error = %e, "Failed to mark all notifications read");
            }
        });
    }

    fn clear_all(&mut self) {
        self.apply(&NotificationEvent::Cleared);
        spawn(async move {
            if let Err(e) = server::api::clear_notifications().await {
                tracing::warn!(error = %e, "Failed to clear notifications");
            }
        });
    }
}

/// Hook to access the notification store.
pub fn use_notifications() -> NotificationStore {
    use_context::<NotificationStore>()
}
