//! In-memory notification store with broadcast subscribers.
//!
//! The hub owns every worker's notification list. Readers get cloned
//! projections; writers go through the command methods, each of which
//! broadcasts a `NotificationEvent` when (and only when) the list changed.

use chrono::Utc;
use shared_types::{
    unread_count, AppError, NewNotification, Notification, NotificationEvent, NotificationKind,
    NotificationSettings, NotificationTarget,
};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Broadcast payload: the worker the event belongs to, and the event.
pub type NotificationReceiver = broadcast::Receiver<(i64, NotificationEvent)>;

static HUB: OnceLock<Arc<NotificationHub>> = OnceLock::new();

/// The process-wide hub, sized from the loaded config.
pub fn hub() -> Arc<NotificationHub> {
    HUB.get_or_init(|| {
        Arc::new(NotificationHub::new(
            crate::config::notification_settings(),
        ))
    })
    .clone()
}

pub struct NotificationHub {
    inboxes: RwLock<HashMap<i64, Vec<Notification>>>,
    events: broadcast::Sender<(i64, NotificationEvent)>,
    max_per_worker: usize,
}

impl NotificationHub {
    pub fn new(settings: &NotificationSettings) -> Self {
        let (events, _) = broadcast::channel(settings.channel_capacity.max(1));
        Self {
            inboxes: RwLock::new(HashMap::new()),
            events,
            max_per_worker: settings.max_per_worker.max(1),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<i64, Vec<Notification>>> {
        self.inboxes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i64, Vec<Notification>>> {
        self.inboxes.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `event` to the worker's list and broadcast it if anything
    /// changed. Returns the number of entries the event touched.
    fn commit(&self, worker_id: i64, event: NotificationEvent) -> usize {
        let touched = {
            let mut inboxes = self.write();
            event.apply(inboxes.entry(worker_id).or_default())
        };
        if touched > 0 {
            // No receivers is fine: nobody is polling right now.
            let _ = self.events.send((worker_id, event));
        }
        touched
    }

    /// Store a new unread notification at the front of the worker's list.
    pub fn publish(&self, worker_id: i64, new: NewNotification) -> Notification {
        let notification = new.into_notification(Uuid::new_v4(), Utc::now());
        tracing::info!(
            worker_id,
            id = %notification.id,
            kind = notification.kind.as_str(),
            "Notification published"
        );
        self.commit(
            worker_id,
            NotificationEvent::Created {
                notification: notification.clone(),
                keep: self.max_per_worker,
            },
        );
        notification
    }

    /// Snapshot of the worker's notifications, newest first.
    pub fn list(&self, worker_id: i64) -> Vec<Notification> {
        self.read().get(&worker_id).cloned().unwrap_or_default()
    }

    pub fn unread_count(&self, worker_id: i64) -> usize {
        self.read()
            .get(&worker_id)
            .map(|list| unread_count(list))
            .unwrap_or(0)
    }

    /// Mark one notification read. Marking an already-read one is a no-op.
    pub fn mark_read(&self, worker_id: i64, id: Uuid) -> Result<(), AppError> {
        let exists = self
            .read()
            .get(&worker_id)
            .is_some_and(|list| list.iter().any(|n| n.id == id));
        if !exists {
            return Err(AppError::not_found(format!("Notification {id} not found")));
        }
        self.commit(worker_id, NotificationEvent::Read { id });
        Ok(())
    }

    /// Mark every notification read, returning how many changed.
    pub fn mark_all_read(&self, worker_id: i64) -> usize {
        self.commit(worker_id, NotificationEvent::AllRead)
    }

    /// Remove every notification, returning how many were removed.
    pub fn clear_all(&self, worker_id: i64) -> usize {
        let removed = self.commit(worker_id, NotificationEvent::Cleared);
        if removed > 0 {
            tracing::info!(worker_id, removed, "Notifications cleared");
        }
        removed
    }

    pub fn subscribe(&self) -> NotificationReceiver {
        self.events.subscribe()
    }
}

/// Wait for the next event addressed to `worker_id`.
///
/// Returns `None` on timeout, or when the receiver lagged or the channel
/// closed; callers resynchronize by re-reading the list.
pub async fn next_event_for(
    rx: &mut NotificationReceiver,
    worker_id: i64,
    wait: Duration,
) -> Option<NotificationEvent> {
    let result = tokio::time::timeout(wait, async {
        loop {
            match rx.recv().await {
                Ok((owner, event)) if owner == worker_id => return Some(event),
                Ok(_) => continue,
                Err(e) => {
                    tracing::debug!(worker_id, error = %e, "Notification subscription ended");
                    return None;
                }
            }
        }
    })
    .await;

    result.unwrap_or(None)
}

/// Sample inbox used when `features.demo_seed` is on.
pub fn seed_demo(hub: &NotificationHub, worker_id: i64) {
    let samples = [
        NewNotification::new(
            NotificationKind::Info,
            "New task assigned",
            "Inspect the pump station on Harbor Rd.",
        )
        .with_target(NotificationTarget::Task("t-1042".into())),
        NewNotification::new(
            NotificationKind::Warning,
            "Route updated",
            "Stop 4 moved to the afternoon window.",
        ),
        NewNotification::new(
            NotificationKind::Success,
            "Report approved",
            "Your inspection report was approved.",
        )
        .with_target(NotificationTarget::Report("r-311".into())),
    ];
    for sample in samples {
        hub.publish(worker_id, sample);
    }
}
