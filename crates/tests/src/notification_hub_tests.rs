use crate::common::test_hub;
use pretty_assertions::assert_eq;
use server::notifications::{next_event_for, NotificationHub};
use shared_types::{
    NewNotification, NotificationEvent, NotificationKind, NotificationSettings, NotificationTarget,
};
use std::time::Duration;

fn note(title: &str) -> NewNotification {
    NewNotification::new(NotificationKind::Info, title, "")
}

/// A waiting subscriber receives the worker's next event.
#[tokio::test]
async fn poll_receives_own_event() {
    let hub = test_hub();
    let mut rx = hub.subscribe();

    let publisher = hub.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        publisher.publish(3, note("Pickup ready"))
    });

    let event = next_event_for(&mut rx, 3, Duration::from_secs(2)).await;
    let published = handle.await.unwrap();

    match event {
        Some(NotificationEvent::Created { notification, .. }) => assert_eq!(notification, published),
        other => panic!("expected a created event, got {other:?}"),
    }
}

/// Events for other workers are skipped, not delivered.
#[tokio::test]
async fn poll_ignores_other_workers() {
    let hub = test_hub();
    let mut rx = hub.subscribe();

    hub.publish(4, note("not yours"));
    let mine = hub.publish(3, note("yours"));

    let event = next_event_for(&mut rx, 3, Duration::from_secs(1)).await;
    match event {
        Some(NotificationEvent::Created { notification, .. }) => assert_eq!(notification, mine),
        other => panic!("expected a created event, got {other:?}"),
    }
}

/// No event within the wait returns None.
#[tokio::test]
async fn poll_times_out_with_none() {
    let hub = test_hub();
    let mut rx = hub.subscribe();

    hub.publish(4, note("someone else"));

    let event = next_event_for(&mut rx, 3, Duration::from_millis(50)).await;
    assert_eq!(event, None);
}

/// Bulk commands broadcast once and report how many entries they touched.
#[tokio::test]
async fn bulk_commands_broadcast() {
    let hub = test_hub();
    let first = hub.publish(5, note("a"));
    hub.publish(5, note("b"));
    hub.mark_read(5, first.id).unwrap();

    let mut rx = hub.subscribe();

    assert_eq!(hub.mark_all_read(5), 1);
    assert_eq!(hub.unread_count(5), 0);
    assert_eq!(
        next_event_for(&mut rx, 5, Duration::from_millis(100)).await,
        Some(NotificationEvent::AllRead)
    );

    assert_eq!(hub.mark_all_read(5), 0);
    assert_eq!(hub.clear_all(5), 2);
    assert!(hub.list(5).is_empty());
    assert_eq!(
        next_event_for(&mut rx, 5, Duration::from_millis(100)).await,
        Some(NotificationEvent::Cleared)
    );
}

/// Replaying the broadcast events onto a client copy yields the hub's list.
#[tokio::test]
async fn replayed_events_match_hub_state() {
    let hub = test_hub();
    let mut rx = hub.subscribe();
    let mut client = Vec::new();

    let report = hub.publish(
        6,
        note("Report approved").with_target(NotificationTarget::Report("r-1".into())),
    );
    hub.publish(6, note("Task assigned").with_target(NotificationTarget::Task("t-2".into())));
    hub.mark_read(6, report.id).unwrap();
    hub.mark_read(6, report.id).unwrap();

    while let Some(event) = next_event_for(&mut rx, 6, Duration::from_millis(50)).await {
        event.apply(&mut client);
    }

    assert_eq!(client, hub.list(6));
    assert_eq!(shared_types::unread_count(&client), hub.unread_count(6));
}

/// Once the per-worker cap is reached, the client copy drops the same
/// entries the hub does.
#[tokio::test]
async fn replayed_events_match_hub_state_at_capacity() {
    let hub = NotificationHub::new(&NotificationSettings {
        poll_timeout_secs: 1,
        channel_capacity: 16,
        max_per_worker: 2,
    });
    let mut rx = hub.subscribe();
    let mut client = Vec::new();

    let oldest = hub.publish(7, note("first"));
    hub.publish(7, note("second"));
    hub.publish(7, note("third"));

    while let Some(event) = next_event_for(&mut rx, 7, Duration::from_millis(50)).await {
        event.apply(&mut client);
    }

    assert_eq!(client, hub.list(7));
    assert_eq!(client.len(), 2);
    assert_eq!(shared_types::unread_count(&client), hub.unread_count(7));
    assert!(client.iter().all(|n| n.id != oldest.id));
    assert!(hub.mark_read(7, oldest.id).is_err());
}
