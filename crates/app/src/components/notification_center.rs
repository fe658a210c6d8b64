use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_types::Notification;
use shared_ui::{Button, ButtonVariant, CountBadge};

use crate::format_helpers::format_timestamp;
use crate::notifications::{use_notifications, NotificationCommands};
use crate::routes::Route;

/// Open/closed state of the dropdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelState {
    pub is_open: bool,
}

impl PanelState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Handle a click on a notification row: mark it read, close the panel,
    /// and return where to navigate, if anywhere.
    pub fn activate<C: NotificationCommands>(
        &mut self,
        commands: &mut C,
        notification: &Notification,
    ) -> Option<Route> {
        commands.mark_as_read(notification.id);
        let destination = Route::for_target(&notification.target);
        self.is_open = false;
        destination
    }
}

/// What the panel body shows. Loading wins over the list contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView {
    Loading,
    Empty,
    List,
}

impl PanelView {
    pub fn resolve(loading: bool, count: usize) -> Self {
        if loading {
            PanelView::Loading
        } else if count == 0 {
            PanelView::Empty
        } else {
            PanelView::List
        }
    }
}

/// Bell button with unread badge and a dropdown list of notifications.
#[component]
pub fn NotificationCenter() -> Element {
    let mut store = use_notifications();
    let mut panel = use_signal(PanelState::default);

    let unread = store.unread_count();
    let notifications = store.notifications.read().clone();
    let loading = *store.loading.read();
    let is_open = panel().is_open;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./notification_center.css") }

        div { class: "notification-center",
            Button {
                variant: ButtonVariant::Icon,
                class: "notification-bell",
                aria_label: "Notifications",
                aria_expanded: if is_open { "true" } else { "false" },
                onclick: move |_| panel.with_mut(PanelState::toggle),
                Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                CountBadge { count: unread }
            }

            if is_open {
                div { class: "notification-panel", role: "dialog",
                    NotificationPanelHeader {
                        has_items: !notifications.is_empty(),
                        on_mark_all: move |_| store.mark_all_as_read(),
                        on_clear: move |_| store.clear_all(),
                    }
                    NotificationPanelBody {
                        notifications: notifications,
                        loading: loading,
                        on_select: move |notification: Notification| {
                            let destination = panel.with_mut(|p| p.activate(&mut store, &notification));
                            if let Some(route) = destination {
                                navigator().push(route);
                            }
                        },
                    }
                }
            }
        }
    }
}

/// Panel title plus the bulk actions, which only appear when there is
/// something to act on.
#[component]
pub fn NotificationPanelHeader(
    has_items: bool,
    on_mark_all: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "notification-panel-header",
            h3 { class: "notification-panel-title", "Notifications" }
            if has_items {
                div { class: "notification-panel-actions",
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| on_mark_all.call(()),
                        "Mark all read"
                    }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| on_clear.call(()),
                        "Clear all"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotificationPanelBody(
    notifications: Vec<Notification>,
    loading: bool,
    on_select: EventHandler<Notification>,
) -> Element {
    match PanelView::resolve(loading, notifications.len()) {
        PanelView::Loading => rsx! {
            div { class: "notification-panel-status", "Loading..." }
        },
        PanelView::Empty => rsx! {
            div { class: "notification-panel-status", "No notifications" }
        },
        PanelView::List => rsx! {
            ul { class: "notification-list",
                for notification in notifications {
                    NotificationRow {
                        key: "{notification.id}",
                        notification: notification.clone(),
                        on_select: on_select,
                    }
                }
            }
        },
    }
}

#[component]
fn NotificationRow(notification: Notification, on_select: EventHandler<Notification>) -> Element {
    let row_class = if notification.read {
        "notification-row"
    } else {
        "notification-row notification-row-unread"
    };
    let color = notification.kind.indicator_color();
    let timestamp = format_timestamp(&notification.created_at);
    let selected = notification.clone();

    rsx! {
        li {
            class: row_class,
            "data-kind": notification.kind.as_str(),
            onclick: move |_| on_select.call(selected.clone()),
            span { class: "notification-indicator", "data-color": color }
            div { class: "notification-text",
                p { class: "notification-title", "{notification.title}" }
                p { class: "notification-message", "{notification.message}" }
                p { class: "notification-time", "{timestamp}" }
            }
            if !notification.read {
                span { class: "notification-unread-dot", "aria-label": "Unread" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared_types::{NewNotification, NotificationKind, NotificationTarget};
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingCommands {
        read: Vec<Uuid>,
        all_read: usize,
        cleared: usize,
    }

    impl NotificationCommands for RecordingCommands {
        fn mark_as_read(&mut self, id: Uuid) {
            self.read.push(id);
        }

        fn mark_all_as_read(&mut self) {
            self.all_read += 1;
        }

        fn clear_all(&mut self) {
            self.cleared += 1;
        }
    }

    fn notification(title: &str, target: NotificationTarget, read: bool) -> Notification {
        let mut n = NewNotification::new(NotificationKind::Info, title, "body")
            .with_target(target)
            .into_notification(
                Uuid::new_v4(),
                Utc.with_ymd_and_hms(2026, 1, 20, 21, 35, 0).unwrap(),
            );
        n.read = read;
        n
    }

    fn open_panel() -> PanelState {
        PanelState { is_open: true }
    }

    // ── PanelState ──────────────────────────────────────

    #[test]
    fn panel_starts_closed_and_toggles() {
        let mut panel = PanelState::default();
        assert!(!panel.is_open);
        panel.toggle();
        assert!(panel.is_open);
        panel.toggle();
        assert!(!panel.is_open);
    }

    #[test]
    fn report_target_navigates_to_report() {
        let mut commands = RecordingCommands::default();
        let mut panel = open_panel();
        let n = notification("r", NotificationTarget::Report("r-311".into()), false);

        let dest = panel.activate(&mut commands, &n);

        assert_eq!(dest, Some(Route::ReportDetail { id: "r-311".into() }));
        assert_eq!(commands.read, vec![n.id]);
        assert!(!panel.is_open);
    }

    #[test]
    fn task_target_navigates_to_task() {
        let mut commands = RecordingCommands::default();
        let mut panel = open_panel();
        let n = notification("t", NotificationTarget::Task("t-1042".into()), false);

        let dest = panel.activate(&mut commands, &n);

        assert_eq!(dest, Some(Route::TaskDetail { id: "t-1042".into() }));
        assert_eq!(commands.read, vec![n.id]);
        assert!(!panel.is_open);
    }

    #[test]
    fn no_target_marks_read_and_closes_without_navigating() {
        let mut commands = RecordingCommands::default();
        let mut panel = open_panel();
        let n = notification("plain", NotificationTarget::None, false);

        assert_eq!(panel.activate(&mut commands, &n), None);
        assert_eq!(commands.read, vec![n.id]);
        assert!(!panel.is_open);
    }

    #[test]
    fn already_read_notification_is_still_marked() {
        let mut commands = RecordingCommands::default();
        let mut panel = open_panel();
        let n = notification("old", NotificationTarget::None, true);

        panel.activate(&mut commands, &n);

        assert_eq!(commands.read.len(), 1);
        assert_eq!(commands.all_read, 0);
        assert_eq!(commands.cleared, 0);
    }

    #[test]
    fn payload_with_both_references_opens_the_report() {
        let mut commands = RecordingCommands::default();
        let mut panel = open_panel();
        let n: Notification = serde_json::from_value(serde_json::json!({
            "id": Uuid::new_v4(),
            "type": "success",
            "title": "Report approved",
            "message": "",
            "createdAt": "2026-01-20T21:35:00Z",
            "data": { "reportId": "r-9", "taskId": "t-9" }
        }))
        .unwrap();

        let dest = panel.activate(&mut commands, &n);
        assert_eq!(dest, Some(Route::ReportDetail { id: "r-9".into() }));
    }

    // ── PanelView ───────────────────────────────────────

    #[test]
    fn loading_wins_over_contents() {
        assert_eq!(PanelView::resolve(true, 0), PanelView::Loading);
        assert_eq!(PanelView::resolve(true, 5), PanelView::Loading);
        assert_eq!(PanelView::resolve(false, 0), PanelView::Empty);
        assert_eq!(PanelView::resolve(false, 2), PanelView::List);
    }

    // ── Rendering ───────────────────────────────────────

    #[component]
    fn CenterHarness(unread: usize) -> Element {
        use_context_provider(|| {
            let mut store = crate::notifications::NotificationStore::new();
            let list = (0..unread)
                .map(|i| notification(&format!("n{i}"), NotificationTarget::None, false))
                .collect::<Vec<_>>();
            store.finish_load(Ok::<_, String>(list));
            store
        });
        rsx! { NotificationCenter {} }
    }

    #[component]
    fn BodyHarness(notifications: Vec<Notification>, loading: bool) -> Element {
        rsx! {
            NotificationPanelBody {
                notifications: notifications,
                loading: loading,
                on_select: |_| {},
            }
        }
    }

    #[component]
    fn HeaderHarness(has_items: bool) -> Element {
        rsx! {
            NotificationPanelHeader {
                has_items: has_items,
                on_mark_all: |_| {},
                on_clear: |_| {},
            }
        }
    }

    fn render_body(notifications: Vec<Notification>, loading: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            BodyHarness,
            BodyHarnessProps {
                notifications,
                loading,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_center(unread: usize) -> String {
        let mut dom = VirtualDom::new_with_props(CenterHarness, CenterHarnessProps { unread });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_header(has_items: bool) -> String {
        let mut dom = VirtualDom::new_with_props(HeaderHarness, HeaderHarnessProps { has_items });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn loading_placeholder_hides_the_list() {
        let html = render_body(vec![notification("Hidden", NotificationTarget::None, false)], true);
        assert!(html.contains("Loading..."));
        assert!(!html.contains("Hidden"));
    }

    #[test]
    fn empty_state_message() {
        let html = render_body(Vec::new(), false);
        assert!(html.contains("No notifications"));
        assert!(!html.contains("notification-list"));
    }

    #[test]
    fn unread_rows_are_highlighted_with_a_dot() {
        let html = render_body(
            vec![
                notification("Fresh", NotificationTarget::None, false),
                notification("Seen", NotificationTarget::None, true),
            ],
            false,
        );
        assert!(html.contains("Fresh"));
        assert!(html.contains("Seen"));
        assert_eq!(html.matches("notification-row-unread").count(), 1);
        assert_eq!(html.matches("notification-unread-dot").count(), 1);
        assert!(html.contains("Jan 20, 2026 9:35 PM"));
        assert!(html.contains("data-color=\"blue\""));
    }

    #[test]
    fn bulk_actions_only_with_items() {
        let with_items = render_header(true);
        assert!(with_items.contains("Mark all read"));
        assert!(with_items.contains("Clear all"));

        let empty = render_header(false);
        assert!(empty.contains("Notifications"));
        assert!(!empty.contains("Mark all read"));
        assert!(!empty.contains("Clear all"));
    }

    #[test]
    fn closed_center_shows_only_the_bell() {
        let html = render_center(3);
        assert!(html.contains("notification-bell"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains("Mark all read"));
        assert!(!html.contains("n0"));
    }

    #[test]
    fn bell_badge_hidden_when_all_read() {
        let html = render_center(0);
        assert!(html.contains("notification-bell"));
        assert!(!html.contains("count-badge"));
    }

    #[test]
    fn bell_badge_shows_exact_count() {
        let html = render_center(3);
        assert!(html.contains("count-badge"));
        assert!(html.contains("3 unread"));
        assert!(html.contains(">3<"));
    }

    #[test]
    fn bell_badge_caps_at_nine_plus() {
        let html = render_center(10);
        assert!(html.contains("10 unread"));
        assert!(html.contains("9+"));
    }
}
