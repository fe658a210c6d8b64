use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// Severity of a notification. Unknown wire values decode to `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    #[serde(other)]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Color of the dot shown next to the title.
    pub fn indicator_color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "green",
            NotificationKind::Error => "red",
            NotificationKind::Warning => "yellow",
            NotificationKind::Info => "blue",
        }
    }
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// Where clicking a notification takes the worker.
///
/// The wire payload (`data`) may carry a `reportId`, a `taskId`, both, or
/// nothing. A payload carrying both references resolves to `Report`: report
/// detail takes precedence over task detail. Empty strings and zero ids count
/// as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<TargetPayload>", into = "Option<TargetPayload>")]
pub enum NotificationTarget {
    Report(String),
    Task(String),
    #[default]
    None,
}

impl NotificationTarget {
    /// Path of the detail page this target navigates to.
    pub fn path(&self) -> Option<String> {
        match self {
            NotificationTarget::Report(id) => Some(format!("/reports/{id}")),
            NotificationTarget::Task(id) => Some(format!("/tasks/{id}")),
            NotificationTarget::None => None,
        }
    }
}

/// Legacy `data` payload shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    report_id: Option<RefId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    task_id: Option<RefId>,
}

/// Producers send ids either as strings or as bare numbers. Anything else
/// (floats, booleans, objects) is kept only so the record still decodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RefId {
    Text(String),
    Number(i64),
    Other(serde_json::Value),
}

impl RefId {
    fn into_present(self) -> Option<String> {
        match self {
            RefId::Text(s) if s.is_empty() => None,
            RefId::Text(s) => Some(s),
            RefId::Number(0) => None,
            RefId::Number(n) => Some(n.to_string()),
            RefId::Other(_) => None,
        }
    }
}

impl From<Option<TargetPayload>> for NotificationTarget {
    fn from(payload: Option<TargetPayload>) -> Self {
        let Some(payload) = payload else {
            return NotificationTarget::None;
        };
        if let Some(id) = payload.report_id.and_then(RefId::into_present) {
            return NotificationTarget::Report(id);
        }
        match payload.task_id.and_then(RefId::into_present) {
            Some(id) => NotificationTarget::Task(id),
            None => NotificationTarget::None,
        }
    }
}

impl From<NotificationTarget> for Option<TargetPayload> {
    fn from(target: NotificationTarget) -> Self {
        match target {
            NotificationTarget::Report(id) => Some(TargetPayload {
                report_id: Some(RefId::Text(id)),
                task_id: None,
            }),
            NotificationTarget::Task(id) => Some(TargetPayload {
                report_id: None,
                task_id: Some(RefId::Text(id)),
            }),
            NotificationTarget::None => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A user-facing event record with read state and an optional navigation target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    #[serde(rename = "data", default)]
    pub target: NotificationTarget,
}

/// Producer request for a new notification. The store assigns id, timestamp
/// and read state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "data", default)]
    pub target: NotificationTarget,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            target: NotificationTarget::None,
        }
    }

    pub fn with_target(mut self, target: NotificationTarget) -> Self {
        self.target = target;
        self
    }

    /// Materialize into an unread notification.
    pub fn into_notification(self, id: Uuid, created_at: DateTime<Utc>) -> Notification {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            created_at,
            read: false,
            target: self.target,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Change broadcast to subscribers of a notification set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A new notification. `keep` is the owner's list capacity: after the
    /// insert, entries beyond it are dropped from the tail.
    Created { notification: Notification, keep: usize },
    Read { id: Uuid },
    AllRead,
    Cleared,
}

impl NotificationEvent {
    /// Apply this event to an ordered (newest first) notification list.
    /// Returns how many entries it touched; zero means nothing changed.
    pub fn apply(&self, list: &mut Vec<Notification>) -> usize {
        match self {
            NotificationEvent::Created { notification, keep } => {
                if list.iter().any(|n| n.id == notification.id) {
                    return 0;
                }
                list.insert(0, notification.clone());
                list.truncate((*keep).max(1));
                1
            }
            NotificationEvent::Read { id } => match list.iter_mut().find(|n| n.id == *id) {
                Some(n) if !n.read => {
                    n.read = true;
                    1
                }
                _ => 0,
            },
            NotificationEvent::AllRead => mark_all(list),
            NotificationEvent::Cleared => {
                let removed = list.len();
                list.clear();
                removed
            }
        }
    }
}

/// Mark every entry read, returning how many changed.
pub fn mark_all(list: &mut [Notification]) -> usize {
    let mut changed = 0;
    for n in list.iter_mut().filter(|n| !n.read) {
        n.read = true;
        changed += 1;
    }
    changed
}

/// Number of entries with `read == false`.
pub fn unread_count(list: &[Notification]) -> usize {
    list.iter().filter(|n| !n.read).count()
}
