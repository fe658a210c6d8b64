use serde::{Deserialize, Serialize};

use crate::WorkerProfile;

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    /// Seed the current worker's inbox with sample notifications at startup.
    #[serde(default)]
    pub demo_seed: bool,
}

/// Tuning for the notification hub and the client long-poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long `poll_notification_event` waits before returning `None`.
    pub poll_timeout_secs: u64,
    /// Broadcast channel capacity; slower subscribers lag past this.
    pub channel_capacity: usize,
    /// Oldest notifications are dropped beyond this many per worker.
    pub max_per_worker: usize,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            poll_timeout_secs: 25,
            channel_capacity: 64,
            max_per_worker: 200,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub notifications: NotificationSettings,
    /// The worker served by this portal instance.
    #[serde(default)]
    pub worker: WorkerProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.telemetry);
        assert!(!flags.demo_seed);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.notifications.poll_timeout_secs, 25);
        assert_eq!(config.worker.display_name, "Field Worker");
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            demo_seed = true

            [notifications]
            max_per_worker = 10
            "#,
        )
        .unwrap();
        assert!(config.features.demo_seed);
        assert!(!config.features.telemetry);
        assert_eq!(config.notifications.max_per_worker, 10);
        assert_eq!(config.notifications.channel_capacity, 64);
        assert_eq!(config.notifications.poll_timeout_secs, 25);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            telemetry = true
            demo_seed = true

            [notifications]
            poll_timeout_secs = 5
            channel_capacity = 16
            max_per_worker = 50

            [worker]
            id = 12
            display_name = "Sam Okafor"
            email = "sam@example.com"
            role = "driver"
            phone = "+15550100"
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
        assert_eq!(config.notifications.poll_timeout_secs, 5);
        assert_eq!(config.notifications.channel_capacity, 16);
        assert_eq!(config.worker.id, 12);
        assert_eq!(config.worker.role, "driver");
        assert_eq!(config.worker.phone.as_deref(), Some("+15550100"));
    }

    #[test]
    fn flags_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
