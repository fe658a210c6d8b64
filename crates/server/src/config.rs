use shared_types::{AppConfig, FeatureFlags, NotificationSettings, WorkerProfile};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` into the global config. Only the first call has effect.
///
/// A missing or unparseable file leaves every setting at its default.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(
                features = ?config.features,
                notifications = ?config.notifications,
                worker_id = config.worker.id,
                "Loaded {CONFIG_PATH}"
            );
            config
        }
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
            AppConfig::default()
        }
    })
}

/// The loaded config, or defaults if `load_config()` hasn't run yet.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

pub fn notification_settings() -> &'static NotificationSettings {
    &app_config().notifications
}

/// The worker served by this instance.
pub fn current_worker() -> &'static WorkerProfile {
    &app_config().worker
}
