use serde::{Deserialize, Serialize};

/// The authenticated field worker the dashboard is rendered for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerProfile {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

fn default_role() -> String {
    "worker".to_string()
}

impl Default for WorkerProfile {
    fn default() -> Self {
        Self {
            id: 1,
            display_name: "Field Worker".to_string(),
            email: "worker@example.com".to_string(),
            role: default_role(),
            phone: None,
        }
    }
}

impl WorkerProfile {
    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }

    /// First word of the display name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.display_name)
    }
}
