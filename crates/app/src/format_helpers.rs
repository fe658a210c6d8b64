//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Format a timestamp as "Jan 20, 2026 9:35 PM" (12-hour time, UTC).
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Convert a snake_case or lowercase identifier to Title Case
/// (e.g. "field_worker" -> "Field Worker").
pub fn format_title_case(s: &str) -> String {
    s.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
