use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    /// Red pill used for unread counts.
    Alert,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Alert => "alert",
        }
    }
}

/// Largest count shown verbatim by `CountBadge`.
pub const COUNT_BADGE_CAP: usize = 9;

/// Text for a count badge, or `None` when the badge should be hidden.
///
/// Zero hides the badge; anything above `cap` collapses to `"{cap}+"`.
pub fn count_label(count: usize, cap: usize) -> Option<String> {
    match count {
        0 => None,
        n if n > cap => Some(format!("{cap}+")),
        n => Some(n.to_string()),
    }
}

/// Inline label pill.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Corner badge showing a capped count. Renders nothing at zero.
#[component]
pub fn CountBadge(count: usize, #[props(default = COUNT_BADGE_CAP)] cap: usize) -> Element {
    let Some(label) = count_label(count, cap) else {
        return rsx! {};
    };

    rsx! {
        span { class: "count-badge", "aria-label": "{count} unread",
            Badge { variant: BadgeVariant::Alert, "{label}" }
        }
    }
}
