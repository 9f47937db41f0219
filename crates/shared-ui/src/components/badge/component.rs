use dioxus::prelude::*;

/// Semantic tone of a badge, mapped onto the `--color-*` semantic tokens.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Accent,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Accent => "accent",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
            BadgeTone::Info => "info",
        }
    }
}

/// Inline status pill.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tone_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { tone: BadgeTone::Warning, "Follow-up" }
        });
        assert!(html.contains(r#"data-tone="warning""#));
        assert!(html.contains("Follow-up"));
    }

    #[test]
    fn default_tone_is_neutral() {
        let html = dioxus_ssr::render_element(rsx! { Badge { "Staff" } });
        assert!(html.contains(r#"data-tone="neutral""#));
    }
}
