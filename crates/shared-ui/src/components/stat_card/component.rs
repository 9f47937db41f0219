use dioxus::prelude::*;

/// Single headline number with a label and optional status line.
///
/// `accent` is any CSS color; it tints the value and the left border.
#[component]
pub fn StatCard(
    value: String,
    label: String,
    #[props(default)] accent: String,
    #[props(default)] status: Option<String>,
    #[props(default = false)] clickable: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    icon: Option<Element>,
) -> Element {
    let style = if accent.is_empty() {
        String::new()
    } else {
        format!("--stat-accent: {accent};")
    };

    rsx! {
        div {
            class: "stat-card",
            style: "{style}",
            role: if clickable { "button" } else { "group" },
            "data-clickable": if clickable { "true" } else { "false" },
            onclick: move |evt| {
                if clickable {
                    onclick.call(evt);
                }
            },
            if let Some(icon) = icon {
                div { class: "stat-card-icon", {icon} }
            }
            div { class: "stat-card-body",
                span { class: "stat-card-value", "{value}" }
                span { class: "stat-card-label", "{label}" }
                if let Some(status) = status {
                    span { class: "stat-card-status", "{status}" }
                }
            }
        }
    }
}
