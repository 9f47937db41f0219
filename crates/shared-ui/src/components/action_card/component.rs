use dioxus::prelude::*;

/// Quick-action tile: a titled description with a call to action.
#[component]
pub fn ActionCard(
    title: String,
    description: String,
    #[props(default)] accent: String,
    #[props(default = "Open".to_string())] cta: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    icon: Option<Element>,
) -> Element {
    let style = if accent.is_empty() {
        String::new()
    } else {
        format!("--action-accent: {accent};")
    };

    rsx! {
        button {
            class: "action-card",
            r#type: "button",
            style: "{style}",
            onclick: move |evt| onclick.call(evt),
            if let Some(icon) = icon {
                span { class: "action-card-icon", {icon} }
            }
            span { class: "action-card-title", "{title}" }
            span { class: "action-card-description", "{description}" }
            span { class: "action-card-cta", "{cta} →" }
        }
    }
}
