use dioxus::prelude::*;

/// Bulleted list of short health tips.
#[component]
pub fn TipList(#[props(default = "Health Tips".to_string())] title: String, tips: Vec<String>) -> Element {
    rsx! {
        div { class: "tip-list",
            h3 { class: "tip-list-title", "{title}" }
            if tips.is_empty() {
                p { class: "tip-list-empty", "No tips right now." }
            } else {
                ul {
                    for (i, tip) in tips.iter().enumerate() {
                        li { key: "{i}", class: "tip-list-item", "{tip}" }
                    }
                }
            }
        }
    }
}
