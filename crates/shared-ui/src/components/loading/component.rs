use dioxus::prelude::*;

/// Spinner with an accessible status message.
#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "loading", role: "status", "aria-live": "polite",
            span { class: "loading-spinner" }
            span { class: "loading-message", "{message}" }
        }
    }
}
