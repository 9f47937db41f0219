use dioxus::prelude::*;

/// Error panel with an optional retry control.
#[component]
pub fn ErrorFallback(
    message: String,
    #[props(default = false)] retryable: bool,
    #[props(default)] on_retry: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "error-fallback", role: "alert",
            h3 { class: "error-fallback-title", "Something went wrong" }
            p { class: "error-fallback-message", "{message}" }
            if retryable {
                button {
                    class: "button",
                    "data-variant": "secondary",
                    r#type: "button",
                    onclick: move |evt| on_retry.call(evt),
                    "Try again"
                }
            }
        }
    }
}
