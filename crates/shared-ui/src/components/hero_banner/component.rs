use dioxus::prelude::*;

/// One line in the hero's reminder list. `kind` ends up in `data-kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroReminder {
    pub text: String,
    pub kind: &'static str,
}

/// Greeting banner at the top of a dashboard.
#[component]
pub fn HeroBanner(
    title: String,
    #[props(default)] subtitle: String,
    #[props(default)] reminders: Vec<HeroReminder>,
    #[props(default)] actions: Option<Element>,
) -> Element {
    rsx! {
        section { class: "hero-banner",
            div { class: "hero-banner-text",
                h1 { class: "hero-banner-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "hero-banner-subtitle", "{subtitle}" }
                }
                if let Some(actions) = actions {
                    div { class: "hero-banner-actions", {actions} }
                }
            }
            if !reminders.is_empty() {
                ul { class: "hero-banner-reminders",
                    for (i, reminder) in reminders.iter().enumerate() {
                        li {
                            key: "{i}",
                            class: "hero-reminder",
                            "data-kind": reminder.kind,
                            "{reminder.text}"
                        }
                    }
                }
            }
        }
    }
}
