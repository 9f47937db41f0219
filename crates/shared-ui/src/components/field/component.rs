use dioxus::prelude::*;

/// Labelled single-line input with an optional inline error.
#[component]
pub fn TextField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_input: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            input {
                class: "field-input",
                id: "{id}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                "aria-invalid": if error.is_some() { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(ref err) = error {
                div { class: "field-error", "{err}" }
            }
        }
    }
}

/// Labelled multi-line input.
#[component]
pub fn TextAreaField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default = 5)] rows: u32,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_input: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            textarea {
                class: "field-input field-textarea",
                id: "{id}",
                rows: "{rows}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(err) = error {
                div { class: "field-error", "{err}" }
            }
        }
    }
}

/// Native select over `(value, label)` pairs.
#[component]
pub fn SelectField(
    id: String,
    label: String,
    options: Vec<(String, String)>,
    #[props(default)] value: String,
    #[props(default)] on_change: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "field field-inline",
            label { class: "field-label", r#for: "{id}", "{label}" }
            select {
                class: "field-input",
                id: "{id}",
                onchange: move |evt| on_change.call(evt),
                for (opt_value, opt_label) in options {
                    option {
                        key: "{opt_value}",
                        value: "{opt_value}",
                        selected: opt_value == value,
                        "{opt_label}"
                    }
                }
            }
        }
    }
}

/// Search box used above filtered lists.
#[component]
pub fn SearchField(
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "search-field",
            input {
                class: "field-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                "aria-label": "{placeholder}",
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_shows_error() {
        let html = dioxus_ssr::render_element(rsx! {
            TextField {
                id: "subject",
                label: "Subject",
                error: "Subject is required".to_string(),
            }
        });
        assert!(html.contains("Subject is required"));
        assert!(html.contains(r#"aria-invalid="true""#));
    }

    #[test]
    fn select_marks_current_value() {
        let options = vec![
            ("All".to_string(), "All".to_string()),
            ("Dentist".to_string(), "Dentist".to_string()),
        ];
        let html = dioxus_ssr::render_element(rsx! {
            SelectField { id: "specialty", label: "Specialty", options, value: "Dentist" }
        });
        assert!(html.contains("Dentist"));
        assert!(html.contains("selected"));
    }
}
