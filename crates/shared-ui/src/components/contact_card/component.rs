use dioxus::prelude::*;

/// Emergency / help-line contact block with a `tel:` link.
#[component]
pub fn ContactCard(label: String, phone: String, #[props(default)] note: String) -> Element {
    let dial: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    rsx! {
        div { class: "contact-card",
            span { class: "contact-card-label", "{label}" }
            a { class: "contact-card-phone", href: "tel:{dial}", "{phone}" }
            if !note.is_empty() {
                p { class: "contact-card-note", "{note}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_link_strips_formatting() {
        let html = dioxus_ssr::render_element(rsx! {
            ContactCard { label: "Campus Clinic", phone: "+251-911-234-567" }
        });
        assert!(html.contains(r#"href="tel:+251911234567""#));
        assert!(html.contains("+251-911-234-567"));
    }
}
