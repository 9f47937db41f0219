use dioxus::prelude::*;

/// Surface container. `title` and `description` render a header when set.
/// `onclick` only fires on interactive cards.
#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] description: String,
    #[props(default = false)] interactive: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "card", None, false),
        Attribute::new(
            "data-interactive",
            if interactive { "true" } else { "false" },
            None,
            false,
        ),
        Attribute::new("role", if interactive { "button" } else { "region" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_header = !title.is_empty() || !description.is_empty();

    rsx! {
        section {
            onclick: move |evt| {
                if interactive {
                    onclick.call(evt);
                }
            },
            ..merged,
            if has_header {
                header { class: "card-header",
                    if !title.is_empty() {
                        h3 { class: "card-title", "{title}" }
                    }
                    if !description.is_empty() {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-body", {children} }
        }
    }
}

/// Bottom strip of a card for actions or meta text.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        footer {
            ..merged,
            {children}
        }
    }
}
