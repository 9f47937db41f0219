use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Danger => "danger",
        }
    }
}

/// Themed button. While `busy` is set the button is disabled and shows
/// `busy_label` in place of its children.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] button_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] busy: bool,
    #[props(default)] busy_label: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
        Attribute::new("data-busy", if busy { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "{button_type}",
            disabled: disabled || busy,
            onclick: move |evt| onclick.call(evt),
            ..merged,
            if busy && !busy_label.is_empty() {
                "{busy_label}"
            } else {
                {children}
            }
        }
    }
}
