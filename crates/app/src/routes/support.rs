use crate::browser::sleep_ms;
use crate::config::config;
use crate::mock;
use dioxus::prelude::*;
use shared_types::SupportTicket;
use shared_ui::{Button, ButtonVariant, Card, ContactCard, TextAreaField, TextField};
use std::collections::HashMap;

/// Help-desk form. Both fields are required; a submitted ticket clears the
/// form and shows a banner that hides itself.
#[component]
pub fn Support() -> Element {
    let mut subject = use_signal(String::new);
    let mut details = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);
    let contact = use_hook(|| mock::dashboard_data().map(|d| d.contact).ok());

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let ticket = match SupportTicket::new(&subject(), &details()) {
            Ok(ticket) => ticket,
            Err(e) => {
                field_errors.set(e.field_errors);
                return;
            }
        };
        field_errors.set(HashMap::new());
        submitting.set(true);

        sleep_ms(config().support.submit_delay_ms).await;
        tracing::info!(ticket = %ticket.id, "support ticket submitted");
        subject.set(String::new());
        details.set(String::new());
        submitting.set(false);
        submitted.set(true);

        sleep_ms(config().support.success_banner_ms).await;
        submitted.set(false);
    };

    rsx! {
        div { class: "page support-page",
            div { class: "support-columns",
                Card {
                    title: "Submit a Request",
                    description: "Describe your issue and the clinic team will get back to you.",

                    if submitted() {
                        div { class: "support-success", role: "status",
                            "Your request has been submitted. We'll be in touch soon."
                        }
                    }

                    form { class: "support-form", onsubmit: handle_submit,
                        TextField {
                            id: "subject",
                            label: "Subject",
                            placeholder: "e.g. Cannot book an appointment",
                            value: subject(),
                            error: field_errors.read().get("subject").cloned(),
                            disabled: submitting(),
                            on_input: move |e: FormEvent| subject.set(e.value()),
                        }
                        TextAreaField {
                            id: "details",
                            label: "Details",
                            placeholder: "Tell us what happened",
                            value: details(),
                            error: field_errors.read().get("details").cloned(),
                            disabled: submitting(),
                            on_input: move |e: FormEvent| details.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            busy: submitting(),
                            busy_label: "Submitting...",
                            "Submit Request"
                        }
                    }
                }
                if let Some(contact) = contact {
                    ContactCard {
                        label: contact.label,
                        phone: contact.phone,
                        note: "For emergencies call the clinic directly.",
                    }
                }
            }
        }
    }
}
