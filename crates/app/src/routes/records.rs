use crate::mock::{self, ALL_FILTER};
use dioxus::prelude::*;
use shared_types::{MedicalRecord, RecordStatus};
use shared_ui::{Badge, BadgeTone, Button, ButtonVariant, ErrorFallback, SearchField, SelectField};

fn status_tone(status: RecordStatus) -> BadgeTone {
    match status {
        RecordStatus::Completed => BadgeTone::Success,
        RecordStatus::FollowUp => BadgeTone::Warning,
        RecordStatus::PendingResults => BadgeTone::Info,
    }
}

/// Visit history with search, status filter and a detail view.
#[component]
pub fn Records() -> Element {
    let records = use_hook(mock::records);
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| ALL_FILTER.to_string());
    let mut selected = use_signal(|| Option::<MedicalRecord>::None);

    let records = match records {
        Ok(records) => records,
        Err(e) => return rsx! { ErrorFallback { message: e.friendly_message() } },
    };

    let visible = mock::filter_records(&records, &search(), &status());
    let status_options: Vec<(String, String)> = mock::record_status_options()
        .into_iter()
        .map(|s| (s.clone(), s))
        .collect();

    rsx! {
        div { class: "page records-page",
            div { class: "page-toolbar",
                SearchField {
                    value: search(),
                    placeholder: "Search by diagnosis or doctor",
                    on_input: move |e: FormEvent| search.set(e.value()),
                }
                SelectField {
                    id: "record-status",
                    label: "Status",
                    options: status_options,
                    value: status(),
                    on_change: move |e: FormEvent| status.set(e.value()),
                }
            }

            table { class: "data-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Doctor" }
                        th { "Diagnosis" }
                        th { "Visit" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for record in visible.iter().cloned() {
                        tr { key: "{record.id}",
                            td { {record.date_label()} }
                            td {
                                div { "{record.doctor_name}" }
                                div { class: "data-table-sub", "{record.doctor_role}" }
                            }
                            td { "{record.diagnosis}" }
                            td { {record.visit_type.label()} }
                            td {
                                Badge { tone: status_tone(record.status), {record.status.label()} }
                            }
                            td {
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: {
                                        let record = record.clone();
                                        move |_| selected.set(Some(record.clone()))
                                    },
                                    "View"
                                }
                            }
                        }
                    }
                }
            }
            if visible.is_empty() {
                p { class: "page-empty", "No records found matching your filters." }
            }

            if let Some(record) = selected() {
                RecordDetail { record, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn RecordDetail(record: MedicalRecord, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "modal-title", "{record.diagnosis}" }
                p { class: "modal-subtitle",
                    {record.date_label()}
                    " · {record.department}"
                }
                dl { class: "detail-list",
                    dt { "Doctor" }
                    dd { "{record.doctor_name} ({record.doctor_role})" }
                    dt { "Visit type" }
                    dd { {record.visit_type.label()} }
                    dt { "Status" }
                    dd {
                        Badge { tone: status_tone(record.status), {record.status.label()} }
                    }
                    dt { "Prescription" }
                    dd {
                        if record.prescription.is_empty() {
                            span { class: "muted", "None" }
                        } else {
                            ul {
                                for (i, item) in record.prescription.iter().enumerate() {
                                    li { key: "{i}", "{item}" }
                                }
                            }
                        }
                    }
                    dt { "Notes" }
                    dd { "{record.notes}" }
                }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
