use crate::browser::sleep_ms;
use crate::config::config;
use crate::mock::{self, ALL_FILTER};
use dioxus::prelude::*;
use shared_types::{Doctor, TimeSlot};
use shared_ui::{
    Badge, BadgeTone, Button, ButtonVariant, Card, CardFooter, ErrorFallback, SearchField,
    SelectField,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookingState {
    Choosing,
    Submitting,
    Confirmed,
}

/// Doctor directory with a booking panel.
#[component]
pub fn Appointments() -> Element {
    let directory = use_hook(|| mock::doctors().and_then(|d| Ok((d, mock::time_slots()?))));

    match directory {
        Ok((doctors, slots)) => rsx! { DoctorDirectory { doctors, slots } },
        Err(e) => rsx! { ErrorFallback { message: e.friendly_message() } },
    }
}

#[component]
fn DoctorDirectory(doctors: Vec<Doctor>, slots: Vec<TimeSlot>) -> Element {
    let mut search = use_signal(String::new);
    let mut specialty = use_signal(|| ALL_FILTER.to_string());
    let mut selected = use_signal(|| Option::<Doctor>::None);

    let specialty_options: Vec<(String, String)> = mock::specialties(&doctors)
        .into_iter()
        .map(|s| (s.clone(), s))
        .collect();
    let visible = mock::filter_doctors(&doctors, &search(), &specialty());
    let count = visible.len();

    rsx! {
        div { class: "page appointments-page",
            div { class: "page-toolbar",
                SearchField {
                    value: search(),
                    placeholder: "Search doctors, departments or specialties",
                    on_input: move |e: FormEvent| search.set(e.value()),
                }
                SelectField {
                    id: "specialty",
                    label: "Specialty",
                    options: specialty_options,
                    value: specialty(),
                    on_change: move |e: FormEvent| specialty.set(e.value()),
                }
            }
            p { class: "page-count", "{count} doctors available" }

            div { class: "card-grid",
                for doctor in visible {
                    DoctorCard {
                        key: "{doctor.id}",
                        doctor: doctor.clone(),
                        on_book: move |d: Doctor| selected.set(Some(d)),
                    }
                }
            }
            if count == 0 {
                p { class: "page-empty", "No doctors match your search." }
            }

            if let Some(doctor) = selected() {
                BookingPanel {
                    key: "{doctor.id}",
                    doctor,
                    slots: slots.clone(),
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[component]
fn DoctorCard(doctor: Doctor, on_book: EventHandler<Doctor>) -> Element {
    let today = if doctor.available_today {
        (BadgeTone::Success, "Available today")
    } else {
        (BadgeTone::Neutral, "Not available today")
    };
    let experience = format!("{} years experience", doctor.experience_years);
    let rating = format!("★ {:.1}", doctor.rating);
    let days = doctor.available_days_label();

    rsx! {
        Card { class: "doctor-card", title: doctor.name.clone(), description: doctor.specialty.clone(),
            div { class: "doctor-meta",
                span { "{doctor.department}" }
                span { "{experience}" }
                span { class: "doctor-rating", "{rating}" }
            }
            div { class: "doctor-days", "Available: {days}" }
            Badge { tone: today.0, "{today.1}" }
            CardFooter {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: {
                        let doctor = doctor.clone();
                        move |_| on_book.call(doctor.clone())
                    },
                    "Book Appointment"
                }
            }
        }
    }
}

#[component]
fn BookingPanel(doctor: Doctor, slots: Vec<TimeSlot>, on_close: EventHandler<()>) -> Element {
    let mut slot = use_signal(|| Option::<TimeSlot>::None);
    let mut state = use_signal(|| BookingState::Choosing);

    let doctor_id = doctor.id.clone();
    let confirm = move |_| {
        let doctor_id = doctor_id.clone();
        async move {
            let Some(chosen) = slot() else {
                return;
            };
            state.set(BookingState::Submitting);
            sleep_ms(config().appointments.booking_delay_ms).await;
            tracing::info!(doctor = %doctor_id, slot = %chosen.id, "appointment booked");
            state.set(BookingState::Confirmed);
        }
    };
    let doctor_name = doctor.name.clone();

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "modal-title", "Book with {doctor_name}" }

                match state() {
                    BookingState::Confirmed => rsx! {
                        div { class: "booking-success", role: "status",
                            p { "Your appointment is confirmed." }
                            if let Some(chosen) = slot() {
                                p { {chosen.label()} " with {doctor.name}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_close.call(()),
                            "Done"
                        }
                    },
                    current => rsx! {
                        p { class: "modal-subtitle", "Choose a time slot" }
                        div { class: "slot-grid",
                            for s in slots.iter().cloned() {
                                button {
                                    key: "{s.id}",
                                    class: "slot",
                                    r#type: "button",
                                    disabled: !s.available,
                                    "data-selected": if slot().as_ref().map(|c| c.id == s.id).unwrap_or(false) { "true" } else { "false" },
                                    onclick: {
                                        let s = s.clone();
                                        move |_| slot.set(Some(s.clone()))
                                    },
                                    {s.label()}
                                }
                            }
                        }
                        div { class: "modal-actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| on_close.call(()),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: slot().is_none(),
                                busy: current == BookingState::Submitting,
                                busy_label: "Booking...",
                                onclick: confirm,
                                "Confirm Booking"
                            }
                        }
                    },
                }
            }
        }
    }
}
