use crate::mock;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::AdminSummary;
use shared_ui::{Badge, BadgeTone, Card, ErrorFallback, StatCard};

fn activity_tone(tone: mock::ActivityTone) -> BadgeTone {
    match tone {
        mock::ActivityTone::Success => BadgeTone::Success,
        mock::ActivityTone::Info => BadgeTone::Info,
        mock::ActivityTone::Warning => BadgeTone::Warning,
    }
}

/// Clinic overview for administrators.
#[component]
pub fn AdminDashboard() -> Element {
    match use_hook(mock::admin_summary) {
        Ok(summary) => rsx! { AdminOverview { summary } },
        Err(e) => rsx! { ErrorFallback { message: e.friendly_message() } },
    }
}

#[component]
fn AdminOverview(summary: AdminSummary) -> Element {
    let activity = mock::recent_activity();

    rsx! {
        div { class: "page admin-dashboard-page",
            section { class: "stat-grid",
                StatCard {
                    value: summary.total_staff.to_string(),
                    label: "Total Staff",
                    accent: "#3182CE",
                    status: "Manage accounts",
                    clickable: true,
                    onclick: move |_| { navigator().push(Route::StaffManagement {}); },
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                }
                StatCard {
                    value: summary.active_doctors.to_string(),
                    label: "Active Doctors",
                    accent: "#38A169",
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 } },
                }
                StatCard {
                    value: summary.pending_follow_ups.to_string(),
                    label: "Pending Follow-ups",
                    accent: "#ED8936",
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 20, height: 20 } },
                }
                StatCard {
                    value: summary.visits_today.to_string(),
                    label: "Visits Today",
                    accent: "#9F7AEA",
                    status: format!("{} patient records on file", summary.total_patients),
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                }
            }

            Card { title: "Recent System Activity",
                ul { class: "activity-list",
                    for (i, entry) in activity.into_iter().enumerate() {
                        li { key: "{i}", class: "activity-item", "data-tone": entry.tone.as_str(),
                            span { class: "activity-time", "{entry.time}" }
                            div { class: "activity-content",
                                p { class: "activity-text", "{entry.text}" }
                                Badge { tone: activity_tone(entry.tone), "{entry.meta}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
