use crate::auth::use_session;
use crate::browser::sleep_ms;
use crate::config::config;
use crate::mock;
use crate::routes::{navigate_to_path, Route};
use crate::shell::app_nav;
use dioxus::prelude::*;
use shared_types::{AppError, DashboardData};
use shared_ui::{
    ActionCard, Button, ButtonVariant, ContactCard, ErrorFallback, HeroBanner, HeroReminder,
    Loading, StatCard, TipList,
};

/// First word of the display name, for the greeting.
fn first_name(display_name: &str) -> &str {
    display_name.split_whitespace().next().unwrap_or(display_name)
}

async fn load_dashboard() -> Result<DashboardData, AppError> {
    sleep_ms(config().dashboard.load_delay_ms).await;
    mock::dashboard_data()
}

/// Student dashboard.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let mut data = use_resource(load_dashboard);

    let greeting = match &session {
        Some(s) => format!("Welcome back, {}", first_name(&s.display_name)),
        None => "Welcome back".to_string(),
    };

    let body = match &*data.read() {
        None => rsx! { Loading { message: "Loading your dashboard..." } },
        Some(Err(e)) => rsx! {
            ErrorFallback {
                message: e.friendly_message(),
                retryable: true,
                on_retry: move |_| data.restart(),
            }
        },
        Some(Ok(dashboard)) => rsx! { DashboardBody { dashboard: dashboard.clone(), greeting } },
    };

    rsx! {
        div { class: "page dashboard-page",
            div { class: "page-toolbar",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| data.restart(),
                    "Refresh"
                }
            }
            {body}
        }
    }
}

#[component]
fn DashboardBody(dashboard: DashboardData, greeting: String) -> Element {
    let reminders: Vec<HeroReminder> = dashboard
        .hero
        .reminders
        .iter()
        .map(|r| HeroReminder {
            text: r.text.clone(),
            kind: r.kind.as_str(),
        })
        .collect();
    let tips: Vec<String> = dashboard.tips.iter().map(|t| t.text.clone()).collect();
    let nav = app_nav();

    rsx! {
        HeroBanner {
            title: greeting,
            subtitle: dashboard.hero.subtitle.clone(),
            reminders,
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| { navigator().push(Route::Appointments {}); },
                    "Book Appointment"
                }
            },
        }

        section { class: "stat-grid",
            for stat in dashboard.stats.iter().cloned() {
                StatCard {
                    key: "{stat.id}",
                    value: stat.value.clone(),
                    label: stat.label.clone(),
                    accent: stat.color.clone(),
                    status: stat.status.clone(),
                    clickable: stat.link.is_some(),
                    onclick: {
                        let link = stat.link.clone();
                        move |_| {
                            if let Some(link) = &link {
                                navigate_to_path(link);
                            }
                        }
                    },
                }
            }
        }

        section { class: "dashboard-columns",
            div { class: "action-grid",
                for action in dashboard.actions.iter().cloned() {
                    ActionCard {
                        key: "{action.id}",
                        title: action.name.clone(),
                        description: action.description.clone(),
                        accent: action.color.clone(),
                        icon: nav.iter().find(|e| e.path() == action.path).map(|e| e.icon.render()),
                        onclick: {
                            let path = action.path.clone();
                            move |_| navigate_to_path(&path)
                        },
                    }
                }
            }
            aside { class: "dashboard-aside",
                TipList { tips }
                ContactCard {
                    label: dashboard.contact.label.clone(),
                    phone: dashboard.contact.phone.clone(),
                    note: "Open 24/7 for emergencies",
                }
            }
        }
    }
}
