use crate::mock::{self, ALL_FILTER};
use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Badge, BadgeTone, ErrorFallback, SearchField, SelectField};

fn role_tone(role: Role) -> BadgeTone {
    match role {
        Role::Admin => BadgeTone::Accent,
        Role::Staff => BadgeTone::Info,
        Role::Student => BadgeTone::Neutral,
    }
}

/// Directory of clinic accounts with search and a role filter.
#[component]
pub fn StaffManagement() -> Element {
    let users = use_hook(mock::clinic_users);
    let mut search = use_signal(String::new);
    let mut role = use_signal(|| ALL_FILTER.to_string());

    let users = match users {
        Ok(users) => users,
        Err(e) => return rsx! { ErrorFallback { message: e.friendly_message() } },
    };
    let visible = mock::filter_users(&users, &search(), &role());

    rsx! {
        div { class: "page staff-page",
            div { class: "page-toolbar",
                SearchField {
                    value: search(),
                    placeholder: "Search by name or email",
                    on_input: move |e: FormEvent| search.set(e.value()),
                }
                SelectField {
                    id: "role-filter",
                    label: "Role",
                    options: mock::role_options(),
                    value: role(),
                    on_change: move |e: FormEvent| role.set(e.value()),
                }
            }

            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Role" }
                        th { "Department" }
                        th { "Email" }
                        th { "Status" }
                    }
                }
                tbody {
                    for user in visible.iter() {
                        tr { key: "{user.id}",
                            td {
                                div { "{user.name}" }
                                div { class: "data-table-sub", "{user.id}" }
                            }
                            td {
                                Badge { tone: role_tone(user.role), {user.role.label()} }
                            }
                            td { "{user.department}" }
                            td { "{user.email}" }
                            td {
                                if user.active {
                                    Badge { tone: BadgeTone::Success, "Active" }
                                } else {
                                    Badge { tone: BadgeTone::Danger, "Inactive" }
                                }
                            }
                        }
                    }
                }
            }
            if visible.is_empty() {
                p { class: "page-empty", "No accounts match your filters." }
            }
        }
    }
}
