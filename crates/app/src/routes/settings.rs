use super::not_found::NotFound;
use dioxus::prelude::*;

/// Clinic settings have no page yet; the route renders the 404 view inside
/// the admin shell.
#[component]
pub fn ClinicSettings() -> Element {
    rsx! {
        NotFound { route: vec!["admin".to_string(), "settings".to_string()] }
    }
}
