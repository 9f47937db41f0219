pub mod admin_dashboard;
pub mod appointments;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod records;
pub mod settings;
pub mod staff;
pub mod support;
pub mod wellness;

use crate::guards::{AdminGuard, AuthGuard};
use crate::shell::{AdminShell, AppShell};
use dioxus::prelude::*;
use shared_types::Role;

use admin_dashboard::AdminDashboard;
use appointments::Appointments;
use dashboard::Dashboard;
use login::{Home, Login};
use not_found::NotFound;
use records::Records;
use settings::ClinicSettings;
use staff::StaffManagement;
use support::Support;
use wellness::Wellness;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[redirect("/app", || Route::Dashboard {})]
    #[redirect("/admin", || Route::AdminDashboard {})]
    #[layout(AuthGuard)]
        #[layout(AppShell)]
            #[route("/app/dashboard")]
            Dashboard {},
            #[route("/app/appointments")]
            Appointments {},
            #[route("/app/records")]
            Records {},
            #[route("/app/wellness")]
            Wellness {},
            #[route("/app/support")]
            Support {},
        #[end_layout]
    #[end_layout]
    #[layout(AdminGuard)]
        #[layout(AdminShell)]
            #[route("/admin/dashboard")]
            AdminDashboard {},
            #[route("/admin/staff")]
            StaffManagement {},
            #[route("/admin/settings")]
            ClinicSettings {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing page after sign-in.
    pub fn home_for(role: Role) -> Self {
        if role.is_admin() {
            Route::AdminDashboard {}
        } else {
            Route::Dashboard {}
        }
    }
}

/// Push an in-app path such as a dashboard link. Paths outside the route
/// table land on the 404 page.
pub fn navigate_to_path(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(e) => tracing::warn!(path, error = %e, "unroutable link"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::access::home_path;
    use std::str::FromStr;

    #[test]
    fn home_route_matches_home_path() {
        for role in Role::ALL {
            assert_eq!(Route::home_for(role).to_string(), home_path(role));
        }
    }

    #[test]
    fn paths_resolve_to_pages() {
        let cases = [
            ("/", Route::Home {}),
            ("/login", Route::Login {}),
            ("/app/dashboard", Route::Dashboard {}),
            ("/app/wellness", Route::Wellness {}),
            ("/admin/staff", Route::StaffManagement {}),
            ("/admin/settings", Route::ClinicSettings {}),
        ];
        for (path, route) in cases {
            assert_eq!(Route::from_str(path).unwrap(), route, "{path}");
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for path in ["/nowhere", "/app/unknown", "/administer"] {
            assert!(
                matches!(Route::from_str(path).unwrap(), Route::NotFound { .. }),
                "{path}"
            );
        }
    }
}
