use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdFileText, LdLayoutDashboard, LdLifeBuoy, LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::access::path_has_prefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Calendar,
    Records,
    Wellness,
    Support,
    Staff,
    Settings,
}

impl NavIcon {
    pub fn render(self) -> Element {
        match self {
            NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
            NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
            NavIcon::Records => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
            NavIcon::Wellness => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
            NavIcon::Support => rsx! { Icon::<LdLifeBuoy> { icon: LdLifeBuoy, width: 18, height: 18 } },
            NavIcon::Staff => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
    pub icon: NavIcon,
}

impl NavEntry {
    fn new(label: &'static str, route: Route, icon: NavIcon) -> Self {
        Self { label, route, icon }
    }

    pub fn path(&self) -> String {
        self.route.to_string()
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(&self.path(), current_path)
    }
}

/// Sidebar entries of the standard shell.
pub fn app_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Dashboard", Route::Dashboard {}, NavIcon::Dashboard),
        NavEntry::new("Book Appointment", Route::Appointments {}, NavIcon::Calendar),
        NavEntry::new("Medical Records", Route::Records {}, NavIcon::Records),
        NavEntry::new("Wellness Hub", Route::Wellness {}, NavIcon::Wellness),
        NavEntry::new("Help & Support", Route::Support {}, NavIcon::Support),
    ]
}

/// Sidebar entries of the admin shell.
pub fn admin_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Dashboard", Route::AdminDashboard {}, NavIcon::Dashboard),
        NavEntry::new("Staff Management", Route::StaffManagement {}, NavIcon::Staff),
        NavEntry::new("Clinic Settings", Route::ClinicSettings {}, NavIcon::Settings),
    ]
}

/// Exact match, or `current_path` continues `entry_path` at a segment boundary.
pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    entry_path == current_path || path_has_prefix(current_path, entry_path)
}

/// Header title for a page inside either shell.
pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Dashboard {} => "Student Dashboard",
        Route::Appointments {} => "Book Appointment",
        Route::Records {} => "Medical Records",
        Route::Wellness {} => "Wellness Hub",
        Route::Support {} => "Help & Support",
        Route::AdminDashboard {} => "Admin Dashboard",
        Route::StaffManagement {} => "Staff Management",
        Route::ClinicSettings {} => "Clinic Settings",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::access::{path_has_prefix, ADMIN_PREFIX, APP_PREFIX};

    #[test]
    fn entry_sets_are_disjoint() {
        let app: Vec<String> = app_nav().iter().map(NavEntry::path).collect();
        for entry in admin_nav() {
            assert!(!app.contains(&entry.path()), "{} in both shells", entry.path());
        }
    }

    #[test]
    fn entries_live_under_their_shell_prefix() {
        assert!(app_nav().iter().all(|e| path_has_prefix(&e.path(), APP_PREFIX)));
        assert!(admin_nav().iter().all(|e| path_has_prefix(&e.path(), ADMIN_PREFIX)));
    }

    #[test]
    fn app_nav_order() {
        let labels: Vec<_> = app_nav().iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["Dashboard", "Book Appointment", "Medical Records", "Wellness Hub", "Help & Support"]
        );
    }

    #[test]
    fn active_on_exact_and_segment_prefix() {
        assert!(is_active("/app/records", "/app/records"));
        assert!(is_active("/app/records", "/app/records/42"));
        assert!(!is_active("/app/records", "/app/recordsx"));
        assert!(!is_active("/app/records", "/app"));
    }

    #[test]
    fn exactly_one_entry_active_per_page() {
        for entry in app_nav() {
            let path = entry.path();
            let active = app_nav().iter().filter(|e| e.is_active(&path)).count();
            assert_eq!(active, 1, "{path}");
        }
    }

    #[test]
    fn titles_cover_every_nav_entry() {
        for entry in app_nav().into_iter().chain(admin_nav()) {
            assert!(!page_title(&entry.route).is_empty(), "{}", entry.label);
        }
    }
}
