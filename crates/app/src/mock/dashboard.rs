use super::parse_fixture;
use shared_types::{AppError, DashboardData};

const DASHBOARD: &str = include_str!("../../data/dashboard.json");

/// Student dashboard payload. Counts are fixed so repeated loads agree.
pub fn dashboard_data() -> Result<DashboardData, AppError> {
    parse_fixture("dashboard", DASHBOARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use shared_types::access::{path_has_prefix, APP_PREFIX};
    use std::str::FromStr;

    #[test]
    fn payload_is_complete() {
        let data = dashboard_data().unwrap();
        assert_eq!(data.hero.reminders.len(), 3);
        assert_eq!(data.stats.len(), 4);
        assert_eq!(data.actions.len(), 4);
        assert_eq!(data.tips.len(), 4);
        assert_eq!(data.contact.phone, "+251-911-234-567");
    }

    #[test]
    fn repeated_loads_are_identical() {
        assert_eq!(dashboard_data().unwrap(), dashboard_data().unwrap());
    }

    #[test]
    fn links_point_at_app_routes() {
        let data = dashboard_data().unwrap();
        let links = data
            .stats
            .iter()
            .filter_map(|s| s.link.clone())
            .chain(data.actions.iter().map(|a| a.path.clone()));
        for link in links {
            assert!(path_has_prefix(&link, APP_PREFIX), "{link}");
            let route = Route::from_str(&link).unwrap();
            assert!(!matches!(route, Route::NotFound { .. }), "{link}");
        }
    }
}
