use super::{matches_query, parse_fixture, ALL_FILTER};
use shared_types::{AppError, ClinicUser, Role};

const CLINIC_USERS: &str = include_str!("../../data/clinic_users.json");

pub fn clinic_users() -> Result<Vec<ClinicUser>, AppError> {
    parse_fixture("clinic_users", CLINIC_USERS)
}

/// Role filter options as `(value, label)` pairs.
pub fn role_options() -> Vec<(String, String)> {
    std::iter::once((ALL_FILTER.to_string(), "All Roles".to_string()))
        .chain(
            Role::ALL
                .iter()
                .map(|r| (r.as_str().to_string(), r.label().to_string())),
        )
        .collect()
}

/// Search name and email. `role` is a lowercase role name or `All`.
pub fn filter_users(users: &[ClinicUser], query: &str, role: &str) -> Vec<ClinicUser> {
    let wanted = Role::parse(role);
    users
        .iter()
        .filter(|u| role == ALL_FILTER || wanted == Some(u.role))
        .filter(|u| matches_query(query, &[&u.name, &u.email]))
        .cloned()
        .collect()
}
