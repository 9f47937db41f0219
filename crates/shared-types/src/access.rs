//! Route access policy.
//!
//! Guards never inspect the session directly. The session is first reduced
//! to a [`Viewer`], and the guard outcome is a total function of
//! `(Guard, Viewer)` so that the authentication check always precedes the
//! role check.

use crate::{Role, Session};

pub const LOGIN_PATH: &str = "/login";
pub const APP_PREFIX: &str = "/app";
pub const ADMIN_PREFIX: &str = "/admin";
/// Where authenticated non-admins land, including when refused by the admin guard.
pub const DEFAULT_DASHBOARD_PATH: &str = "/app/dashboard";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Who is looking at the page, as far as routing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    /// Authenticated student or staff member.
    Member,
    Admin,
}

impl Viewer {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session.map(|s| s.role) {
            None => Viewer::Anonymous,
            Some(Role::Admin) => Viewer::Admin,
            Some(Role::Student | Role::Staff) => Viewer::Member,
        }
    }
}

/// The two gatekeepers in the route tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Authenticated,
    Admin,
}

/// What a guard does with the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

impl GuardAction {
    /// Target path for redirecting actions.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardAction::Render => None,
            GuardAction::RedirectToLogin => Some(LOGIN_PATH),
            GuardAction::RedirectToDashboard => Some(DEFAULT_DASHBOARD_PATH),
        }
    }
}

pub fn decide(guard: Guard, viewer: Viewer) -> GuardAction {
    match (guard, viewer) {
        (_, Viewer::Anonymous) => GuardAction::RedirectToLogin,
        (Guard::Authenticated, Viewer::Member | Viewer::Admin) => GuardAction::Render,
        (Guard::Admin, Viewer::Member) => GuardAction::RedirectToDashboard,
        (Guard::Admin, Viewer::Admin) => GuardAction::Render,
    }
}

/// Capability a path prefix requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Public,
    Authenticated,
    Admin,
}

impl Capability {
    pub fn guard(&self) -> Option<Guard> {
        match self {
            Capability::Public => None,
            Capability::Authenticated => Some(Guard::Authenticated),
            Capability::Admin => Some(Guard::Admin),
        }
    }
}

pub fn required_capability(path: &str) -> Capability {
    if path_has_prefix(path, ADMIN_PREFIX) {
        Capability::Admin
    } else if path_has_prefix(path, APP_PREFIX) {
        Capability::Authenticated
    } else {
        Capability::Public
    }
}

/// Guard outcome for an arbitrary path.
pub fn evaluate(path: &str, viewer: Viewer) -> GuardAction {
    required_capability(path)
        .guard()
        .map(|guard| decide(guard, viewer))
        .unwrap_or(GuardAction::Render)
}

/// Landing page after login.
pub fn home_path(role: Role) -> &'static str {
    if role.is_admin() {
        ADMIN_DASHBOARD_PATH
    } else {
        DEFAULT_DASHBOARD_PATH
    }
}

/// True when `path` equals `prefix` or continues it at a `/` boundary,
/// so `/administer` does not fall under `/admin`.
pub fn path_has_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session::new("ID", "Someone", role)
    }

    #[test]
    fn viewer_from_session() {
        assert_eq!(Viewer::from_session(None), Viewer::Anonymous);
        assert_eq!(Viewer::from_session(Some(&session(Role::Student))), Viewer::Member);
        assert_eq!(Viewer::from_session(Some(&session(Role::Staff))), Viewer::Member);
        assert_eq!(Viewer::from_session(Some(&session(Role::Admin))), Viewer::Admin);
    }

    #[test]
    fn anonymous_is_sent_to_login_by_both_guards() {
        for guard in [Guard::Authenticated, Guard::Admin] {
            assert_eq!(decide(guard, Viewer::Anonymous), GuardAction::RedirectToLogin);
        }
    }

    #[test]
    fn non_admin_roles_are_sent_to_dashboard_by_admin_guard() {
        for role in Role::ALL.into_iter().filter(|r| !r.is_admin()) {
            let viewer = Viewer::from_session(Some(&session(role)));
            assert_eq!(decide(Guard::Admin, viewer), GuardAction::RedirectToDashboard);
            assert_eq!(
                decide(Guard::Admin, viewer).redirect_path(),
                Some(DEFAULT_DASHBOARD_PATH)
            );
        }
    }

    #[test]
    fn every_role_passes_the_authenticated_guard() {
        for role in Role::ALL {
            let viewer = Viewer::from_session(Some(&session(role)));
            assert_eq!(decide(Guard::Authenticated, viewer), GuardAction::Render);
        }
    }

    #[test]
    fn admin_passes_admin_guard() {
        assert_eq!(decide(Guard::Admin, Viewer::Admin), GuardAction::Render);
    }

    #[test]
    fn capability_follows_path_prefix() {
        assert_eq!(required_capability("/"), Capability::Public);
        assert_eq!(required_capability("/login"), Capability::Public);
        assert_eq!(required_capability("/app"), Capability::Authenticated);
        assert_eq!(required_capability("/app/records"), Capability::Authenticated);
        assert_eq!(required_capability("/admin/staff"), Capability::Admin);
        assert_eq!(required_capability("/administer"), Capability::Public);
        assert_eq!(required_capability("/apple"), Capability::Public);
    }

    #[test]
    fn evaluate_checks_authentication_before_role() {
        assert_eq!(evaluate("/admin/staff", Viewer::Anonymous), GuardAction::RedirectToLogin);
        assert_eq!(evaluate("/admin/staff", Viewer::Member), GuardAction::RedirectToDashboard);
        assert_eq!(evaluate("/login", Viewer::Anonymous), GuardAction::Render);
        assert_eq!(evaluate("/nowhere", Viewer::Anonymous), GuardAction::Render);
    }

    #[test]
    fn home_path_by_role() {
        assert_eq!(home_path(Role::Admin), ADMIN_DASHBOARD_PATH);
        assert_eq!(home_path(Role::Student), DEFAULT_DASHBOARD_PATH);
        assert_eq!(home_path(Role::Staff), DEFAULT_DASHBOARD_PATH);
    }

    #[test]
    fn prefix_match_respects_segments() {
        assert!(path_has_prefix("/app/records", "/app/records"));
        assert!(path_has_prefix("/app/records/rec_001", "/app/records"));
        assert!(path_has_prefix("/app/records?status=all", "/app/records"));
        assert!(!path_has_prefix("/app/recordsx", "/app/records"));
        assert!(path_has_prefix("/admin/", "/admin/"));
    }
}
