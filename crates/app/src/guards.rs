use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::access::{decide, Guard, GuardAction};

/// Route the guard sends the visitor to, if any.
pub fn redirect_route(action: GuardAction) -> Option<Route> {
    match action {
        GuardAction::Render => None,
        GuardAction::RedirectToLogin => Some(Route::Login {}),
        GuardAction::RedirectToDashboard => Some(Route::Dashboard {}),
    }
}

fn guarded_outlet(guard: Guard) -> Element {
    let auth = use_auth();
    let viewer = auth.viewer();

    match redirect_route(decide(guard, viewer)) {
        None => rsx! { Outlet::<Route> {} },
        Some(target) => {
            tracing::debug!(?guard, ?viewer, to = %target, "guard redirect");
            navigator().replace(target);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Layout for `/app/*`: any signed-in user.
#[component]
pub fn AuthGuard() -> Element {
    guarded_outlet(Guard::Authenticated)
}

/// Layout for `/admin/*`: sign-in is checked before the admin role.
#[component]
pub fn AdminGuard() -> Element {
    guarded_outlet(Guard::Admin)
}
