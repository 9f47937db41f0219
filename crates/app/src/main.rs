use dioxus::prelude::*;

mod auth;
mod browser;
mod config;
mod guards;
mod mock;
mod routes;
mod shell;
mod storage;
mod theme;

use auth::AuthState;
use routes::Route;
use shared_ui::Loading;
use storage::{LocalStorage, PERSISTED_KEYS};
use theme::{ThemeState, ThemeSync};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Reads the persisted keys once, then mounts the portal on top of that
/// snapshot.
#[component]
fn App() -> Element {
    let snapshot = use_resource(|| LocalStorage::load(&PERSISTED_KEYS));
    let storage = snapshot.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match storage {
            Some(storage) => rsx! { Portal { storage } },
            None => rsx! { Loading { message: "Starting the clinic portal..." } },
        }
    }
}

/// Provides the auth and theme stores, keeps the document theme in sync and
/// hosts the router.
#[component]
fn Portal(storage: LocalStorage) -> Element {
    let settings = config::config();

    use_context_provider(|| AuthState::restored(storage.clone()));
    use_context_provider(|| ThemeState::new(storage.clone(), settings.theme.default_mode));

    rsx! {
        ThemeSync {}
        Router::<Route> {}
    }
}
