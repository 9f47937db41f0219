use crate::auth::{use_auth, LOGIN_FAILED_MESSAGE};
use crate::browser::sleep_ms;
use crate::config::config;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, TextField};

/// `/` shows the sign-in page as well.
#[component]
pub fn Home() -> Element {
    rsx! { Login {} }
}

/// Sign-in form. A visitor who already has a session is forwarded to the
/// dashboard for their role.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut user_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if let Some(session) = auth.session() {
            navigator().replace(Route::home_for(session.role));
        }
    });

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        sleep_ms(config().auth.login_delay_ms).await;

        if auth.login(&user_id(), &password()).is_none() {
            error_msg.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "BDU Clinic Portal",
                description: "Sign in with your university ID",

                if let Some(err) = error_msg() {
                    div { class: "auth-error", role: "alert", "{err}" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    TextField {
                        id: "user_id",
                        label: "University ID",
                        placeholder: "e.g. BDU1234567",
                        value: user_id(),
                        disabled: loading(),
                        on_input: move |e: FormEvent| user_id.set(e.value()),
                    }
                    TextField {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        placeholder: "Your password",
                        value: password(),
                        disabled: loading(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        class: "auth-submit",
                        busy: loading(),
                        busy_label: "Signing in...",
                        "Sign In"
                    }
                }
            }
        }
    }
}
