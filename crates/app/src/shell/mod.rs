//! Layout shells wrapping the guarded route trees: sidebar, header and the
//! page outlet.

mod nav;
mod state;

pub use nav::*;
pub use state::*;

use crate::auth::use_auth;
use crate::browser::{BrowserListener, VIEWPORT_WIDTH_LISTENER};
use crate::config::config;
use crate::routes::Route;
use crate::theme::use_theme;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu, LdMonitor, LdMoon, LdSun};
use dioxus_free_icons::Icon;
use shared_ui::{
    Button, ButtonVariant, SidebarBrand, SidebarFooter, SidebarFrame, SidebarInset, SidebarNav,
    SidebarNavButton, SidebarTrigger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellKind {
    Standard,
    Admin,
}

impl ShellKind {
    fn entries(self) -> Vec<NavEntry> {
        match self {
            ShellKind::Standard => app_nav(),
            ShellKind::Admin => admin_nav(),
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            ShellKind::Standard => "Student Portal",
            ShellKind::Admin => "Administration",
        }
    }

    // Each shell owns its own registration so a shell mounting while the
    // other unmounts never tears down the wrong listener.
    fn viewport_listener(self) -> BrowserListener {
        match self {
            ShellKind::Standard => BrowserListener::new("viewport-app"),
            ShellKind::Admin => BrowserListener::new("viewport-admin"),
        }
    }
}

/// Shell for `/app/*`.
#[component]
pub fn AppShell() -> Element {
    rsx! { Shell { kind: ShellKind::Standard } }
}

/// Shell for `/admin/*`.
#[component]
pub fn AdminShell() -> Element {
    rsx! { Shell { kind: ShellKind::Admin } }
}

#[component]
fn Shell(kind: ShellKind) -> Element {
    let route: Route = use_route();
    let current_path = route.to_string();
    let mut auth = use_auth();
    let mut theme = use_theme();

    let breakpoint = config().layout.mobile_breakpoint;
    // Desktop until the first width arrives from the viewport listener.
    let mut shell = use_signal(|| ShellState::new(breakpoint.saturating_add(1), breakpoint));

    let listener = kind.viewport_listener();
    use_future(move || async move {
        let mut channel = listener.install(VIEWPORT_WIDTH_LISTENER);
        let mut first = true;
        while let Ok(width) = channel.recv::<u32>().await {
            if first {
                shell.set(ShellState::new(width, breakpoint));
                first = false;
            } else if (width <= breakpoint) != shell.peek().is_mobile {
                shell.write().on_resize(width);
            }
        }
    });
    use_drop(move || listener.teardown());

    let state = shell();
    let collapsed = state.collapsed();
    let session = auth.session();
    let mode = theme.mode();
    let explicit_theme = theme.has_explicit_choice();
    let title = page_title(&route);

    rsx! {
        div { class: "shell", "data-shell": if kind == ShellKind::Admin { "admin" } else { "app" },
            SidebarFrame {
                open: state.sidebar_open,
                mobile: state.is_mobile,
                on_dismiss: move |_| shell.write().close_if_mobile(),
                SidebarBrand {
                    title: "BDU Clinic",
                    subtitle: kind.subtitle().to_string(),
                    collapsed,
                }
                SidebarNav {
                    for entry in kind.entries() {
                        SidebarNavButton {
                            key: "{entry.label}",
                            label: entry.label.to_string(),
                            active: entry.is_active(&current_path),
                            collapsed,
                            icon: entry.icon.render(),
                            onclick: {
                                let target = entry.route.clone();
                                move |_| {
                                    navigator().push(target.clone());
                                    shell.write().close_if_mobile();
                                }
                            },
                        }
                    }
                }
                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            auth.logout();
                            navigator().replace(Route::Login {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        if !collapsed {
                            span { "Logout" }
                        }
                    }
                }
            }

            SidebarInset { sidebar_open: state.sidebar_open, mobile: state.is_mobile,
                header { class: "shell-header",
                    SidebarTrigger { onclick: move |_| shell.write().toggle(),
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    h1 { class: "shell-title", "{title}" }
                    div { class: "shell-header-actions",
                        button {
                            class: "theme-toggle",
                            r#type: "button",
                            "aria-label": if mode.is_dark() { "Switch to light mode" } else { "Switch to dark mode" },
                            onclick: move |_| {
                                theme.toggle();
                            },
                            if mode.is_dark() {
                                Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
                            } else {
                                Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
                            }
                        }
                        if explicit_theme {
                            button {
                                class: "theme-toggle",
                                r#type: "button",
                                title: "Follow system theme",
                                "aria-label": "Follow system theme",
                                onclick: move |_| theme.follow_system(),
                                Icon::<LdMonitor> { icon: LdMonitor, width: 18, height: 18 }
                            }
                        }
                        if let Some(session) = session {
                            div { class: "shell-user",
                                span { class: "shell-user-name", "{session.display_name}" }
                                span { class: "shell-user-role", {session.role.label()} }
                            }
                        }
                    }
                }
                div { class: "shell-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
