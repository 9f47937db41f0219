use dioxus::prelude::*;

// ─── Frame ─────────────────────────────────────────────────────────────

/// Collapsible sidebar frame.
///
/// The frame holds no state of its own: `open` and `mobile` come from the
/// owning shell. On mobile, an open sidebar is drawn over the content with
/// a backdrop; tapping the backdrop fires `on_dismiss`.
#[component]
pub fn SidebarFrame(
    open: bool,
    mobile: bool,
    #[props(default)] on_dismiss: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", if open { "open" } else { "closed" }, None, false),
        Attribute::new(
            "data-viewport",
            if mobile { "mobile" } else { "desktop" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if mobile && open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| on_dismiss.call(()),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Brand block at the top of the sidebar. The subtitle hides when collapsed.
#[component]
pub fn SidebarBrand(title: String, #[props(default)] subtitle: String, collapsed: bool) -> Element {
    rsx! {
        div { class: "sidebar-brand", "data-collapsed": if collapsed { "true" } else { "false" },
            span { class: "sidebar-brand-name", "{title}" }
            if !collapsed && !subtitle.is_empty() {
                span { class: "sidebar-brand-subtitle", "{subtitle}" }
            }
        }
    }
}

// ─── Navigation ────────────────────────────────────────────────────────

/// Navigation list inside the sidebar.
#[component]
pub fn SidebarNav(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-nav", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            ul { class: "sidebar-menu", {children} }
        }
    }
}

/// One navigation entry. When collapsed only the icon is shown and the
/// label moves into the `title` attribute.
#[component]
pub fn SidebarNavButton(
    label: String,
    #[props(default = false)] active: bool,
    #[props(default = false)] collapsed: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    icon: Option<Element>,
) -> Element {
    rsx! {
        li { class: "sidebar-menu-item",
            button {
                class: "sidebar-menu-button",
                r#type: "button",
                title: if collapsed { label.clone() } else { String::new() },
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| onclick.call(evt),
                if let Some(icon) = icon {
                    span { class: "sidebar-menu-icon", {icon} }
                }
                if !collapsed {
                    span { class: "sidebar-menu-label", "{label}" }
                }
            }
        }
    }
}

/// Footer strip inside the sidebar.
#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Main content column next to the sidebar. Its left margin tracks the
/// sidebar width on desktop and is zero on mobile.
#[component]
pub fn SidebarInset(
    sidebar_open: bool,
    mobile: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let offset = match (mobile, sidebar_open) {
        (true, _) => "none",
        (false, true) => "full",
        (false, false) => "collapsed",
    };
    let base = vec![
        Attribute::new("class", "sidebar-inset", None, false),
        Attribute::new("data-offset", offset, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}

/// Header button that toggles the sidebar.
#[component]
pub fn SidebarTrigger(
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
