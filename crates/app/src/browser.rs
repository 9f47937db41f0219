//! Browser access through `document::eval`.
//!
//! Every event listener installed here is registered by name on
//! `window.__clinicListeners` together with its teardown function, so the
//! owning component can remove it deterministically when it unmounts.

use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::theme::{publish_script, ThemeTokens};
use std::collections::HashMap;

/// Read `keys` from `localStorage`. Missing keys are absent from the map.
pub async fn read_local_storage(keys: &[&str]) -> Result<HashMap<String, String>, AppError> {
    let keys_json = serde_json::to_string(keys)?;
    let mut eval = document::eval(&format!(
        r#"
        var out = {{}};
        try {{
            var keys = {keys_json};
            for (var i = 0; i < keys.length; i++) {{
                var v = window.localStorage.getItem(keys[i]);
                if (v !== null) {{ out[keys[i]] = v; }}
            }}
        }} catch (e) {{}}
        dioxus.send(out);
        "#
    ));
    eval.recv::<HashMap<String, String>>()
        .await
        .map_err(|e| AppError::storage(e.to_string()))
}

/// Write (or remove, for `None`) one `localStorage` entry. Browser-side
/// failures such as a full or disabled store are swallowed.
pub fn write_local_storage(key: &str, value: Option<&str>) {
    let key = serde_json::Value::String(key.to_string());
    let op = match value {
        Some(v) => format!(
            "window.localStorage.setItem({key}, {});",
            serde_json::Value::String(v.to_string())
        ),
        None => format!("window.localStorage.removeItem({key});"),
    };
    document::eval(&format!("try {{ {op} }} catch (e) {{}}"));
}

/// Publish the theme's CSS custom properties onto `<html>`.
pub fn publish_tokens(tokens: &ThemeTokens) {
    document::eval(&publish_script(tokens));
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    let mut eval = document::eval(&format!(
        "setTimeout(function() {{ dioxus.send(true); }}, {ms});"
    ));
    if let Err(e) = eval.recv::<bool>().await {
        tracing::warn!(error = %e, "timer failed, continuing immediately");
    }
}

/// A named, removable browser event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserListener {
    name: &'static str,
}

impl BrowserListener {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// `body` runs inside a function and must return the teardown function.
    /// A listener already registered under the same name is torn down first.
    pub fn install_script(&self, body: &str) -> String {
        let name = serde_json::Value::String(self.name.to_string());
        format!(
            "var registry = window.__clinicListeners = window.__clinicListeners || {{}}; \
             if (registry[{name}]) {{ registry[{name}](); }} \
             registry[{name}] = (function() {{ {body} }})();"
        )
    }

    pub fn teardown_script(&self) -> String {
        let name = serde_json::Value::String(self.name.to_string());
        format!(
            "var registry = window.__clinicListeners || {{}}; \
             if (registry[{name}]) {{ registry[{name}](); delete registry[{name}]; }}"
        )
    }

    /// Install and return the channel the listener sends on.
    pub fn install(&self, body: &str) -> document::Eval {
        tracing::debug!(listener = self.name, "installing browser listener");
        document::eval(&self.install_script(body))
    }

    pub fn teardown(&self) {
        tracing::debug!(listener = self.name, "removing browser listener");
        document::eval(&self.teardown_script());
    }
}

/// Sends `true`/`false` for `prefers-color-scheme: dark`, once on install and
/// again on every change.
pub const COLOR_SCHEME_LISTENER: &str = r#"
    if (!window.matchMedia) { return function() {}; }
    var mq = window.matchMedia('(prefers-color-scheme: dark)');
    var handler = function(e) { dioxus.send(e.matches); };
    dioxus.send(mq.matches);
    mq.addEventListener('change', handler);
    return function() { mq.removeEventListener('change', handler); };
"#;

/// Sends `window.innerWidth`, once on install and again on every resize.
pub const VIEWPORT_WIDTH_LISTENER: &str = r#"
    var handler = function() { dioxus.send(window.innerWidth); };
    handler();
    window.addEventListener('resize', handler);
    return function() { window.removeEventListener('resize', handler); };
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_replaces_previous_registration() {
        let script = BrowserListener::new("viewport").install_script("return function() {};");
        let replace = script.find(r#"if (registry["viewport"]) { registry["viewport"](); }"#);
        let register = script.find(r#"registry["viewport"] = (function()"#);
        assert!(replace.is_some());
        assert!(register.is_some());
        assert!(replace < register);
    }

    #[test]
    fn teardown_runs_and_forgets_listener() {
        let script = BrowserListener::new("color-scheme").teardown_script();
        assert!(script.contains(r#"registry["color-scheme"]();"#));
        assert!(script.contains(r#"delete registry["color-scheme"];"#));
    }

    #[test]
    fn listener_bodies_return_teardown() {
        for body in [COLOR_SCHEME_LISTENER, VIEWPORT_WIDTH_LISTENER] {
            assert!(body.contains("removeEventListener"));
            assert!(body.trim_end().ends_with("};"));
        }
    }
}
