//! Design tokens and their projection onto the document root.
//!
//! The token set is a pure function of [`ThemeMode`]. Publishing goes
//! through a [`TokenSink`], so the same projection drives the browser
//! (via [`ScriptSink`]) and tests (via [`DocumentState`]).

use shared_types::ThemeMode;
use std::collections::BTreeMap;

/// Named scale such as spacing or radii, in publication order.
pub type Scale = &'static [(&'static str, &'static str)];

#[derive(Debug, Clone, PartialEq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub inverted: &'static str,
    pub muted: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemanticColors {
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text: TextColors,
    pub semantic: SemanticColors,
    pub neutrals: Scale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_primary: &'static str,
    pub font_secondary: &'static str,
    pub font_code: &'static str,
    pub sizes: Scale,
    pub base_font_size: &'static str,
    pub line_height: f32,
}

/// Full token set for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTokens {
    pub mode: ThemeMode,
    pub colors: Palette,
    pub typography: Typography,
    pub spacing: Scale,
    pub radii: Scale,
    pub elevations: Scale,
    pub transitions: Scale,
}

const TYPOGRAPHY: Typography = Typography {
    font_primary: "'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial",
    font_secondary: "'Roboto', system-ui, sans-serif",
    font_code: "'Source Code Pro', Menlo, monospace",
    sizes: &[
        ("xs", "0.75rem"),
        ("sm", "0.875rem"),
        ("md", "1rem"),
        ("lg", "1.125rem"),
        ("xl", "1.25rem"),
        ("xxl", "1.5rem"),
    ],
    base_font_size: "16px",
    line_height: 1.45,
};

const SPACING: Scale = &[
    ("xs", "0.25rem"),
    ("sm", "0.5rem"),
    ("md", "1rem"),
    ("lg", "1.5rem"),
    ("xl", "2rem"),
    ("xxl", "3rem"),
];

const RADII: Scale = &[
    ("none", "0"),
    ("sm", "6px"),
    ("md", "8px"),
    ("lg", "12px"),
    ("pill", "9999px"),
    ("round", "50%"),
];

const ELEVATIONS: Scale = &[
    ("level1", "0 1px 2px rgba(16, 24, 40, 0.04)"),
    ("level2", "0 4px 12px rgba(16, 24, 40, 0.06)"),
    ("level3", "0 8px 24px rgba(16, 24, 40, 0.08)"),
    ("level4", "0 12px 40px rgba(16, 24, 40, 0.10)"),
    ("level5", "0 24px 80px rgba(16, 24, 40, 0.12)"),
];

const TRANSITIONS: Scale = &[
    ("short", "150ms ease"),
    ("base", "250ms cubic-bezier(.4,0,.2,1)"),
    ("long", "500ms cubic-bezier(.4,0,.2,1)"),
];

impl ThemeTokens {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: Palette {
                primary: "#2D3748",
                secondary: "#4A5568",
                accent: "#2563EB",
                background: "#FFFFFF",
                surface: "#F7FAFC",
                border: "#E6EEF8",
                text: TextColors {
                    primary: "#0F1724",
                    secondary: "#475569",
                    inverted: "#FFFFFF",
                    muted: "#64748B",
                },
                semantic: SemanticColors {
                    success: "#16A34A",
                    warning: "#D97706",
                    error: "#DC2626",
                    info: "#0284C7",
                },
                neutrals: &[
                    ("0", "#FFFFFF"),
                    ("50", "#F8FAFC"),
                    ("100", "#F1F5F9"),
                    ("200", "#E2E8F0"),
                    ("300", "#CBD5E1"),
                    ("400", "#94A3B8"),
                    ("500", "#64748B"),
                    ("600", "#475569"),
                    ("700", "#334155"),
                    ("800", "#1E293B"),
                    ("900", "#0F1724"),
                ],
            },
            typography: TYPOGRAPHY,
            spacing: SPACING,
            radii: RADII,
            elevations: ELEVATIONS,
            transitions: TRANSITIONS,
        }
    }

    /// Dark palette; every non-color scale is shared with light.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: Palette {
                primary: "#E6EEF8",
                secondary: "#CBD5E1",
                accent: "#63B3ED",
                background: "#0B1220",
                surface: "#0F1724",
                border: "#1F2937",
                text: TextColors {
                    primary: "#E6EEF8",
                    secondary: "#94A3B8",
                    inverted: "#0B1220",
                    muted: "#9CA3AF",
                },
                semantic: SemanticColors {
                    success: "#34D399",
                    warning: "#FBBF24",
                    error: "#F87171",
                    info: "#60A5FA",
                },
                neutrals: &[
                    ("0", "#0B1220"),
                    ("50", "#071018"),
                    ("100", "#0B1220"),
                    ("200", "#111827"),
                    ("300", "#1E293B"),
                    ("400", "#2D3748"),
                    ("500", "#475569"),
                    ("600", "#64748B"),
                    ("700", "#94A3B8"),
                    ("800", "#CBD5E1"),
                    ("900", "#E6EEF8"),
                ],
            },
            ..Self::light()
        }
    }

    /// Every custom property this theme publishes, in a stable order.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let c = &self.colors;
        let t = &self.typography;
        let mut vars: Vec<(String, String)> = [
            ("--color-primary", c.primary),
            ("--color-secondary", c.secondary),
            ("--color-accent", c.accent),
            ("--color-background", c.background),
            ("--color-surface", c.surface),
            ("--color-border", c.border),
            ("--text-primary", c.text.primary),
            ("--text-secondary", c.text.secondary),
            ("--text-inverted", c.text.inverted),
            ("--text-muted", c.text.muted),
            ("--color-success", c.semantic.success),
            ("--color-warning", c.semantic.warning),
            ("--color-error", c.semantic.error),
            ("--color-info", c.semantic.info),
            ("--font-family-primary", t.font_primary),
            ("--font-family-secondary", t.font_secondary),
            ("--font-family-code", t.font_code),
            ("--base-font-size", t.base_font_size),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        vars.push(("--line-height".to_string(), t.line_height.to_string()));

        let scales: [(&str, Scale); 6] = [
            ("neutral", c.neutrals),
            ("font-size", t.sizes),
            ("space", self.spacing),
            ("radius", self.radii),
            ("elevation", self.elevations),
            ("transition", self.transitions),
        ];
        for (prefix, scale) in scales {
            for (key, value) in scale {
                vars.push((format!("--{prefix}-{key}"), value.to_string()));
            }
        }
        vars
    }
}

/// Destination for published tokens.
pub trait TokenSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
    fn set_meta(&mut self, name: &str, content: &str);
}

/// Project every token of `tokens` onto `sink`.
///
/// Only absolute writes are issued, so applying the same theme twice leaves
/// the sink in the same state as applying it once.
pub fn apply_tokens(tokens: &ThemeTokens, sink: &mut impl TokenSink) {
    for (name, value) in tokens.css_variables() {
        sink.set_property(&name, &value);
    }
    sink.set_meta("theme-color", tokens.colors.background);
    sink.set_attribute("data-theme", tokens.mode.as_str());
}

/// In-memory model of the document root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentState {
    pub properties: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub meta: BTreeMap<String, String>,
}

impl TokenSink for DocumentState {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_meta(&mut self, name: &str, content: &str) {
        self.meta.insert(name.to_string(), content.to_string());
    }
}

/// Collects token writes into a single JavaScript snippet for `document::eval`.
#[derive(Debug, Default)]
pub struct ScriptSink {
    statements: Vec<String>,
}

/// JSON string literals are valid JavaScript string literals.
fn js_str(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

impl TokenSink for ScriptSink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.statements.push(format!(
            "root.style.setProperty({}, {});",
            js_str(name),
            js_str(value)
        ));
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.statements
            .push(format!("root.setAttribute({}, {});", js_str(name), js_str(value)));
    }

    fn set_meta(&mut self, name: &str, content: &str) {
        self.statements.push(format!(
            "(function() {{ var m = document.querySelector('meta[name=' + JSON.stringify({name}) + ']'); \
             if (!m) {{ m = document.createElement('meta'); m.name = {name}; document.head.appendChild(m); }} \
             m.content = {content}; }})();",
            name = js_str(name),
            content = js_str(content)
        ));
    }
}

impl ScriptSink {
    pub fn into_script(self) -> String {
        format!(
            "(function() {{ var root = document.documentElement; {} }})();",
            self.statements.join(" ")
        )
    }
}

/// Build the publication script for `tokens`.
pub fn publish_script(tokens: &ThemeTokens) -> String {
    let mut sink = ScriptSink::default();
    apply_tokens(tokens, &mut sink);
    sink.into_script()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens_follow_mode() {
        assert_eq!(ThemeTokens::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
        assert_eq!(ThemeTokens::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(ThemeTokens::dark().colors.background, "#0B1220");
    }

    #[test]
    fn dark_shares_non_color_scales_with_light() {
        let light = ThemeTokens::light();
        let dark = ThemeTokens::dark();
        assert_eq!(dark.typography, light.typography);
        assert_eq!(dark.spacing, light.spacing);
        assert_eq!(dark.radii, light.radii);
        assert_ne!(dark.colors, light.colors);
    }

    #[test]
    fn variable_names_are_unique() {
        let vars = ThemeTokens::light().css_variables();
        let mut names: Vec<_> = vars.iter().map(|(k, _)| k.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), vars.len());
    }

    #[test]
    fn every_token_family_is_published() {
        let mut doc = DocumentState::default();
        apply_tokens(&ThemeTokens::light(), &mut doc);
        for name in [
            "--color-accent",
            "--text-muted",
            "--color-error",
            "--neutral-500",
            "--space-md",
            "--radius-pill",
            "--elevation-level3",
            "--font-family-primary",
            "--font-size-xl",
            "--line-height",
            "--transition-base",
        ] {
            assert!(doc.properties.contains_key(name), "missing {name}");
        }
        assert_eq!(doc.attributes.get("data-theme").map(String::as_str), Some("light"));
        assert_eq!(doc.meta.get("theme-color").map(String::as_str), Some("#FFFFFF"));
    }

    #[test]
    fn apply_tokens_is_idempotent() {
        let tokens = ThemeTokens::dark();
        let mut once = DocumentState::default();
        apply_tokens(&tokens, &mut once);
        let mut twice = once.clone();
        apply_tokens(&tokens, &mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn reapplying_other_mode_overwrites_everything() {
        let mut doc = DocumentState::default();
        apply_tokens(&ThemeTokens::light(), &mut doc);
        apply_tokens(&ThemeTokens::dark(), &mut doc);

        let mut fresh = DocumentState::default();
        apply_tokens(&ThemeTokens::dark(), &mut fresh);
        assert_eq!(doc, fresh);
    }

    #[test]
    fn script_escapes_quoted_font_stacks() {
        let script = publish_script(&ThemeTokens::light());
        assert!(script.contains(r#"root.style.setProperty("--font-family-code", "'Source Code Pro', Menlo, monospace");"#));
        assert!(script.contains(r#"root.setAttribute("data-theme", "light");"#));
    }
}
