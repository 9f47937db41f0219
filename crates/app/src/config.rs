use shared_types::AppConfig;
use std::sync::OnceLock;

const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Portal settings, parsed once from the embedded `config.toml`. An invalid
/// file is logged and replaced by the built-in defaults.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| load(EMBEDDED_CONFIG))
}

fn load(contents: &str) -> AppConfig {
    match AppConfig::from_toml(contents) {
        Ok(config) => {
            tracing::debug!(
                breakpoint = config.layout.mobile_breakpoint,
                default_mode = %config.theme.default_mode,
                "configuration loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid config.toml, using defaults");
            AppConfig::default()
        }
    }
}
