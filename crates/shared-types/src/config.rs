use crate::{AppError, ThemeMode};
use serde::{Deserialize, Serialize};

/// Responsive layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widths at or below this many CSS pixels count as mobile.
    pub mobile_breakpoint: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    pub login_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Used only when nothing is persisted and the OS gives no signal.
    pub default_mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SupportConfig {
    pub submit_delay_ms: u64,
    pub success_banner_ms: u64,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            success_banner_ms: 4000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppointmentsConfig {
    pub booking_delay_ms: u64,
}

impl Default for AppointmentsConfig {
    fn default() -> Self {
        Self {
            booking_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub load_delay_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { load_delay_ms: 350 }
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub auth: AuthConfig,
    pub theme: ThemeConfig,
    pub support: SupportConfig,
    pub appointments: AppointmentsConfig,
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.layout.mobile_breakpoint == 0 {
            return Err(AppError::config("layout.mobile_breakpoint must be positive"));
        }
        Ok(config)
    }
}
