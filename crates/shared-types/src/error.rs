use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of portal errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    ValidationError,
    Unauthorized,
    Forbidden,
    StorageError,
    ConfigError,
    DecodeError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::StorageError => write!(f, "StorageError"),
            AppErrorKind::ConfigError => write!(f, "ConfigError"),
            AppErrorKind::DecodeError => write!(f, "DecodeError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the stores, the mock services and the pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::StorageError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ConfigError, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DecodeError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Message suitable for showing to the person using the portal.
    ///
    /// Validation and not-found errors carry their own wording; everything
    /// else collapses to a generic retry hint.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::ValidationError | AppErrorKind::NotFound => self.message.clone(),
            AppErrorKind::Unauthorized | AppErrorKind::Forbidden => {
                "You do not have access to this page.".to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::decode(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::storage("localStorage is disabled");
        assert_eq!(err.to_string(), "StorageError: localStorage is disabled");
    }

    #[test]
    fn friendly_message_keeps_validation_text() {
        let err = AppError::validation("Subject is required", HashMap::new());
        assert_eq!(err.friendly_message(), "Subject is required");
    }

    #[test]
    fn friendly_message_hides_internal_details() {
        let err = AppError::storage("QuotaExceededError");
        assert_eq!(err.friendly_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn json_errors_convert_to_decode_kind() {
        let err: AppError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert_eq!(err.kind, AppErrorKind::DecodeError);
    }

    #[test]
    fn field_errors_skipped_when_empty() {
        let json = serde_json::to_string(&AppError::not_found("missing")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
