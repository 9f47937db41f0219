use crate::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role. The set is closed: a persisted role outside it makes the
/// whole session record unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Staff, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Capitalized label for badges and headers.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Role::Student),
            "staff" => Some(Role::Staff),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The currently authenticated identity.
///
/// Persisted as `{"id": .., "name": .., "role": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub role: Role,
}

impl Session {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role,
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let session: Session = serde_json::from_str(raw)?;
        if session.id.trim().is_empty() {
            return Err(AppError::decode("session id is empty"));
        }
        Ok(session)
    }

    /// First letter of the display name, used for the avatar bubble.
    pub fn initial(&self) -> char {
        self.display_name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}
