use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// Which operation a request performs. Fixed by the caller, never
/// user-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Login,
    Register,
}

/// Identity category selected before submitting. The server uses it to
/// pick the post-login surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Expert,
    Factory,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Expert => write!(f, "expert"),
            Role::Factory => write!(f, "factory"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expert" => Ok(Role::Expert),
            "factory" => Ok(Role::Factory),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// One request line. Serialized compact, newline appended by the
/// transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub action: Action,
    pub role: Role,
    pub username: String,
    pub password: String,
}

impl AuthRequest {
    pub fn login(username: &str, password: &str, role: Role) -> Self {
        Self {
            action: Action::Login,
            role,
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn register(username: &str, password: &str, role: Role) -> Self {
        Self {
            action: Action::Register,
            role,
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Credentials as typed by the user, before validation. A role may still
/// be unselected here; validation rejects that before anything is sent.
#[derive(Debug, Clone, Default)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub role: Option<Role>,
}
