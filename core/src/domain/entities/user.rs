//! User entity representing a registered user of the messenger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user within the messenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular user
    User,
    /// An administrator
    Admin,
}

impl Role {
    /// Canonical string form used in token claims and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name, unique across the system
    pub username: String,

    /// Email address
    pub email: String,

    /// Bcrypt hash of the password (never the password itself)
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Role of the user
    pub role: Role,

    /// Whether the user has confirmed their email address
    pub email_confirmed: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new unconfirmed user
    pub fn new(username: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            role,
            email_confirmed: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the user's email as confirmed
    pub fn confirm_email(&mut self) {
        self.email_confirmed = true;
    }
}
