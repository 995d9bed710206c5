//! User entity - represents a league user account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role within the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    Guest,
    Admin,
}

impl UserRole {
    /// String form as stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse the database string form
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GUEST" => Some(Self::Guest),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account entity
///
/// The password is deliberately absent: it lives only in the database model
/// and is compared there during login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    /// Set by the activity checker when the account crosses a mutation
    /// threshold. Flag-only: nothing ever clears it.
    pub is_monitored: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the user holds the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
