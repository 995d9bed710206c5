//! Audit log entry - an immutable record of one API action

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of operation an audit log entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Create,
    Read,
    Update,
    Delete,
}

impl AuditAction {
    /// String form as stored in the database
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Read => "READ",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Parse the database string form
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREATE" => Some(Self::Create),
            "READ" => Some(Self::Read),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Whether this action mutates data. READ actions are excluded from
    /// every activity threshold count.
    #[inline]
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Read)
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable audit record: created once when an API operation completes,
/// never updated, retained indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    pub id: i64,
    /// Account that performed the action (foreign key)
    pub user_id: i64,
    pub action: AuditAction,
    /// Name of the affected resource type, e.g. "Team" or "Player"
    pub entity: String,
    pub entity_id: Option<i64>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for appending one audit log entry
#[derive(Debug, Clone)]
pub struct NewAuditLogEntry {
    pub user_id: i64,
    pub action: AuditAction,
    pub entity: String,
    pub entity_id: Option<i64>,
    pub details: Option<String>,
}
