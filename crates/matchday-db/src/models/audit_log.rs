//! Audit log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    pub user_id: i64,
    /// Audit action type stored as string (CHECK-constrained):
    /// CREATE, READ, UPDATE or DELETE
    pub action: String,
    /// Name of the affected resource type, e.g. "Team"
    pub entity: String,
    pub entity_id: Option<i64>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}
