//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    /// Stored as-is; this application's login is a plaintext placeholder,
    /// not a real credential system
    pub password: String,
    /// Role stored as string: GUEST or ADMIN (CHECK-constrained)
    pub role: String,
    pub is_monitored: bool,
    pub created_at: DateTime<Utc>,
}
