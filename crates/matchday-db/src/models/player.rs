//! Player database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for players table
#[derive(Debug, Clone, FromRow)]
pub struct PlayerModel {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub team_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
