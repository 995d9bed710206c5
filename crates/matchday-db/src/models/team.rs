//! Team database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
    pub coach_name: String,
    pub home_stadium: String,
    pub founded_year: String,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_scored: i32,
    pub goals_conceded: i32,
    pub country: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
