//! Player entity - a squad member belonging to a team

use chrono::{DateTime, Utc};

/// Player entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    /// Owning team (foreign key)
    pub team_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new player
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub team_id: i64,
}

/// Partial update to an existing player; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
}

impl PlayerUpdate {
    /// True when no field is set (nothing to write)
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.age.is_none()
            && self.nationality.is_none()
    }
}
