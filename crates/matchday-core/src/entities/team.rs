//! Team entity - a club competing in the league

use chrono::{DateTime, Utc};

/// Team entity with season statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
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
    /// Account that owns (manages) this team
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// League points: three per win, one per draw
    #[inline]
    pub fn points(&self) -> i32 {
        self.wins * 3 + self.draws
    }

    /// Total matches played this season
    #[inline]
    pub fn games_played(&self) -> i32 {
        self.wins + self.draws + self.losses
    }

    /// Goal difference over the season
    #[inline]
    pub fn goal_difference(&self) -> i32 {
        self.goals_scored - self.goals_conceded
    }

    /// Check if a user owns this team
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Data required to create a new team
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub abbreviation: String,
    pub coach_name: String,
    pub home_stadium: String,
    pub founded_year: String,
    pub country: String,
    pub user_id: i64,
}

/// Partial update to an existing team; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub coach_name: Option<String>,
    pub home_stadium: Option<String>,
    pub founded_year: Option<String>,
    pub wins: Option<i32>,
    pub draws: Option<i32>,
    pub losses: Option<i32>,
    pub goals_scored: Option<i32>,
    pub goals_conceded: Option<i32>,
    pub country: Option<String>,
}

impl TeamUpdate {
    /// True when no field is set (nothing to write)
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.abbreviation.is_none()
            && self.coach_name.is_none()
            && self.home_stadium.is_none()
            && self.founded_year.is_none()
            && self.wins.is_none()
            && self.draws.is_none()
            && self.losses.is_none()
            && self.goals_scored.is_none()
            && self.goals_conceded.is_none()
            && self.country.is_none()
    }
}
