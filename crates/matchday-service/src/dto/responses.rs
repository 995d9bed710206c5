//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use matchday_core::entities::{AuditAction, AuditLogEntry, Player, Team, User, UserRole};
use matchday_core::traits::{TeamWithPlayers, UserActivity};

// ============================================================================
// User Responses
// ============================================================================

/// User response (password never leaves the database layer)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    pub is_monitored: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            is_monitored: user.is_monitored,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Team Responses
// ============================================================================

/// Team response without the squad (create/update results)
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummaryResponse {
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
    pub points: i32,
    pub games_played: i32,
}

impl From<&Team> for TeamSummaryResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            abbreviation: team.abbreviation.clone(),
            coach_name: team.coach_name.clone(),
            home_stadium: team.home_stadium.clone(),
            founded_year: team.founded_year.clone(),
            wins: team.wins,
            draws: team.draws,
            losses: team.losses,
            goals_scored: team.goals_scored,
            goals_conceded: team.goals_conceded,
            country: team.country.clone(),
            user_id: team.user_id,
            points: team.points(),
            games_played: team.games_played(),
        }
    }
}

/// Team response with its players (list/detail endpoints)
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    #[serde(flatten)]
    pub team: TeamSummaryResponse,
    pub players: Vec<PlayerResponse>,
}

impl From<&TeamWithPlayers> for TeamResponse {
    fn from(detail: &TeamWithPlayers) -> Self {
        Self {
            team: TeamSummaryResponse::from(&detail.team),
            players: detail.players.iter().map(PlayerResponse::from).collect(),
        }
    }
}

// ============================================================================
// Player Responses
// ============================================================================

/// Player response
#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    pub team_id: i64,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            position: player.position.clone(),
            age: player.age,
            nationality: player.nationality.clone(),
            team_id: player.team_id,
        }
    }
}

// ============================================================================
// Monitoring Responses
// ============================================================================

/// One audit log entry in API responses
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogEntryResponse {
    pub id: i64,
    pub user_id: i64,
    pub action: AuditAction,
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&AuditLogEntry> for AuditLogEntryResponse {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            action: entry.action,
            entity: entry.entity.clone(),
            entity_id: entry.entity_id,
            details: entry.details.clone(),
            created_at: entry.created_at,
        }
    }
}

/// A monitored user with their recent mutation log entries, newest first
#[derive(Debug, Clone, Serialize)]
pub struct MonitoredUserResponse {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    pub is_monitored: bool,
    pub logs: Vec<AuditLogEntryResponse>,
}

impl From<&UserActivity> for MonitoredUserResponse {
    fn from(activity: &UserActivity) -> Self {
        Self {
            id: activity.user.id,
            email: activity.user.email.clone(),
            role: activity.user.role,
            is_monitored: activity.user.is_monitored,
            logs: activity
                .logs
                .iter()
                .map(AuditLogEntryResponse::from)
                .collect(),
        }
    }
}

/// Summary of one activity check pass. The scheduler logs and discards it;
/// the diagnostic endpoint returns it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActivityCheckReport {
    /// Number of user accounts scanned
    pub users_checked: usize,
    /// Number of accounts newly or redundantly flagged this pass
    pub users_flagged: usize,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            ready: database,
            database,
        }
    }
}
