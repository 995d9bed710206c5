//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub is_monitored: bool,
}

/// Create team request
#[derive(Debug, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub abbreviation: String,
    pub coach_name: String,
    pub home_stadium: String,
    pub founded_year: String,
    pub country: String,
}

impl CreateTeamRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test FC {suffix}"),
            abbreviation: "TFC".to_string(),
            coach_name: "A. Coach".to_string(),
            home_stadium: "Test Park".to_string(),
            founded_year: "1999".to_string(),
            country: "England".to_string(),
        }
    }
}

/// Team response (summary shape shared by create/update and list entries)
#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub points: i32,
    pub games_played: i32,
    #[serde(default)]
    pub players: Vec<PlayerResponse>,
}

/// Create player request
#[derive(Debug, Serialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub team_id: i64,
}

impl CreatePlayerRequest {
    pub fn unique(team_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Player {suffix}"),
            position: Some("MF".to_string()),
            age: Some(24),
            nationality: Some("England".to_string()),
            team_id,
        }
    }
}

/// Player response
#[derive(Debug, Deserialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub team_id: i64,
}

/// Monitored user entry from the admin listing
#[derive(Debug, Deserialize)]
pub struct MonitoredUserResponse {
    pub id: i64,
    pub email: String,
    pub is_monitored: bool,
    pub logs: Vec<AuditLogEntryResponse>,
}

/// Audit log entry in API responses
#[derive(Debug, Deserialize)]
pub struct AuditLogEntryResponse {
    pub id: i64,
    pub user_id: i64,
    pub action: String,
    pub entity: String,
}

/// Scheduler status snapshot
#[derive(Debug, Deserialize)]
pub struct SchedulerStatus {
    pub is_running: bool,
    pub interval_ms: u64,
    pub interval_minutes: f64,
}

/// Scheduler control response
#[derive(Debug, Deserialize)]
pub struct SchedulerControlResponse {
    pub message: String,
    pub status: SchedulerStatus,
}

/// Scheduler status response
#[derive(Debug, Deserialize)]
pub struct SchedulerStatusResponse {
    pub status: SchedulerStatus,
    pub server_time: String,
}

/// Manual check response
#[derive(Debug, Deserialize)]
pub struct ManualCheckResponse {
    pub message: String,
    pub report: ActivityCheckReport,
    pub status: SchedulerStatus,
}

/// Activity check report
#[derive(Debug, Deserialize)]
pub struct ActivityCheckReport {
    pub users_checked: usize,
    pub users_flagged: usize,
}
