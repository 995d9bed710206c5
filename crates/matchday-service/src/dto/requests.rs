//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where inputs need checking,
//! `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Team Requests
// ============================================================================

/// Create team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100, message = "Team name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 10, message = "Abbreviation must be at most 10 characters"))]
    #[serde(default)]
    pub abbreviation: String,

    #[serde(default)]
    pub coach_name: String,

    #[serde(default)]
    pub home_stadium: String,

    #[serde(default)]
    pub founded_year: String,

    #[serde(default)]
    pub country: String,
}

/// Update team request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 100, message = "Team name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 10, message = "Abbreviation must be at most 10 characters"))]
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

// ============================================================================
// Player Requests
// ============================================================================

/// Create player request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, max = 100, message = "Player name must be 1-100 characters"))]
    pub name: String,

    pub position: Option<String>,

    #[validate(range(min = 1, max = 99, message = "Age must be between 1 and 99"))]
    pub age: Option<i32>,

    pub nationality: Option<String>,

    pub team_id: i64,
}

/// Update player request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 100, message = "Player name must be 1-100 characters"))]
    pub name: Option<String>,

    pub position: Option<String>,

    #[validate(range(min = 1, max = 99, message = "Age must be between 1 and 99"))]
    pub age: Option<i32>,

    pub nationality: Option<String>,
}
