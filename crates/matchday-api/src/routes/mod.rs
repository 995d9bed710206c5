//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{admin, auth, health, monitoring, players, teams};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately, no API prefix)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(team_routes())
        .merge(player_routes())
        .merge(admin_routes())
        .merge(monitoring_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Team routes
fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/teams", get(teams::list_teams))
        .route("/teams", post(teams::create_team))
        .route("/teams/:team_id", get(teams::get_team))
        .route("/teams/:team_id", patch(teams::update_team))
        .route("/teams/:team_id", delete(teams::delete_team))
        .route("/teams/:team_id/players", get(teams::get_team_players))
}

/// Player routes
fn player_routes() -> Router<AppState> {
    Router::new()
        .route("/players", get(players::list_players))
        .route("/players", post(players::create_player))
        .route("/players/:player_id", get(players::get_player))
        .route("/players/:player_id", patch(players::update_player))
        .route("/players/:player_id", delete(players::delete_player))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/monitored-users", get(admin::monitored_users))
}

/// Monitoring diagnostics routes
fn monitoring_routes() -> Router<AppState> {
    Router::new()
        .route("/monitoring/start", post(monitoring::start_scheduler))
        .route("/monitoring/stop", post(monitoring::stop_scheduler))
        .route("/monitoring/status", get(monitoring::scheduler_status))
        .route("/monitoring/check", post(monitoring::run_check))
}
