//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: TEST_DATABASE_URL (or DATABASE_URL)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use matchday_core::entities::UserRole;
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.email, request.email);
    assert_eq!(user.role, "GUEST");
    assert!(!user.is_monitored);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.email, register_req.email);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Team Tests
// ============================================================================

async fn register_user(server: &TestServer) -> UserResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

#[tokio::test]
async fn test_team_crud_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await;

    // Create
    let create_req = CreateTeamRequest::unique();
    let response = server
        .post_as("/api/v1/teams", user.id, UserRole::Guest, &create_req)
        .await
        .unwrap();
    let team: TeamResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(team.name, create_req.name);
    assert_eq!(team.user_id, user.id);
    assert_eq!(team.points, 0);

    // Read with players
    let response = server.get(&format!("/api/v1/teams/{}", team.id)).await.unwrap();
    let fetched: TeamResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, team.id);
    assert!(fetched.players.is_empty());

    // Update season stats
    let patch = serde_json::json!({ "wins": 3, "draws": 1 });
    let response = server
        .patch_as(
            &format!("/api/v1/teams/{}", team.id),
            user.id,
            UserRole::Guest,
            &patch,
        )
        .await
        .unwrap();
    let updated: TeamResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.points, 10);
    assert_eq!(updated.games_played, 4);

    // Delete
    let response = server
        .delete_as(&format!("/api/v1/teams/{}", team.id), user.id, UserRole::Guest)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/v1/teams/{}", team.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_team_update_requires_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register_user(&server).await;
    let stranger = register_user(&server).await;

    let response = server
        .post_as(
            "/api/v1/teams",
            owner.id,
            UserRole::Guest,
            &CreateTeamRequest::unique(),
        )
        .await
        .unwrap();
    let team: TeamResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let patch = serde_json::json!({ "wins": 99 });
    let response = server
        .patch_as(
            &format!("/api/v1/teams/{}", team.id),
            stranger.id,
            UserRole::Guest,
            &patch,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_team_mutation_requires_identity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/teams", &CreateTeamRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_invalid_team_id_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/teams/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Player Tests
// ============================================================================

#[tokio::test]
async fn test_player_crud_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await;

    let response = server
        .post_as(
            "/api/v1/teams",
            user.id,
            UserRole::Guest,
            &CreateTeamRequest::unique(),
        )
        .await
        .unwrap();
    let team: TeamResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Create
    let create_req = CreatePlayerRequest::unique(team.id);
    let response = server
        .post_as("/api/v1/players", user.id, UserRole::Guest, &create_req)
        .await
        .unwrap();
    let player: PlayerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(player.team_id, team.id);

    // Detail read (owner only)
    let response = server
        .get_as(
            &format!("/api/v1/players/{}", player.id),
            user.id,
            UserRole::Guest,
        )
        .await
        .unwrap();
    let fetched: PlayerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.name, player.name);

    // List by team (public)
    let response = server
        .get(&format!("/api/v1/players?team_id={}", team.id))
        .await
        .unwrap();
    let players: Vec<PlayerResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(players.len(), 1);

    // Update
    let patch = serde_json::json!({ "position": "ST" });
    let response = server
        .patch_as(
            &format!("/api/v1/players/{}", player.id),
            user.id,
            UserRole::Guest,
            &patch,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Delete
    let response = server
        .delete_as(
            &format!("/api/v1/players/{}", player.id),
            user.id,
            UserRole::Guest,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Admin / Monitoring Tests
// ============================================================================

#[tokio::test]
async fn test_monitored_users_requires_identity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/admin/monitored-users").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_monitored_users_requires_admin_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await;

    let response = server
        .get_as("/api/v1/admin/monitored-users", user.id, UserRole::Guest)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_monitored_users_as_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_user(&server).await;

    let response = server
        .get_as("/api/v1/admin/monitored-users", user.id, UserRole::Admin)
        .await
        .unwrap();
    let monitored: Vec<MonitoredUserResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    // Fresh accounts from this test run are never flagged.
    assert!(monitored.iter().all(|m| m.is_monitored));
}

#[tokio::test]
async fn test_scheduler_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Not started by the test harness
    let response = server.get("/api/v1/monitoring/status").await.unwrap();
    let status: SchedulerStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.status.is_running);
    assert_eq!(status.status.interval_ms, 900_000);

    // Start (idempotent)
    let response = server.post_empty("/api/v1/monitoring/start").await.unwrap();
    let control: SchedulerControlResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(control.status.is_running);

    let response = server.post_empty("/api/v1/monitoring/start").await.unwrap();
    let control: SchedulerControlResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(control.status.is_running);

    // Stop (idempotent)
    let response = server.post_empty("/api/v1/monitoring/stop").await.unwrap();
    let control: SchedulerControlResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!control.status.is_running);

    let response = server.post_empty("/api/v1/monitoring/stop").await.unwrap();
    let control: SchedulerControlResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!control.status.is_running);
}

#[tokio::test]
async fn test_manual_check_cycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    register_user(&server).await;

    let response = server.post_empty("/api/v1/monitoring/check").await.unwrap();
    let check: ManualCheckResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(check.message, "Manual monitoring check completed");
    assert!(check.report.users_checked >= 1);
}
