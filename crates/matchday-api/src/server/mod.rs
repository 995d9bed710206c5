//! Server setup and initialization
//!
//! Provides the main application builder and server runner. This is the
//! composition root: it wires the pool, repositories, service context, and
//! the single process-wide monitoring scheduler instance.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use matchday_common::{AppConfig, AppError};
use matchday_db::{
    create_pool, run_migrations, PgAuditLogRepository, PgPlayerRepository, PgTeamRepository,
    PgUserRepository,
};
use matchday_service::{MonitoringScheduler, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, create_cors_layer};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = create_cors_layer(&state.config().cors, state.config().app.env.is_production());
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router).layer(cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = matchday_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let team_repo = Arc::new(PgTeamRepository::new(pool.clone()));
    let player_repo = Arc::new(PgPlayerRepository::new(pool.clone()));
    let audit_repo = Arc::new(PgAuditLogRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .team_repo(team_repo)
        .player_repo(player_repo)
        .audit_repo(audit_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let service_context = Arc::new(service_context);

    // The single scheduler instance for this process
    let scheduler = Arc::new(MonitoringScheduler::new(Arc::clone(&service_context)));

    Ok(AppState::new(service_context, scheduler, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // The monitor polls from process start; it can still be stopped and
    // restarted through the diagnostics endpoints.
    state.scheduler().start();

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
