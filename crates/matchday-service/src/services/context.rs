//! Service context - dependency container for services
//!
//! Holds all repositories and shared resources needed by services. Built once
//! at process start by the composition root and passed to every service.

use std::sync::Arc;

use matchday_core::traits::{
    AuditLogRepository, PlayerRepository, TeamRepository, UserRepository,
};
use matchday_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (kept for health probes)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    team_repo: Arc<dyn TeamRepository>,
    player_repo: Arc<dyn PlayerRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        team_repo: Arc<dyn TeamRepository>,
        player_repo: Arc<dyn PlayerRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            team_repo,
            player_repo,
            audit_repo,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    /// Get the player repository
    pub fn player_repo(&self) -> &dyn PlayerRepository {
        self.player_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    team_repo: Option<Arc<dyn TeamRepository>>,
    player_repo: Option<Arc<dyn PlayerRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn player_repo(mut self, repo: Arc<dyn PlayerRepository>) -> Self {
        self.player_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.team_repo
                .ok_or_else(|| ServiceError::validation("team_repo is required"))?,
            self.player_repo
                .ok_or_else(|| ServiceError::validation("player_repo is required"))?,
            self.audit_repo
                .ok_or_else(|| ServiceError::validation("audit_repo is required"))?,
        ))
    }
}
