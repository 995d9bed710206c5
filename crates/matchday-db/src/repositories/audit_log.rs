//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use matchday_core::entities::NewAuditLogEntry;
use matchday_core::traits::{AuditLogRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry), fields(user_id = entry.user_id, action = %entry.action))]
    async fn append(&self, entry: &NewAuditLogEntry) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO audit_logs (user_id, action, entity, entity_id, details)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(entry.user_id)
        .bind(entry.action.as_str())
        .bind(&entry.entity)
        .bind(entry.entity_id)
        .bind(&entry.details)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
