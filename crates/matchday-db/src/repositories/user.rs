//! PostgreSQL implementation of UserRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use matchday_core::entities::{User, UserRole};
use matchday_core::error::DomainError;
use matchday_core::traits::{RepoResult, UserActivity, UserRepository};

use crate::mappers::{audit_entry_from_model, user_from_model};
use crate::models::{AuditLogModel, UserModel};

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch CREATE/UPDATE/DELETE log entries created at or after `since`
    /// and group them per user, newest first within each user.
    async fn mutation_logs_since(
        &self,
        since: DateTime<Utc>,
    ) -> RepoResult<HashMap<i64, Vec<matchday_core::entities::AuditLogEntry>>> {
        let models = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, user_id, action, entity, entity_id, details, created_at
            FROM audit_logs
            WHERE created_at >= $1
              AND action IN ('CREATE', 'UPDATE', 'DELETE')
            ORDER BY user_id, created_at DESC
            ",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut grouped: HashMap<i64, Vec<_>> = HashMap::new();
        for model in models {
            let entry = audit_entry_from_model(model)?;
            grouped.entry(entry.user_id).or_default().push(entry);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, password, role, is_monitored, created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(user_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, password, role, is_monitored, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(user_from_model).transpose()
    }

    #[instrument(skip(self, password))]
    async fn create(&self, email: &str, password: &str, role: UserRole) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, role, is_monitored, created_at
            ",
        )
        .bind(email)
        .bind(password)
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        user_from_model(model)
    }

    #[instrument(skip(self))]
    async fn get_password(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn mark_monitored(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET is_monitored = TRUE
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all_with_mutations_since(
        &self,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<UserActivity>> {
        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, password, role, is_monitored, created_at
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut logs = self.mutation_logs_since(since).await?;

        models
            .into_iter()
            .map(|model| {
                let user = user_from_model(model)?;
                let logs = logs.remove(&user.id).unwrap_or_default();
                Ok(UserActivity { user, logs })
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_monitored_with_mutations_since(
        &self,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<UserActivity>> {
        let models = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, password, role, is_monitored, created_at
            FROM users
            WHERE is_monitored = TRUE
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut logs = self.mutation_logs_since(since).await?;

        models
            .into_iter()
            .map(|model| {
                let user = user_from_model(model)?;
                let logs = logs.remove(&user.id).unwrap_or_default();
                Ok(UserActivity { user, logs })
            })
            .collect()
    }
}
