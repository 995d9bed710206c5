//! PostgreSQL implementation of PlayerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use matchday_core::entities::{NewPlayer, Player, PlayerUpdate};
use matchday_core::traits::{PlayerRepository, RepoResult};

use crate::models::PlayerModel;

use super::error::{map_db_error, player_not_found};

/// PostgreSQL implementation of PlayerRepository
#[derive(Clone)]
pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    /// Create a new PgPlayerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PgPlayerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Player>> {
        let result = sqlx::query_as::<_, PlayerModel>(
            r"
            SELECT id, name, position, age, nationality, team_id, created_at, updated_at
            FROM players
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Player::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, team_id: Option<i64>) -> RepoResult<Vec<Player>> {
        let models = match team_id {
            Some(team_id) => {
                sqlx::query_as::<_, PlayerModel>(
                    r"
                    SELECT id, name, position, age, nationality, team_id, created_at, updated_at
                    FROM players
                    WHERE team_id = $1
                    ORDER BY id
                    ",
                )
                .bind(team_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, PlayerModel>(
                    r"
                    SELECT id, name, position, age, nationality, team_id, created_at, updated_at
                    FROM players
                    ORDER BY id
                    ",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Player::from).collect())
    }

    #[instrument(skip(self, player))]
    async fn create(&self, player: &NewPlayer) -> RepoResult<Player> {
        let model = sqlx::query_as::<_, PlayerModel>(
            r"
            INSERT INTO players (name, position, age, nationality, team_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, position, age, nationality, team_id, created_at, updated_at
            ",
        )
        .bind(&player.name)
        .bind(&player.position)
        .bind(player.age)
        .bind(&player.nationality)
        .bind(player.team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Player::from(model))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: &PlayerUpdate) -> RepoResult<Player> {
        let model = sqlx::query_as::<_, PlayerModel>(
            r"
            UPDATE players
            SET name        = COALESCE($2, name),
                position    = COALESCE($3, position),
                age         = COALESCE($4, age),
                nationality = COALESCE($5, nationality),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id, name, position, age, nationality, team_id, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.position)
        .bind(patch.age)
        .bind(&patch.nationality)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Player::from).ok_or_else(|| player_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM players WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(player_not_found(id));
        }

        Ok(())
    }
}
