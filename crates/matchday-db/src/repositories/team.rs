//! PostgreSQL implementation of TeamRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use matchday_core::entities::{NewTeam, Player, Team, TeamUpdate};
use matchday_core::traits::{RepoResult, TeamRepository, TeamWithPlayers};

use crate::models::{PlayerModel, TeamModel};

use super::error::{map_db_error, team_not_found};

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(
            r"
            SELECT id, name, abbreviation, coach_name, home_stadium, founded_year,
                   wins, draws, losses, goals_scored, goals_conceded, country,
                   user_id, created_at, updated_at
            FROM teams
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Team::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id_with_players(&self, id: i64) -> RepoResult<Option<TeamWithPlayers>> {
        let Some(team) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let players = sqlx::query_as::<_, PlayerModel>(
            r"
            SELECT id, name, position, age, nationality, team_id, created_at, updated_at
            FROM players
            WHERE team_id = $1
            ORDER BY id
            ",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Some(TeamWithPlayers {
            team,
            players: players.into_iter().map(Player::from).collect(),
        }))
    }

    #[instrument(skip(self))]
    async fn find_all_with_players(&self) -> RepoResult<Vec<TeamWithPlayers>> {
        let teams = sqlx::query_as::<_, TeamModel>(
            r"
            SELECT id, name, abbreviation, coach_name, home_stadium, founded_year,
                   wins, draws, losses, goals_scored, goals_conceded, country,
                   user_id, created_at, updated_at
            FROM teams
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let players = sqlx::query_as::<_, PlayerModel>(
            r"
            SELECT id, name, position, age, nationality, team_id, created_at, updated_at
            FROM players
            ORDER BY team_id, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_team: HashMap<i64, Vec<Player>> = HashMap::new();
        for model in players {
            by_team
                .entry(model.team_id)
                .or_default()
                .push(Player::from(model));
        }

        Ok(teams
            .into_iter()
            .map(|model| {
                let team = Team::from(model);
                let players = by_team.remove(&team.id).unwrap_or_default();
                TeamWithPlayers { team, players }
            })
            .collect())
    }

    #[instrument(skip(self, team))]
    async fn create(&self, team: &NewTeam) -> RepoResult<Team> {
        let model = sqlx::query_as::<_, TeamModel>(
            r"
            INSERT INTO teams (name, abbreviation, coach_name, home_stadium,
                               founded_year, country, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, abbreviation, coach_name, home_stadium, founded_year,
                      wins, draws, losses, goals_scored, goals_conceded, country,
                      user_id, created_at, updated_at
            ",
        )
        .bind(&team.name)
        .bind(&team.abbreviation)
        .bind(&team.coach_name)
        .bind(&team.home_stadium)
        .bind(&team.founded_year)
        .bind(&team.country)
        .bind(team.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Team::from(model))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: &TeamUpdate) -> RepoResult<Team> {
        let model = sqlx::query_as::<_, TeamModel>(
            r"
            UPDATE teams
            SET name           = COALESCE($2, name),
                abbreviation   = COALESCE($3, abbreviation),
                coach_name     = COALESCE($4, coach_name),
                home_stadium   = COALESCE($5, home_stadium),
                founded_year   = COALESCE($6, founded_year),
                wins           = COALESCE($7, wins),
                draws          = COALESCE($8, draws),
                losses         = COALESCE($9, losses),
                goals_scored   = COALESCE($10, goals_scored),
                goals_conceded = COALESCE($11, goals_conceded),
                country        = COALESCE($12, country),
                updated_at     = NOW()
            WHERE id = $1
            RETURNING id, name, abbreviation, coach_name, home_stadium, founded_year,
                      wins, draws, losses, goals_scored, goals_conceded, country,
                      user_id, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.abbreviation)
        .bind(&patch.coach_name)
        .bind(&patch.home_stadium)
        .bind(&patch.founded_year)
        .bind(patch.wins)
        .bind(patch.draws)
        .bind(patch.losses)
        .bind(patch.goals_scored)
        .bind(patch.goals_conceded)
        .bind(&patch.country)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Team::from).ok_or_else(|| team_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Players go with the team via ON DELETE CASCADE
        let result = sqlx::query(
            r"
            DELETE FROM teams WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(team_not_found(id));
        }

        Ok(())
    }
}
