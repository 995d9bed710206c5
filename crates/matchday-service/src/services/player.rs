//! Player service
//!
//! Handles player CRUD. Authorization goes through the owning team: only the
//! team's owner may view (detail), create, update, or delete its players.

use matchday_core::entities::{AuditAction, NewPlayer, Player, PlayerUpdate};
use matchday_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreatePlayerRequest, PlayerResponse, UpdatePlayerRequest};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Player service
pub struct PlayerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlayerService<'a> {
    /// Create a new PlayerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List players, optionally restricted to one team. Public read.
    #[instrument(skip(self))]
    pub async fn list_players(&self, team_id: Option<i64>) -> ServiceResult<Vec<PlayerResponse>> {
        let players = self.ctx.player_repo().find_all(team_id).await?;
        Ok(players.iter().map(PlayerResponse::from).collect())
    }

    /// Players of one team. Public read.
    #[instrument(skip(self))]
    pub async fn team_players(&self, team_id: i64) -> ServiceResult<Vec<PlayerResponse>> {
        // 404 for an unknown team rather than an empty list
        self.ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", team_id.to_string()))?;

        let players = self.ctx.player_repo().find_all(Some(team_id)).await?;
        Ok(players.iter().map(PlayerResponse::from).collect())
    }

    /// Get one player; the caller must own the player's team.
    ///
    /// This is the one read path that writes a READ audit entry. Coverage of
    /// READ logging is deliberately inconsistent across the API surface:
    /// best-effort telemetry, not an audit guarantee.
    #[instrument(skip(self))]
    pub async fn get_player(&self, user_id: i64, player_id: i64) -> ServiceResult<PlayerResponse> {
        let player = self.owned_player(user_id, player_id).await?;

        AuditService::new(self.ctx)
            .log_action(user_id, AuditAction::Read, "Player", Some(player_id), None)
            .await;

        Ok(PlayerResponse::from(&player))
    }

    /// Create a player on a team the caller owns
    #[instrument(skip(self, request))]
    pub async fn create_player(
        &self,
        user_id: i64,
        request: CreatePlayerRequest,
    ) -> ServiceResult<PlayerResponse> {
        let team = self
            .ctx
            .team_repo()
            .find_by_id(request.team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", request.team_id.to_string()))?;

        if !team.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotTeamOwner));
        }

        let new_player = NewPlayer {
            name: request.name,
            position: request.position,
            age: request.age,
            nationality: request.nationality,
            team_id: request.team_id,
        };

        let player = self.ctx.player_repo().create(&new_player).await?;
        info!(player_id = player.id, "Player created");

        AuditService::new(self.ctx)
            .log_action(user_id, AuditAction::Create, "Player", Some(player.id), None)
            .await;

        Ok(PlayerResponse::from(&player))
    }

    /// Update a player on a team the caller owns
    #[instrument(skip(self, request))]
    pub async fn update_player(
        &self,
        user_id: i64,
        player_id: i64,
        request: UpdatePlayerRequest,
    ) -> ServiceResult<PlayerResponse> {
        let existing = self.owned_player(user_id, player_id).await?;

        let patch = PlayerUpdate {
            name: request.name,
            position: request.position,
            age: request.age,
            nationality: request.nationality,
        };

        let player = if patch.is_empty() {
            existing
        } else {
            self.ctx.player_repo().update(player_id, &patch).await?
        };
        info!(player_id, "Player updated");

        AuditService::new(self.ctx)
            .log_action(
                user_id,
                AuditAction::Update,
                "Player",
                Some(player_id),
                Some(format!("Updated player: {}", player.name)),
            )
            .await;

        Ok(PlayerResponse::from(&player))
    }

    /// Delete a player from a team the caller owns
    #[instrument(skip(self))]
    pub async fn delete_player(&self, user_id: i64, player_id: i64) -> ServiceResult<()> {
        let player = self.owned_player(user_id, player_id).await?;

        self.ctx.player_repo().delete(player_id).await?;
        info!(player_id, "Player deleted");

        AuditService::new(self.ctx)
            .log_action(
                user_id,
                AuditAction::Delete,
                "Player",
                Some(player_id),
                Some(format!("Deleted player: {}", player.name)),
            )
            .await;

        Ok(())
    }

    /// Fetch a player and verify the caller owns its team
    async fn owned_player(&self, user_id: i64, player_id: i64) -> ServiceResult<Player> {
        let player = self
            .ctx
            .player_repo()
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Player", player_id.to_string()))?;

        let team = self
            .ctx
            .team_repo()
            .find_by_id(player.team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", player.team_id.to_string()))?;

        if !team.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotTeamOwner));
        }

        Ok(player)
    }
}
