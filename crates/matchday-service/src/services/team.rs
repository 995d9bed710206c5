//! Team service
//!
//! Handles team CRUD with ownership checks and audit logging.

use matchday_core::entities::{AuditAction, NewTeam, Team, TeamUpdate};
use matchday_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateTeamRequest, TeamResponse, TeamSummaryResponse, UpdateTeamRequest};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all teams with their players
    #[instrument(skip(self))]
    pub async fn list_teams(&self) -> ServiceResult<Vec<TeamResponse>> {
        let teams = self.ctx.team_repo().find_all_with_players().await?;
        Ok(teams.iter().map(TeamResponse::from).collect())
    }

    /// Get one team with its players
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_id: i64) -> ServiceResult<TeamResponse> {
        let team = self
            .ctx
            .team_repo()
            .find_by_id_with_players(team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", team_id.to_string()))?;

        Ok(TeamResponse::from(&team))
    }

    /// Create a team owned by the caller
    #[instrument(skip(self, request))]
    pub async fn create_team(
        &self,
        user_id: i64,
        request: CreateTeamRequest,
    ) -> ServiceResult<TeamSummaryResponse> {
        let new_team = NewTeam {
            name: request.name,
            abbreviation: request.abbreviation,
            coach_name: request.coach_name,
            home_stadium: request.home_stadium,
            founded_year: request.founded_year,
            country: request.country,
            user_id,
        };

        let team = self.ctx.team_repo().create(&new_team).await?;
        info!(team_id = team.id, "Team created");

        AuditService::new(self.ctx)
            .log_action(user_id, AuditAction::Create, "Team", Some(team.id), None)
            .await;

        Ok(TeamSummaryResponse::from(&team))
    }

    /// Update a team the caller owns
    #[instrument(skip(self, request))]
    pub async fn update_team(
        &self,
        user_id: i64,
        team_id: i64,
        request: UpdateTeamRequest,
    ) -> ServiceResult<TeamSummaryResponse> {
        let existing = self.owned_team(user_id, team_id).await?;

        let patch = TeamUpdate {
            name: request.name,
            abbreviation: request.abbreviation,
            coach_name: request.coach_name,
            home_stadium: request.home_stadium,
            founded_year: request.founded_year,
            wins: request.wins,
            draws: request.draws,
            losses: request.losses,
            goals_scored: request.goals_scored,
            goals_conceded: request.goals_conceded,
            country: request.country,
        };

        let team = if patch.is_empty() {
            existing
        } else {
            self.ctx.team_repo().update(team_id, &patch).await?
        };
        info!(team_id, "Team updated");

        AuditService::new(self.ctx)
            .log_action(
                user_id,
                AuditAction::Update,
                "Team",
                Some(team_id),
                Some(format!("Updated team: {}", team.name)),
            )
            .await;

        Ok(TeamSummaryResponse::from(&team))
    }

    /// Delete a team the caller owns (players go with it)
    #[instrument(skip(self))]
    pub async fn delete_team(&self, user_id: i64, team_id: i64) -> ServiceResult<()> {
        let team = self.owned_team(user_id, team_id).await?;

        self.ctx.team_repo().delete(team_id).await?;
        info!(team_id, "Team deleted");

        AuditService::new(self.ctx)
            .log_action(
                user_id,
                AuditAction::Delete,
                "Team",
                Some(team_id),
                Some(format!("Deleted team: {}", team.name)),
            )
            .await;

        Ok(())
    }

    /// Fetch a team and verify the caller owns it
    async fn owned_team(&self, user_id: i64, team_id: i64) -> ServiceResult<Team> {
        let team = self
            .ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", team_id.to_string()))?;

        if !team.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotTeamOwner));
        }

        Ok(team)
    }
}
