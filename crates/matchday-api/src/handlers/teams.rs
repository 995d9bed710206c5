//! Team handlers
//!
//! Endpoints for team listing and CRUD.

use axum::{
    extract::{Path, State},
    Json,
};
use matchday_service::{
    CreateTeamRequest, PlayerResponse, PlayerService, TeamResponse, TeamService,
    TeamSummaryResponse, UpdateTeamRequest,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all teams with their players
///
/// GET /teams
pub async fn list_teams(State(state): State<AppState>) -> ApiResult<Json<Vec<TeamResponse>>> {
    let service = TeamService::new(state.service_context());
    let teams = service.list_teams().await?;
    Ok(Json(teams))
}

/// Get one team with its players
///
/// GET /teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<Json<TeamResponse>> {
    let service = TeamService::new(state.service_context());
    let team = service.get_team(team_id).await?;
    Ok(Json(team))
}

/// Create a team owned by the caller
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<Created<Json<TeamSummaryResponse>>> {
    let service = TeamService::new(state.service_context());
    let team = service.create_team(user.user_id, request).await?;
    Ok(Created(Json(team)))
}

/// Update a team the caller owns
///
/// PATCH /teams/{team_id}
pub async fn update_team(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateTeamRequest>,
) -> ApiResult<Json<TeamSummaryResponse>> {
    let service = TeamService::new(state.service_context());
    let team = service.update_team(user.user_id, team_id, request).await?;
    Ok(Json(team))
}

/// Delete a team the caller owns
///
/// DELETE /teams/{team_id}
pub async fn delete_team(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = TeamService::new(state.service_context());
    service.delete_team(user.user_id, team_id).await?;
    Ok(NoContent)
}

/// List the players of one team
///
/// GET /teams/{team_id}/players
pub async fn get_team_players(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<Json<Vec<PlayerResponse>>> {
    let service = PlayerService::new(state.service_context());
    let players = service.team_players(team_id).await?;
    Ok(Json(players))
}
