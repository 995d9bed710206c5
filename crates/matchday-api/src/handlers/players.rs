//! Player handlers
//!
//! Endpoints for player listing and CRUD.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use matchday_service::{CreatePlayerRequest, PlayerResponse, PlayerService, UpdatePlayerRequest};
use serde::Deserialize;

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for the player listing
#[derive(Debug, Deserialize)]
pub struct PlayerListQuery {
    pub team_id: Option<i64>,
}

/// List players, optionally filtered by team
///
/// GET /players?team_id=1
pub async fn list_players(
    State(state): State<AppState>,
    Query(query): Query<PlayerListQuery>,
) -> ApiResult<Json<Vec<PlayerResponse>>> {
    let service = PlayerService::new(state.service_context());
    let players = service.list_players(query.team_id).await?;
    Ok(Json(players))
}

/// Get one player; the caller must own the player's team
///
/// GET /players/{player_id}
pub async fn get_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(player_id): Path<i64>,
) -> ApiResult<Json<PlayerResponse>> {
    let service = PlayerService::new(state.service_context());
    let player = service.get_player(user.user_id, player_id).await?;
    Ok(Json(player))
}

/// Create a player on a team the caller owns
///
/// POST /players
pub async fn create_player(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<CreatePlayerRequest>,
) -> ApiResult<Created<Json<PlayerResponse>>> {
    let service = PlayerService::new(state.service_context());
    let player = service.create_player(user.user_id, request).await?;
    Ok(Created(Json(player)))
}

/// Update a player on a team the caller owns
///
/// PATCH /players/{player_id}
pub async fn update_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(player_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePlayerRequest>,
) -> ApiResult<Json<PlayerResponse>> {
    let service = PlayerService::new(state.service_context());
    let player = service
        .update_player(user.user_id, player_id, request)
        .await?;
    Ok(Json(player))
}

/// Delete a player from a team the caller owns
///
/// DELETE /players/{player_id}
pub async fn delete_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(player_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = PlayerService::new(state.service_context());
    service.delete_player(user.user_id, player_id).await?;
    Ok(NoContent)
}
