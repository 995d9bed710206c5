//! Admin handlers
//!
//! Admin-only endpoints. Authorization is enforced by the `AdminUser`
//! extractor: 401 without an identity, 403 for non-admins.

use axum::{extract::State, Json};
use matchday_service::{MonitoredUserResponse, MonitoringService};

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// List monitored users with their recent mutation logs
///
/// GET /admin/monitored-users
pub async fn monitored_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<MonitoredUserResponse>>> {
    let service = MonitoringService::new(state.service_context());
    let users = service.monitored_users().await?;
    Ok(Json(users))
}
