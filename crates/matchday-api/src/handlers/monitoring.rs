//! Monitoring diagnostics handlers
//!
//! Operational surface for the activity monitoring scheduler: start, stop,
//! status, and a manual check cycle. Intended for operational testing, not
//! end users.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use matchday_service::{ActivityCheckReport, MonitoringService, SchedulerStatus};
use serde::Serialize;

use crate::response::ApiResult;
use crate::state::AppState;

/// Scheduler control outcome
#[derive(Debug, Serialize)]
pub struct SchedulerControlResponse {
    pub message: &'static str,
    pub status: SchedulerStatus,
}

/// Scheduler status snapshot
#[derive(Debug, Serialize)]
pub struct SchedulerStatusResponse {
    pub status: SchedulerStatus,
    pub server_time: DateTime<Utc>,
}

/// Manual check outcome
#[derive(Debug, Serialize)]
pub struct ManualCheckResponse {
    pub message: &'static str,
    pub report: ActivityCheckReport,
    pub status: SchedulerStatus,
    pub time: DateTime<Utc>,
}

/// Start the monitoring scheduler
///
/// POST /monitoring/start
pub async fn start_scheduler(State(state): State<AppState>) -> Json<SchedulerControlResponse> {
    state.scheduler().start();
    Json(SchedulerControlResponse {
        message: "Monitoring scheduler started",
        status: state.scheduler().status(),
    })
}

/// Stop the monitoring scheduler
///
/// POST /monitoring/stop
pub async fn stop_scheduler(State(state): State<AppState>) -> Json<SchedulerControlResponse> {
    state.scheduler().stop();
    Json(SchedulerControlResponse {
        message: "Monitoring scheduler stopped",
        status: state.scheduler().status(),
    })
}

/// Report scheduler status
///
/// GET /monitoring/status
pub async fn scheduler_status(State(state): State<AppState>) -> Json<SchedulerStatusResponse> {
    Json(SchedulerStatusResponse {
        status: state.scheduler().status(),
        server_time: Utc::now(),
    })
}

/// Run one manual check cycle
///
/// POST /monitoring/check
pub async fn run_check(State(state): State<AppState>) -> ApiResult<Json<ManualCheckResponse>> {
    let service = MonitoringService::new(state.service_context());
    let report = service.check_user_activity().await?;

    Ok(Json(ManualCheckResponse {
        message: "Manual monitoring check completed",
        report,
        status: state.scheduler().status(),
        time: Utc::now(),
    }))
}
