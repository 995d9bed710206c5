//! Monitoring scheduler
//!
//! Owns the single recurring timer that drives the activity checker. One
//! instance is constructed at process start and held by the composition
//! root; start/stop/status are idempotent operations on that instance.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::context::ServiceContext;
use super::monitoring::MonitoringService;

/// Interval between scheduled activity checks: fixed at 15 minutes.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Scheduler status snapshot (pure read, no side effects)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SchedulerStatus {
    pub is_running: bool,
    pub interval_ms: u64,
    pub interval_minutes: f64,
}

#[derive(Default)]
struct SchedulerState {
    running: bool,
    handle: Option<JoinHandle<()>>,
}

/// Background scheduler for the activity checker.
///
/// Ticks are not mutually exclusive: a check that outruns the interval
/// overlaps the next tick. There is deliberately no overlap lock and no
/// per-check deadline.
pub struct MonitoringScheduler {
    ctx: Arc<ServiceContext>,
    interval: Duration,
    state: Mutex<SchedulerState>,
}

impl MonitoringScheduler {
    /// Create a scheduler with the fixed production interval
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self::with_interval(ctx, CHECK_INTERVAL)
    }

    /// Create a scheduler with a custom interval (tests)
    pub fn with_interval(ctx: Arc<ServiceContext>, interval: Duration) -> Self {
        Self {
            ctx,
            interval,
            state: Mutex::new(SchedulerState::default()),
        }
    }

    /// Start the recurring timer. No-op if already running.
    ///
    /// The spawned task runs one check immediately (the interval's first
    /// tick completes at once), then one per interval. Each tick's result
    /// is logged and discarded: a failing check never tears down the timer
    /// and never reaches this caller.
    pub fn start(&self) {
        let mut state = self.state.lock();
        if state.running {
            info!("Monitoring scheduler is already running");
            return;
        }

        info!("Starting monitoring scheduler...");

        let ctx = Arc::clone(&self.ctx);
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match MonitoringService::new(&ctx).check_user_activity().await {
                    Ok(report) => info!(
                        users_checked = report.users_checked,
                        users_flagged = report.users_flagged,
                        "Scheduled activity check completed"
                    ),
                    Err(e) => error!(error = %e, "Scheduled activity check failed"),
                }
            }
        });

        state.handle = Some(handle);
        state.running = true;

        info!(
            interval_minutes = interval.as_secs_f64() / 60.0,
            "Monitoring scheduler started"
        );
    }

    /// Cancel the timer. No-op if not running.
    pub fn stop(&self) {
        let mut state = self.state.lock();
        if !state.running {
            info!("Monitoring scheduler is not running");
            return;
        }

        if let Some(handle) = state.handle.take() {
            handle.abort();
        }
        state.running = false;

        info!("Monitoring scheduler stopped");
    }

    /// Current scheduler status
    pub fn status(&self) -> SchedulerStatus {
        let state = self.state.lock();
        let interval_ms = self.interval.as_millis() as u64;
        SchedulerStatus {
            is_running: state.running,
            interval_ms,
            interval_minutes: interval_ms as f64 / 60_000.0,
        }
    }
}

impl Drop for MonitoringScheduler {
    fn drop(&mut self) {
        // The timer task holds no resources worth a graceful shutdown; abort
        // so it does not outlive the scheduler in tests.
        if let Some(handle) = self.state.lock().handle.take() {
            handle.abort();
        }
    }
}
