//! Activity monitoring service
//!
//! Evaluates every user's mutation volume in a trailing 24-hour window
//! against the fixed thresholds and flags violators. Also serves the
//! admin-facing monitored-users listing.

use chrono::{Duration, Utc};
use tracing::{debug, info, instrument};

use matchday_core::activity::{ActivityCounts, ActivityThresholds, MUTATION_WINDOW_MS};

use crate::dto::{ActivityCheckReport, MonitoredUserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Activity monitoring service
pub struct MonitoringService<'a> {
    ctx: &'a ServiceContext,
    thresholds: ActivityThresholds,
}

impl<'a> MonitoringService<'a> {
    /// Create a new MonitoringService with the fixed production thresholds
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            thresholds: ActivityThresholds::DEFAULT,
        }
    }

    /// Run one activity check pass over all user accounts.
    ///
    /// One bulk read fetches every user with their in-window
    /// CREATE/UPDATE/DELETE log entries; users are then processed
    /// sequentially. A failure persisting one user's flag propagates and
    /// aborts the remaining users in this pass; the next scheduled pass
    /// retries from scratch, which is safe because flagging is idempotent
    /// and never cleared.
    #[instrument(skip(self))]
    pub async fn check_user_activity(&self) -> ServiceResult<ActivityCheckReport> {
        let window_start = Utc::now() - Duration::milliseconds(MUTATION_WINDOW_MS);

        let users = self
            .ctx
            .user_repo()
            .find_all_with_mutations_since(window_start)
            .await?;

        debug!(users = users.len(), "Checking activity");

        let mut users_flagged = 0;
        for activity in &users {
            let counts = ActivityCounts::from_logs(&activity.logs);

            if counts.total_modify > 0 {
                debug!(
                    user_id = activity.user.id,
                    total = counts.total_modify,
                    creates = counts.creates,
                    updates = counts.updates,
                    deletes = counts.deletes,
                    "User mutation counts"
                );
            }

            let reasons = counts.violations(&self.thresholds);
            if reasons.is_empty() {
                continue;
            }

            // Already-flagged users keep their flag without a redundant
            // write; re-running the checker is a no-op for them.
            if activity.user.is_monitored {
                continue;
            }

            info!(
                user_id = activity.user.id,
                reasons = %reasons.join(", "),
                "Marking user as monitored"
            );
            self.ctx.user_repo().mark_monitored(activity.user.id).await?;
            users_flagged += 1;
        }

        Ok(ActivityCheckReport {
            users_checked: users.len(),
            users_flagged,
        })
    }

    /// All monitored users with their last-24h CREATE/UPDATE/DELETE log
    /// entries, newest first. Pure read for the admin surface.
    #[instrument(skip(self))]
    pub async fn monitored_users(&self) -> ServiceResult<Vec<MonitoredUserResponse>> {
        let window_start = Utc::now() - Duration::milliseconds(MUTATION_WINDOW_MS);

        let users = self
            .ctx
            .user_repo()
            .find_monitored_with_mutations_since(window_start)
            .await?;

        Ok(users.iter().map(MonitoredUserResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use matchday_core::entities::{AuditAction, UserRole};

    use super::super::test_support::{
        memory_context, test_user, MemoryAuditLogRepository, MemoryPlayerRepository,
        MemoryTeamRepository, MemoryUserRepository,
    };
    use super::*;

    const HOUR_MS: i64 = 60 * 60 * 1000;

    fn context_with(users: Arc<MemoryUserRepository>) -> ServiceContext {
        memory_context(
            users,
            Arc::new(MemoryTeamRepository::default()),
            Arc::new(MemoryPlayerRepository::default()),
            Arc::new(MemoryAuditLogRepository::default()),
        )
    }

    fn push_logs(repo: &MemoryUserRepository, user_id: i64, action: AuditAction, n: usize) {
        for _ in 0..n {
            repo.push_log(user_id, action, HOUR_MS);
        }
    }

    #[tokio::test]
    async fn test_flags_user_over_create_threshold() {
        let users = Arc::new(MemoryUserRepository::with_users(vec![test_user(
            1,
            UserRole::Guest,
        )]));
        push_logs(&users, 1, AuditAction::Create, 31);
        let ctx = context_with(Arc::clone(&users));

        let report = MonitoringService::new(&ctx).check_user_activity().await.unwrap();

        assert_eq!(report.users_checked, 1);
        assert_eq!(report.users_flagged, 1);
        assert_eq!(*users.marks.lock(), vec![1]);
        assert!(users.users.lock()[0].is_monitored);
    }

    #[tokio::test]
    async fn test_boundary_is_strict_greater_than() {
        let users = Arc::new(MemoryUserRepository::with_users(vec![test_user(
            1,
            UserRole::Guest,
        )]));
        push_logs(&users, 1, AuditAction::Create, 30);
        let ctx = context_with(Arc::clone(&users));

        let report = MonitoringService::new(&ctx).check_user_activity().await.unwrap();

        assert_eq!(report.users_flagged, 0);
        assert!(users.marks.lock().is_empty());
        assert!(!users.users.lock()[0].is_monitored);
    }

    #[tokio::test]
    async fn test_mixed_volume_below_all_thresholds() {
        let users = Arc::new(MemoryUserRepository::with_users(vec![test_user(
            1,
            UserRole::Guest,
        )]));
        push_logs(&users, 1, AuditAction::Create, 10);
        push_logs(&users, 1, AuditAction::Update, 10);
        push_logs(&users, 1, AuditAction::Delete, 5);
        let ctx = context_with(Arc::clone(&users));

        let report = MonitoringService::new(&ctx).check_user_activity().await.unwrap();

        assert_eq!(report.users_flagged, 0);
    }

    #[tokio::test]
    async fn test_reads_never_count_toward_thresholds() {
        let users = Arc::new(MemoryUserRepository::with_users(vec![test_user(
            1,
            UserRole::Guest,
        )]));
        push_logs(&users, 1, AuditAction::Read, 500);
        let ctx = context_with(Arc::clone(&users));

        let report = MonitoringService::new(&ctx).check_user_activity().await.unwrap();

        assert_eq!(report.users_flagged, 0);
        assert!(!users.users.lock()[0].is_monitored);
    }

    #[tokio::test]
    async fn test_entries_outside_window_are_excluded() {
        let users = Arc::new(MemoryUserRepository::with_users(vec![test_user(
            1,
            UserRole::Guest,
        )]));
        // 30 creates just inside the window plus 5 just outside: only the
        // in-window entries count, so the user stays below the threshold.
        for _ in 0..30 {
            users.push_log(1, AuditAction::Create, 23 * HOUR_MS + 59 * 60 * 1000);
        }
        for _ in 0..5 {
            users.push_log(1, AuditAction::Create, 25 * HOUR_MS);
        }
        let ctx = context_with(Arc::clone(&users));

        let report = MonitoringService::new(&ctx).check_user_activity().await.unwrap();
        assert_eq!(report.users_flagged, 0);

        // One more entry just inside tips it over.
        users.push_log(1, AuditAction::Create, 23 * HOUR_MS);
        let report = MonitoringService::new(&ctx).check_user_activity().await.unwrap();
        assert_eq!(report.users_flagged, 1);
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let users = Arc::new(MemoryUserRepository::with_users(vec![
            test_user(1, UserRole::Guest),
            test_user(2, UserRole::Guest),
        ]));
        push_logs(&users, 1, AuditAction::Delete, 21);
        push_logs(&users, 2, AuditAction::Update, 5);
        let ctx = context_with(Arc::clone(&users));
        let service = MonitoringService::new(&ctx);

        let first = service.check_user_activity().await.unwrap();
        assert_eq!(first.users_flagged, 1);

        // No new log entries: no additional flag writes, identical decisions.
        let second = service.check_user_activity().await.unwrap();
        assert_eq!(second.users_flagged, 0);
        assert_eq!(users.marks.lock().len(), 1);
        assert!(users.users.lock()[0].is_monitored);
        assert!(!users.users.lock()[1].is_monitored);
    }

    #[tokio::test]
    async fn test_flag_update_failure_aborts_pass() {
        let users = Arc::new(MemoryUserRepository::with_users(vec![
            test_user(1, UserRole::Guest),
            test_user(2, UserRole::Guest),
        ]));
        push_logs(&users, 1, AuditAction::Create, 31);
        push_logs(&users, 2, AuditAction::Create, 31);
        *users.fail_mark_for.lock() = Some(1);
        let ctx = context_with(Arc::clone(&users));

        let result = MonitoringService::new(&ctx).check_user_activity().await;
        assert!(result.is_err());
        // User 2 was never reached in this pass.
        assert!(users.marks.lock().is_empty());

        // The next pass retries from scratch and flags both.
        *users.fail_mark_for.lock() = None;
        let report = MonitoringService::new(&ctx).check_user_activity().await.unwrap();
        assert_eq!(report.users_flagged, 2);
    }

    #[tokio::test]
    async fn test_monitored_users_lists_logs_newest_first() {
        let users = Arc::new(MemoryUserRepository::with_users(vec![
            test_user(1, UserRole::Guest),
            test_user(2, UserRole::Guest),
        ]));
        push_logs(&users, 1, AuditAction::Update, 41);
        // Out-of-window and READ entries must not appear in the listing.
        users.push_log(1, AuditAction::Delete, 26 * HOUR_MS);
        users.push_log(1, AuditAction::Read, HOUR_MS);
        let ctx = context_with(Arc::clone(&users));
        let service = MonitoringService::new(&ctx);

        service.check_user_activity().await.unwrap();
        let monitored = service.monitored_users().await.unwrap();

        assert_eq!(monitored.len(), 1);
        let entry = &monitored[0];
        assert_eq!(entry.id, 1);
        assert!(entry.is_monitored);
        assert_eq!(entry.logs.len(), 41);
        assert!(entry
            .logs
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }
}
