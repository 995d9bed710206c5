//! Audit logging service
//!
//! Records one immutable log entry per completed API operation. Logging is
//! fire-and-forget telemetry: a failed write is logged and swallowed so it
//! can never break the business operation that triggered it.

use matchday_core::entities::{AuditAction, NewAuditLogEntry};
use tracing::{instrument, warn};

use super::context::ServiceContext;

/// Audit logging service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append one audit log entry. Never returns an error: a write failure
    /// is logged and discarded.
    #[instrument(skip(self, details))]
    pub async fn log_action(
        &self,
        user_id: i64,
        action: AuditAction,
        entity: &str,
        entity_id: Option<i64>,
        details: Option<String>,
    ) {
        let entry = NewAuditLogEntry {
            user_id,
            action,
            entity: entity.to_string(),
            entity_id,
            details,
        };

        if let Err(e) = self.ctx.audit_repo().append(&entry).await {
            warn!(error = %e, "Failed to write audit log entry");
        }
    }
}
