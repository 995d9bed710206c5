//! Audit log entity <-> model mapper

use matchday_core::entities::{AuditAction, AuditLogEntry};
use matchday_core::error::DomainError;
use matchday_core::traits::RepoResult;

use crate::models::AuditLogModel;

/// Convert AuditLogModel to AuditLogEntry entity
///
/// The action column is CHECK-constrained; an unparseable value is an
/// internal error, not a default.
pub fn audit_entry_from_model(model: AuditLogModel) -> RepoResult<AuditLogEntry> {
    let action = AuditAction::parse(&model.action).ok_or_else(|| {
        DomainError::InternalError(format!("unknown audit action: {}", model.action))
    })?;

    Ok(AuditLogEntry {
        id: model.id,
        user_id: model.user_id,
        action,
        entity: model.entity,
        entity_id: model.entity_id,
        details: model.details,
        created_at: model.created_at,
    })
}
