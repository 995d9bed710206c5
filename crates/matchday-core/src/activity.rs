//! Activity monitoring policy
//!
//! Fixed policy for the suspicious-activity checker: the trailing window and
//! the four mutation thresholds. These are compile-time constants, not
//! runtime configuration.

use crate::entities::{AuditAction, AuditLogEntry};

/// Trailing lookback window for mutation counting: exactly 24 hours in
/// milliseconds, not calendar-day-aligned.
pub const MUTATION_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Per-user daily mutation thresholds. Exceeding any single one (strict `>`)
/// flags the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityThresholds {
    /// Maximum CREATE/UPDATE/DELETE actions per day
    pub max_total_modify: u32,
    /// Maximum creates per day
    pub max_creates: u32,
    /// Maximum updates per day
    pub max_updates: u32,
    /// Maximum deletes per day
    pub max_deletes: u32,
}

impl ActivityThresholds {
    /// The fixed production policy: 50 total / 30 creates / 40 updates / 20 deletes.
    pub const DEFAULT: Self = Self {
        max_total_modify: 50,
        max_creates: 30,
        max_updates: 40,
        max_deletes: 20,
    };
}

impl Default for ActivityThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-user mutation counts over one trailing window.
///
/// Invariant: `total_modify == creates + updates + deletes`; READ actions
/// never contribute to any count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityCounts {
    pub total_modify: u32,
    pub creates: u32,
    pub updates: u32,
    pub deletes: u32,
}

impl ActivityCounts {
    /// Tally the mutating actions in a set of log entries. READ entries are
    /// skipped; callers typically pre-filter them out at the query level, so
    /// this is the second line of defense keeping the counts honest.
    #[must_use]
    pub fn from_logs(logs: &[AuditLogEntry]) -> Self {
        let mut counts = Self::default();
        for log in logs {
            match log.action {
                AuditAction::Create => counts.creates += 1,
                AuditAction::Update => counts.updates += 1,
                AuditAction::Delete => counts.deletes += 1,
                AuditAction::Read => continue,
            }
            counts.total_modify += 1;
        }
        counts
    }

    /// Evaluate the four independent threshold rules, returning a human
    /// readable reason for each rule that fired. Empty means not suspicious.
    #[must_use]
    pub fn violations(&self, thresholds: &ActivityThresholds) -> Vec<String> {
        let mut reasons = Vec::new();

        if self.total_modify > thresholds.max_total_modify {
            reasons.push(format!(
                "{} total modify actions (threshold: {})",
                self.total_modify, thresholds.max_total_modify
            ));
        }
        if self.deletes > thresholds.max_deletes {
            reasons.push(format!(
                "{} DELETE actions (threshold: {})",
                self.deletes, thresholds.max_deletes
            ));
        }
        if self.creates > thresholds.max_creates {
            reasons.push(format!(
                "{} CREATE actions (threshold: {})",
                self.creates, thresholds.max_creates
            ));
        }
        if self.updates > thresholds.max_updates {
            reasons.push(format!(
                "{} UPDATE actions (threshold: {})",
                self.updates, thresholds.max_updates
            ));
        }

        reasons
    }

    /// Whether any threshold rule fires
    #[must_use]
    pub fn is_suspicious(&self, thresholds: &ActivityThresholds) -> bool {
        self.total_modify > thresholds.max_total_modify
            || self.creates > thresholds.max_creates
            || self.updates > thresholds.max_updates
            || self.deletes > thresholds.max_deletes
    }
}
