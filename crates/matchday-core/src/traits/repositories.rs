//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    AuditLogEntry, NewAuditLogEntry, NewPlayer, NewTeam, Player, PlayerUpdate, Team, TeamUpdate,
    User, UserRole,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A user joined with a slice of their audit log entries, as returned by the
/// activity queries. The entries carry whatever time/action filter the query
/// applied; ownership of the log records stays with the store.
#[derive(Debug, Clone)]
pub struct UserActivity {
    pub user: User,
    pub logs: Vec<AuditLogEntry>,
}

/// A team joined with its players
#[derive(Debug, Clone)]
pub struct TeamWithPlayers {
    pub team: Team,
    pub players: Vec<Player>,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user; the store assigns the ID
    async fn create(&self, email: &str, password: &str, role: UserRole) -> RepoResult<User>;

    /// Get the stored password for login comparison
    async fn get_password(&self, id: i64) -> RepoResult<Option<String>>;

    /// Set `is_monitored = true` for a user (point update; never cleared)
    async fn mark_monitored(&self, id: i64) -> RepoResult<()>;

    /// All users, each with their mutation-log entries created at or after
    /// `since`, filtered to CREATE/UPDATE/DELETE actions
    async fn find_all_with_mutations_since(
        &self,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<UserActivity>>;

    /// All monitored users with their CREATE/UPDATE/DELETE entries created at
    /// or after `since`, newest first
    async fn find_monitored_with_mutations_since(
        &self,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<UserActivity>>;
}

// ============================================================================
// Team Repository
// ============================================================================

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find team by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Team>>;

    /// Find team by ID, joined with its players
    async fn find_by_id_with_players(&self, id: i64) -> RepoResult<Option<TeamWithPlayers>>;

    /// All teams, each joined with its players
    async fn find_all_with_players(&self) -> RepoResult<Vec<TeamWithPlayers>>;

    /// Create a new team; the store assigns the ID
    async fn create(&self, team: &NewTeam) -> RepoResult<Team>;

    /// Apply a partial update and return the updated team
    async fn update(&self, id: i64, patch: &TeamUpdate) -> RepoResult<Team>;

    /// Delete a team and its players
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Player Repository
// ============================================================================

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find player by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Player>>;

    /// All players, optionally restricted to one team
    async fn find_all(&self, team_id: Option<i64>) -> RepoResult<Vec<Player>>;

    /// Create a new player; the store assigns the ID
    async fn create(&self, player: &NewPlayer) -> RepoResult<Player>;

    /// Apply a partial update and return the updated player
    async fn update(&self, id: i64, patch: &PlayerUpdate) -> RepoResult<Player>;

    /// Delete a player
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append one immutable log entry (insert-only; entries are never
    /// updated or expired)
    async fn append(&self, entry: &NewAuditLogEntry) -> RepoResult<()>;
}
