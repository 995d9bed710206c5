//! Repository traits (ports) for the domain layer

mod repositories;

pub use repositories::{
    AuditLogRepository, PlayerRepository, RepoResult, TeamRepository, TeamWithPlayers,
    UserActivity, UserRepository,
};
