//! User entity <-> model mapper

use matchday_core::entities::{User, UserRole};
use matchday_core::error::DomainError;
use matchday_core::traits::RepoResult;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The role column is CHECK-constrained, so an unparseable value means the
/// row was written outside the application; surface it as an internal error
/// rather than guessing a role.
pub fn user_from_model(model: UserModel) -> RepoResult<User> {
    let role = UserRole::parse(&model.role)
        .ok_or_else(|| DomainError::InternalError(format!("unknown user role: {}", model.role)))?;

    Ok(User {
        id: model.id,
        email: model.email,
        role,
        is_monitored: model.is_monitored,
        created_at: model.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(role: &str) -> UserModel {
        UserModel {
            id: 1,
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
            role: role.to_string(),
            is_monitored: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_maps_known_roles() {
        let user = user_from_model(model("ADMIN")).unwrap();
        assert_eq!(user.role, UserRole::Admin);
        // Password never crosses into the entity
        assert_eq!(user.email, "user@example.com");
    }

    #[test]
    fn test_rejects_unknown_role() {
        assert!(user_from_model(model("SUPERUSER")).is_err());
    }
}
