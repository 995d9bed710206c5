//! Identity extractors
//!
//! The authenticated identity arrives in the trusted `x-user-data` header as
//! JSON, e.g. `{"id": 7, "role": "ADMIN"}`. This is the original
//! application's placeholder session mechanism carried over as-is: the
//! header is trusted, not verified, and must not be treated as secure.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use matchday_common::AppError;
use matchday_core::entities::UserRole;
use serde::Deserialize;

use crate::response::ApiError;

/// Header carrying the caller's identity
pub const USER_DATA_HEADER: &str = "x-user-data";

#[derive(Debug, Deserialize)]
struct UserData {
    id: i64,
    #[serde(default)]
    role: UserRole,
}

/// Authenticated user extracted from the identity header
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: i64,
    pub role: UserRole,
}

impl CurrentUser {
    /// Check if the caller holds the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_DATA_HEADER)
            .ok_or(ApiError::MissingAuth)?;

        let raw = header.to_str().map_err(|_| ApiError::InvalidAuthFormat)?;

        let data: UserData = serde_json::from_str(raw).map_err(|e| {
            tracing::warn!(error = %e, "Invalid identity header");
            ApiError::InvalidAuthFormat
        })?;

        Ok(CurrentUser {
            user_id: data.id,
            role: data.role,
        })
    }
}

/// Authenticated admin. Rejects with 401 when no identity is present and
/// 403 when the identity is not an admin.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(ApiError::App(AppError::InsufficientPermissions));
        }

        Ok(AdminUser(user))
    }
}
