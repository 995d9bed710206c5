//! Authentication service
//!
//! Handles user registration and login.
//!
//! This is a placeholder credential flow kept faithful to the original
//! application: passwords are stored and compared as plaintext, and the
//! authenticated identity is subsequently carried in a trusted header.
//! Do not mistake it for a real auth system.

use matchday_core::entities::UserRole;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user with the GUEST role
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        if self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("User already exists"));
        }

        let user = self
            .ctx
            .user_repo()
            .create(&request.email, &request.password, UserRole::Guest)
            .await?;

        info!(user_id = user.id, "User registered");

        Ok(UserResponse::from(&user))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(matchday_common::AppError::InvalidCredentials)
            })?;

        let password = self
            .ctx
            .user_repo()
            .get_password(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no stored password");
                ServiceError::App(matchday_common::AppError::InvalidCredentials)
            })?;

        // Plaintext comparison, as the original application does it.
        if password != request.password {
            warn!(user_id = user.id, "Login failed: password mismatch");
            return Err(ServiceError::App(
                matchday_common::AppError::InvalidCredentials,
            ));
        }

        info!(user_id = user.id, "User logged in");

        Ok(UserResponse::from(&user))
    }
}
