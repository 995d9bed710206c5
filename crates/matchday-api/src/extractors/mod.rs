//! Axum extractors for request handling
//!
//! Custom extractors for identity and validation.

mod auth;
mod validated;

pub use auth::{AdminUser, CurrentUser, USER_DATA_HEADER};
pub use validated::ValidatedJson;
