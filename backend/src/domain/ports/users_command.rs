//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Request to register a new user. Fields are validated by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
}

/// Partial update of an existing user. `None` leaves the field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

/// Domain use-case port for user writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user.
    ///
    /// Fails with `invalid_request` on malformed fields and `conflict` when
    /// the email is already registered.
    async fn register_user(&self, request: RegisterUserRequest) -> Result<User, Error>;

    /// Update name, email or active flag.
    ///
    /// Fails with `not_found`, `invalid_request` or `conflict`.
    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error>;

    /// Delete a user. Their workouts are kept.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
