//! Driven port for user storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserChanges, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Another user already holds the (normalised) email address.
        EmailTaken { email: String } => "email {email} is already registered",
        /// The adapter could not serve the request.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for [`User`] records.
///
/// Implementations assign identifiers and enforce email uniqueness in the same
/// critical section as the mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under the next identifier.
    async fn insert(&self, draft: UserDraft) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Snapshot of every user, ordered by identifier.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Apply `changes` to an existing user. `Ok(None)` when the id is unknown.
    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Remove a user. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError>;
}
