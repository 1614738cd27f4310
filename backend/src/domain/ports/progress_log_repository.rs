//! Driven port for progress log storage.

use async_trait::async_trait;

use crate::domain::{ProgressLog, ProgressLogDraft, ProgressLogId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by progress log repository adapters.
    pub enum ProgressLogRepositoryError {
        /// The referenced owner does not exist.
        UnknownOwner { user_id: u64 } => "user {user_id} does not exist",
        /// The adapter could not serve the request.
        Query { message: String } => "progress log repository query failed: {message}",
    }
}

/// Storage for [`ProgressLog`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressLogRepository: Send + Sync {
    /// Store a new log. Fails with
    /// [`ProgressLogRepositoryError::UnknownOwner`] when the owner is absent.
    async fn insert(&self, draft: ProgressLogDraft)
    -> Result<ProgressLog, ProgressLogRepositoryError>;

    /// Fetch a log by identifier.
    async fn find_by_id(
        &self,
        id: ProgressLogId,
    ) -> Result<Option<ProgressLog>, ProgressLogRepositoryError>;

    /// Logs owned by `user_id`, ordered by log date then identifier. Fails
    /// with [`ProgressLogRepositoryError::UnknownOwner`] when the user is
    /// absent.
    async fn list_by_owner(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ProgressLog>, ProgressLogRepositoryError>;

    /// Remove a log. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: ProgressLogId) -> Result<bool, ProgressLogRepositoryError>;
}
