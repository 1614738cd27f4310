//! Driven port for workout storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{UserId, Workout, WorkoutChanges, WorkoutDraft, WorkoutId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by workout repository adapters.
    pub enum WorkoutRepositoryError {
        /// The referenced owner does not exist.
        UnknownOwner { user_id: u64 } => "user {user_id} does not exist",
        /// The adapter could not serve the request.
        Query { message: String } => "workout repository query failed: {message}",
    }
}

/// Storage for [`Workout`] records.
///
/// Owner checks happen in the same critical section as the read or write they
/// guard, so a concurrent user deletion cannot slip in between.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Store a new workout under the next identifier.
    ///
    /// Fails with [`WorkoutRepositoryError::UnknownOwner`] when the owner is
    /// absent; nothing is stored in that case.
    async fn insert(&self, draft: WorkoutDraft) -> Result<Workout, WorkoutRepositoryError>;

    /// Fetch a workout by identifier, including orphaned workouts.
    async fn find_by_id(&self, id: WorkoutId) -> Result<Option<Workout>, WorkoutRepositoryError>;

    /// Snapshot of every workout, ordered by identifier.
    async fn list(&self) -> Result<Vec<Workout>, WorkoutRepositoryError>;

    /// Workouts owned by `user_id`, ordered by identifier.
    ///
    /// Fails with [`WorkoutRepositoryError::UnknownOwner`] when the user does
    /// not exist.
    async fn list_by_owner(&self, user_id: UserId)
    -> Result<Vec<Workout>, WorkoutRepositoryError>;

    /// Apply `changes` to an existing workout. `Ok(None)` when the id is unknown.
    async fn update(
        &self,
        id: WorkoutId,
        changes: WorkoutChanges,
    ) -> Result<Option<Workout>, WorkoutRepositoryError>;

    /// Remove a workout. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: WorkoutId) -> Result<bool, WorkoutRepositoryError>;
}
