//! Driving port for workout reads and training summaries.

use async_trait::async_trait;

use crate::domain::{Error, TrainingStats, UserId, Workout, WorkoutCategory, WorkoutId};

/// Filter applied when listing workouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListWorkoutsRequest {
    /// Restrict to one owner. The owner must exist.
    pub user_id: Option<UserId>,
    pub category: Option<WorkoutCategory>,
}

/// Domain use-case port for workout lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutsQuery: Send + Sync {
    /// Fetch one workout, or `not_found`. Orphaned workouts are returned.
    async fn get_workout(&self, id: WorkoutId) -> Result<Workout, Error>;

    /// Workouts matching `request`, ordered by identifier.
    ///
    /// Fails with `not_found` when `user_id` names a missing user.
    async fn list_workouts(&self, request: ListWorkoutsRequest) -> Result<Vec<Workout>, Error>;

    /// Training summary across a user's workouts.
    async fn training_stats(&self, user_id: UserId) -> Result<TrainingStats, Error>;
}
