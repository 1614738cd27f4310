//! Driven port for workout plan storage.

use async_trait::async_trait;

use crate::domain::{PlanDetails, UserId, WorkoutId, WorkoutPlan, WorkoutPlanDraft, WorkoutPlanId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by plan repository adapters.
    pub enum WorkoutPlanRepositoryError {
        /// The referenced owner does not exist.
        UnknownOwner { user_id: u64 } => "user {user_id} does not exist",
        /// The referenced workout does not exist.
        UnknownWorkout { workout_id: u64 } => "workout {workout_id} does not exist",
        /// The adapter could not serve the request.
        Query { message: String } => "workout plan repository query failed: {message}",
    }
}

/// Storage for [`WorkoutPlan`] records.
///
/// Owner and workout checks happen in the same critical section as the write
/// they guard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutPlanRepository: Send + Sync {
    /// Store a new plan. Fails with
    /// [`WorkoutPlanRepositoryError::UnknownOwner`] when the owner is absent.
    async fn insert(&self, draft: WorkoutPlanDraft)
    -> Result<WorkoutPlan, WorkoutPlanRepositoryError>;

    /// Fetch a plan by identifier.
    async fn find_by_id(
        &self,
        id: WorkoutPlanId,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError>;

    /// Snapshot of every plan, ordered by identifier.
    async fn list(&self) -> Result<Vec<WorkoutPlan>, WorkoutPlanRepositoryError>;

    /// Plans owned by `user_id`, ordered by identifier. Fails with
    /// [`WorkoutPlanRepositoryError::UnknownOwner`] when the user is absent.
    async fn list_by_owner(
        &self,
        user_id: UserId,
    ) -> Result<Vec<WorkoutPlan>, WorkoutPlanRepositoryError>;

    /// Replace a plan's details. `Ok(None)` when the id is unknown.
    async fn update(
        &self,
        id: WorkoutPlanId,
        details: PlanDetails,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError>;

    /// Remove a plan. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: WorkoutPlanId) -> Result<bool, WorkoutPlanRepositoryError>;

    /// Attach an existing workout. `Ok(None)` when the plan is unknown; fails
    /// with [`WorkoutPlanRepositoryError::UnknownWorkout`] when the workout is.
    async fn add_workout(
        &self,
        id: WorkoutPlanId,
        workout: WorkoutId,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError>;

    /// Detach a workout if listed. `Ok(None)` when the plan is unknown.
    async fn remove_workout(
        &self,
        id: WorkoutPlanId,
        workout: WorkoutId,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError>;
}
