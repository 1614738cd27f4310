//! Driving ports for workout plans.

use async_trait::async_trait;

use crate::domain::{Error, PlanDetailsDraft, UserId, WorkoutId, WorkoutPlan, WorkoutPlanId};

/// Request to create a plan for an existing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWorkoutPlanRequest {
    pub user_id: UserId,
    pub details: PlanDetailsDraft,
}

/// Domain use-case port for plan writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutPlansCommand: Send + Sync {
    /// Create a plan with no workouts.
    ///
    /// Fails with `not_found` when the owner does not exist and
    /// `invalid_request` when the details are malformed.
    async fn create_plan(&self, request: CreateWorkoutPlanRequest) -> Result<WorkoutPlan, Error>;

    /// Replace a plan's details, keeping its workouts.
    async fn update_plan(
        &self,
        id: WorkoutPlanId,
        details: PlanDetailsDraft,
    ) -> Result<WorkoutPlan, Error>;

    /// Delete a plan. The workouts it lists are untouched.
    async fn delete_plan(&self, id: WorkoutPlanId) -> Result<(), Error>;

    /// Attach a workout. Idempotent; `not_found` when either side is missing.
    async fn add_workout(
        &self,
        id: WorkoutPlanId,
        workout: WorkoutId,
    ) -> Result<WorkoutPlan, Error>;

    /// Detach a workout. `not_found` only when the plan is missing.
    async fn remove_workout(
        &self,
        id: WorkoutPlanId,
        workout: WorkoutId,
    ) -> Result<WorkoutPlan, Error>;
}

/// Domain use-case port for plan reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutPlansQuery: Send + Sync {
    /// Fetch one plan, or `not_found`.
    async fn get_plan(&self, id: WorkoutPlanId) -> Result<WorkoutPlan, Error>;

    /// Plans ordered by identifier, optionally restricted to one owner. The
    /// owner must exist.
    async fn list_plans(&self, user_id: Option<UserId>) -> Result<Vec<WorkoutPlan>, Error>;
}
