//! Workout plan service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CreateWorkoutPlanRequest, WorkoutPlanRepository, WorkoutPlanRepositoryError,
    WorkoutPlansCommand, WorkoutPlansQuery,
};
use crate::domain::user_service::user_not_found;
use crate::domain::workout_service::workout_not_found;
use crate::domain::{
    Error, PlanDetails, PlanDetailsDraft, PlanValidationError, UserId, WorkoutId, WorkoutPlan,
    WorkoutPlanDraft, WorkoutPlanId,
};

/// Plan service implementing the workout plan driving ports.
#[derive(Clone)]
pub struct WorkoutPlanService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> WorkoutPlanService<R> {
    /// Create a new service over `repo`, stamping plans with `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_validation_error(error: PlanValidationError) -> Error {
    Error::invalid_request(error.to_string())
        .with_details(json!({ "field": error.field(), "code": error.code() }))
}

fn map_repository_error(error: WorkoutPlanRepositoryError) -> Error {
    match error {
        WorkoutPlanRepositoryError::UnknownOwner { user_id } => {
            user_not_found(UserId::new(user_id))
        }
        WorkoutPlanRepositoryError::UnknownWorkout { workout_id } => {
            workout_not_found(WorkoutId::new(workout_id))
        }
        WorkoutPlanRepositoryError::Query { message } => {
            Error::internal(format!("workout plan repository error: {message}"))
        }
    }
}

fn plan_not_found(id: WorkoutPlanId) -> Error {
    Error::not_found(format!("workout plan {id} not found"))
}

fn parse_details(draft: PlanDetailsDraft) -> Result<PlanDetails, Error> {
    PlanDetails::try_from(draft).map_err(map_validation_error)
}

#[async_trait]
impl<R> WorkoutPlansCommand for WorkoutPlanService<R>
where
    R: WorkoutPlanRepository,
{
    async fn create_plan(&self, request: CreateWorkoutPlanRequest) -> Result<WorkoutPlan, Error> {
        let CreateWorkoutPlanRequest { user_id, details } = request;
        let details = parse_details(details)?;

        let plan = self
            .repo
            .insert(WorkoutPlanDraft {
                user_id,
                details,
                created_at: self.clock.utc(),
            })
            .await
            .map_err(map_repository_error)?;

        info!(plan_id = %plan.id(), user_id = %user_id, "workout plan created");
        Ok(plan)
    }

    async fn update_plan(
        &self,
        id: WorkoutPlanId,
        details: PlanDetailsDraft,
    ) -> Result<WorkoutPlan, Error> {
        let details = parse_details(details)?;
        let plan = self
            .repo
            .update(id, details)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| plan_not_found(id))?;

        info!(plan_id = %id, "workout plan updated");
        Ok(plan)
    }

    async fn delete_plan(&self, id: WorkoutPlanId) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !removed {
            return Err(plan_not_found(id));
        }
        info!(plan_id = %id, "workout plan deleted");
        Ok(())
    }

    async fn add_workout(
        &self,
        id: WorkoutPlanId,
        workout: WorkoutId,
    ) -> Result<WorkoutPlan, Error> {
        let plan = self
            .repo
            .add_workout(id, workout)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| plan_not_found(id))?;

        info!(plan_id = %id, workout_id = %workout, "workout added to plan");
        Ok(plan)
    }

    async fn remove_workout(
        &self,
        id: WorkoutPlanId,
        workout: WorkoutId,
    ) -> Result<WorkoutPlan, Error> {
        let plan = self
            .repo
            .remove_workout(id, workout)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| plan_not_found(id))?;

        info!(plan_id = %id, workout_id = %workout, "workout removed from plan");
        Ok(plan)
    }
}

#[async_trait]
impl<R> WorkoutPlansQuery for WorkoutPlanService<R>
where
    R: WorkoutPlanRepository,
{
    async fn get_plan(&self, id: WorkoutPlanId) -> Result<WorkoutPlan, Error> {
        debug!(plan_id = %id, "fetching workout plan");
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| plan_not_found(id))
    }

    async fn list_plans(&self, user_id: Option<UserId>) -> Result<Vec<WorkoutPlan>, Error> {
        match user_id {
            Some(user_id) => self.repo.list_by_owner(user_id).await,
            None => self.repo.list().await,
        }
        .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "workout_plan_service_tests.rs"]
mod tests;
