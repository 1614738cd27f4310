//! Workout recording and training summary services.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use crate::domain::ports::{
    CreateWorkoutRequest, ListWorkoutsRequest, UpdateWorkoutRequest, WorkoutRepository,
    WorkoutRepositoryError, WorkoutsCommand, WorkoutsQuery,
};
use crate::domain::user_service::user_not_found;
use crate::domain::{
    Error, ExerciseDraft, ExerciseList, TrainingStats, UserId, Workout, WorkoutChanges,
    WorkoutDraft, WorkoutId, WorkoutNotes, WorkoutValidationError,
};

/// Workout service implementing the workout driving ports.
#[derive(Clone)]
pub struct WorkoutService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> WorkoutService<R> {
    /// Create a new service over `repo`, stamping records with `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_validation_error(error: &WorkoutValidationError) -> Error {
    let mut details = Map::new();
    details.insert("field".to_owned(), json!(error.field()));
    if let Some(index) = error.index() {
        details.insert("index".to_owned(), json!(index));
    }
    details.insert("code".to_owned(), json!(error.code()));
    Error::invalid_request(error.to_string()).with_details(Value::Object(details))
}

fn map_repository_error(error: WorkoutRepositoryError) -> Error {
    match error {
        WorkoutRepositoryError::UnknownOwner { user_id } => user_not_found(UserId::new(user_id)),
        WorkoutRepositoryError::Query { message } => {
            Error::internal(format!("workout repository error: {message}"))
        }
    }
}

pub(super) fn workout_not_found(id: WorkoutId) -> Error {
    Error::not_found(format!("workout {id} not found"))
}

fn parse_body(
    exercises: Vec<ExerciseDraft>,
    notes: Option<String>,
) -> Result<(ExerciseList, Option<WorkoutNotes>), Error> {
    let exercises = ExerciseList::new(exercises).map_err(|err| map_validation_error(&err))?;
    let notes = WorkoutNotes::parse(notes).map_err(|err| map_validation_error(&err))?;
    Ok((exercises, notes))
}

#[async_trait]
impl<R> WorkoutsCommand for WorkoutService<R>
where
    R: WorkoutRepository,
{
    async fn create_workout(&self, request: CreateWorkoutRequest) -> Result<Workout, Error> {
        let CreateWorkoutRequest {
            user_id,
            exercises,
            category,
            notes,
        } = request;
        let (exercises, notes) = parse_body(exercises, notes)?;

        let workout = self
            .repo
            .insert(WorkoutDraft {
                user_id,
                exercises,
                category,
                notes,
                created_at: self.clock.utc(),
            })
            .await
            .map_err(map_repository_error)?;

        info!(
            workout_id = %workout.id(),
            user_id = %user_id,
            exercises = workout.exercises().len(),
            "workout recorded"
        );
        Ok(workout)
    }

    async fn update_workout(&self, request: UpdateWorkoutRequest) -> Result<Workout, Error> {
        let UpdateWorkoutRequest {
            id,
            exercises,
            category,
            notes,
        } = request;
        let (exercises, notes) = parse_body(exercises, notes)?;

        let workout = self
            .repo
            .update(
                id,
                WorkoutChanges {
                    exercises,
                    category,
                    notes,
                    updated_at: self.clock.utc(),
                },
            )
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| workout_not_found(id))?;

        info!(workout_id = %id, "workout updated");
        Ok(workout)
    }

    async fn delete_workout(&self, id: WorkoutId) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !removed {
            return Err(workout_not_found(id));
        }
        info!(workout_id = %id, "workout deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> WorkoutsQuery for WorkoutService<R>
where
    R: WorkoutRepository,
{
    async fn get_workout(&self, id: WorkoutId) -> Result<Workout, Error> {
        debug!(workout_id = %id, "fetching workout");
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| workout_not_found(id))
    }

    async fn list_workouts(&self, request: ListWorkoutsRequest) -> Result<Vec<Workout>, Error> {
        let ListWorkoutsRequest { user_id, category } = request;
        let workouts = match user_id {
            Some(user_id) => self.repo.list_by_owner(user_id).await,
            None => self.repo.list().await,
        }
        .map_err(map_repository_error)?;

        Ok(match category {
            Some(category) => workouts
                .into_iter()
                .filter(|workout| workout.category() == Some(category))
                .collect(),
            None => workouts,
        })
    }

    async fn training_stats(&self, user_id: UserId) -> Result<TrainingStats, Error> {
        let workouts = self
            .repo
            .list_by_owner(user_id)
            .await
            .map_err(map_repository_error)?;
        Ok(TrainingStats::from_workouts(&workouts))
    }
}

#[cfg(test)]
#[path = "workout_service_tests.rs"]
mod tests;
