//! Driving port for workout mutations.

use async_trait::async_trait;

use crate::domain::{Error, ExerciseDraft, UserId, Workout, WorkoutCategory, WorkoutId};

/// Request to record a workout for an existing user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateWorkoutRequest {
    pub user_id: UserId,
    pub exercises: Vec<ExerciseDraft>,
    pub category: Option<WorkoutCategory>,
    pub notes: Option<String>,
}

/// Request to replace a workout's exercises.
///
/// `category` and `notes` are only changed when supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkoutRequest {
    pub id: WorkoutId,
    pub exercises: Vec<ExerciseDraft>,
    pub category: Option<WorkoutCategory>,
    pub notes: Option<String>,
}

/// Domain use-case port for workout writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkoutsCommand: Send + Sync {
    /// Record a workout.
    ///
    /// Fails with `not_found` when the owner does not exist and
    /// `invalid_request` when the exercises are empty or malformed.
    async fn create_workout(&self, request: CreateWorkoutRequest) -> Result<Workout, Error>;

    /// Replace the exercise list of an existing workout.
    async fn update_workout(&self, request: UpdateWorkoutRequest) -> Result<Workout, Error>;

    /// Delete a workout.
    async fn delete_workout(&self, id: WorkoutId) -> Result<(), Error>;
}
