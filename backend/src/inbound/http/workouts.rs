//! Workout HTTP handlers.
//!
//! ```text
//! POST /workouts {"user_id":1,"exercises":[{"name":"squat","sets":3,"reps":5}]}
//! GET /workouts?user_id=1&category=strength
//! GET /workouts/{id}
//! PUT|PATCH /workouts/{id}
//! DELETE /workouts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, http::header, post, route, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{CreateWorkoutRequest, ListWorkoutsRequest, UpdateWorkoutRequest};
use crate::domain::{Error, Exercise, ExerciseDraft, UserId, Workout, WorkoutCategory, WorkoutId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Exercise entry within a workout payload.
///
/// `sets`, `reps` and `duration_seconds` are signed so out-of-range values are
/// reported by validation rather than by JSON decoding.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ExerciseBody {
    #[schema(example = "squat")]
    pub name: String,
    #[schema(example = 3, minimum = 1)]
    pub sets: i64,
    #[schema(example = 5, minimum = 1)]
    pub reps: i64,
    #[schema(example = 100.0, minimum = 0)]
    pub weight_kg: Option<f64>,
    #[schema(minimum = 1)]
    pub duration_seconds: Option<i64>,
}

impl From<ExerciseBody> for ExerciseDraft {
    fn from(body: ExerciseBody) -> Self {
        let ExerciseBody {
            name,
            sets,
            reps,
            weight_kg,
            duration_seconds,
        } = body;
        Self {
            name,
            sets,
            reps,
            weight_kg,
            duration_seconds,
        }
    }
}

/// Request payload for `POST /workouts`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateWorkoutBody {
    #[schema(example = 1)]
    pub user_id: u64,
    pub exercises: Vec<ExerciseBody>,
    pub category: Option<WorkoutCategory>,
    pub notes: Option<String>,
}

/// Request payload for `PUT`/`PATCH /workouts/{id}`.
///
/// The exercise list replaces the stored one. Omitted `category` or `notes`
/// keep their current value.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateWorkoutBody {
    pub exercises: Vec<ExerciseBody>,
    pub category: Option<WorkoutCategory>,
    pub notes: Option<String>,
}

/// Exercise as stored on a workout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ExerciseResponse {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: Option<f64>,
    pub duration_seconds: Option<u32>,
}

impl From<&Exercise> for ExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name().to_owned(),
            sets: exercise.sets(),
            reps: exercise.reps(),
            weight_kg: exercise.weight_kg(),
            duration_seconds: exercise.duration_seconds(),
        }
    }
}

/// Workout representation returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct WorkoutResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1)]
    pub user_id: u64,
    pub exercises: Vec<ExerciseResponse>,
    pub category: Option<WorkoutCategory>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id().get(),
            user_id: workout.user_id().get(),
            exercises: workout.exercises().iter().map(ExerciseResponse::from).collect(),
            category: workout.category(),
            notes: workout.notes().map(str::to_owned),
            created_at: workout.created_at(),
            updated_at: workout.updated_at(),
        }
    }
}

/// Filters accepted by `GET /workouts`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWorkoutsQuery {
    /// Only workouts owned by this user. The user must exist.
    pub user_id: Option<u64>,
    /// Only workouts in this category.
    pub category: Option<WorkoutCategory>,
}

impl From<ListWorkoutsQuery> for ListWorkoutsRequest {
    fn from(query: ListWorkoutsQuery) -> Self {
        Self {
            user_id: query.user_id.map(UserId::new),
            category: query.category,
        }
    }
}

fn into_drafts(exercises: Vec<ExerciseBody>) -> Vec<ExerciseDraft> {
    exercises.into_iter().map(ExerciseDraft::from).collect()
}

/// Record a workout for an existing user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use fitness_backend::inbound::http::workouts::create_workout;
///
/// let app = App::new().service(create_workout);
/// ```
#[utoipa::path(
    post,
    path = "/workouts",
    request_body = CreateWorkoutBody,
    responses(
        (status = 201, description = "Workout recorded", body = WorkoutResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["workouts"],
    operation_id = "createWorkout"
)]
#[post("/workouts")]
pub async fn create_workout(
    state: web::Data<HttpState>,
    payload: web::Json<CreateWorkoutBody>,
) -> ApiResult<HttpResponse> {
    let CreateWorkoutBody {
        user_id,
        exercises,
        category,
        notes,
    } = payload.into_inner();
    let workout = state
        .workouts
        .create_workout(CreateWorkoutRequest {
            user_id: UserId::new(user_id),
            exercises: into_drafts(exercises),
            category,
            notes,
        })
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/workouts/{}", workout.id())))
        .json(WorkoutResponse::from(workout)))
}

/// List workouts, optionally for one user and one category.
#[utoipa::path(
    get,
    path = "/workouts",
    params(ListWorkoutsQuery),
    responses(
        (status = 200, description = "Workouts ordered by identifier", body = [WorkoutResponse]),
        (status = 400, description = "Invalid query", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["workouts"],
    operation_id = "listWorkouts"
)]
#[get("/workouts")]
pub async fn list_workouts(
    state: web::Data<HttpState>,
    query: web::Query<ListWorkoutsQuery>,
) -> ApiResult<web::Json<Vec<WorkoutResponse>>> {
    let workouts = state
        .workouts_query
        .list_workouts(ListWorkoutsRequest::from(query.into_inner()))
        .await?;
    Ok(web::Json(
        workouts.into_iter().map(WorkoutResponse::from).collect(),
    ))
}

/// Fetch one workout. Workouts of deleted users are still returned.
#[utoipa::path(
    get,
    path = "/workouts/{id}",
    params(("id" = u64, Path, description = "Workout identifier")),
    responses(
        (status = 200, description = "Workout", body = WorkoutResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown workout", body = Error)
    ),
    tags = ["workouts"],
    operation_id = "getWorkout"
)]
#[get("/workouts/{id}")]
pub async fn get_workout(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<WorkoutResponse>> {
    let workout = state
        .workouts_query
        .get_workout(WorkoutId::new(path.into_inner()))
        .await?;
    Ok(web::Json(WorkoutResponse::from(workout)))
}

/// Replace a workout's exercises. `PUT` and `PATCH` behave the same.
#[utoipa::path(
    method(put, patch),
    path = "/workouts/{id}",
    params(("id" = u64, Path, description = "Workout identifier")),
    request_body = UpdateWorkoutBody,
    responses(
        (status = 200, description = "Updated workout", body = WorkoutResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown workout", body = Error)
    ),
    tags = ["workouts"],
    operation_id = "updateWorkout"
)]
#[route("/workouts/{id}", method = "PUT", method = "PATCH")]
pub async fn update_workout(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateWorkoutBody>,
) -> ApiResult<web::Json<WorkoutResponse>> {
    let UpdateWorkoutBody {
        exercises,
        category,
        notes,
    } = payload.into_inner();
    let workout = state
        .workouts
        .update_workout(UpdateWorkoutRequest {
            id: WorkoutId::new(path.into_inner()),
            exercises: into_drafts(exercises),
            category,
            notes,
        })
        .await?;
    Ok(web::Json(WorkoutResponse::from(workout)))
}

/// Delete a workout.
#[utoipa::path(
    delete,
    path = "/workouts/{id}",
    params(("id" = u64, Path, description = "Workout identifier")),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown workout", body = Error)
    ),
    tags = ["workouts"],
    operation_id = "deleteWorkout"
)]
#[delete("/workouts/{id}")]
pub async fn delete_workout(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state
        .workouts
        .delete_workout(WorkoutId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "workouts_tests.rs"]
mod tests;
