//! Workout plan handlers.
//!
//! ```text
//! POST /workout-plans {"user_id":1,"name":"Base","duration_weeks":8,"difficulty_level":2}
//! GET /workout-plans?user_id=1
//! GET /workout-plans/{id}
//! PUT|PATCH /workout-plans/{id}
//! DELETE /workout-plans/{id}
//! POST /workout-plans/{id}/workouts/{workout_id}
//! DELETE /workout-plans/{id}/workouts/{workout_id}
//! ```

use actix_web::{HttpResponse, delete, get, http::header, post, route, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::CreateWorkoutPlanRequest;
use crate::domain::{
    Error, MuscleGroup, PlanDetailsDraft, UserId, WorkoutId, WorkoutPlan, WorkoutPlanId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Plan fields shared by create and replace.
///
/// Numbers are signed so out-of-range values are reported by validation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PlanDetailsBody {
    #[schema(example = "Base building")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 8, minimum = 1, maximum = 104)]
    pub duration_weeks: i64,
    #[serde(default)]
    pub target_muscle_groups: Vec<MuscleGroup>,
    #[schema(example = 2, minimum = 1, maximum = 5)]
    pub difficulty_level: i64,
}

impl From<PlanDetailsBody> for PlanDetailsDraft {
    fn from(body: PlanDetailsBody) -> Self {
        let PlanDetailsBody {
            name,
            description,
            duration_weeks,
            target_muscle_groups,
            difficulty_level,
        } = body;
        Self {
            name,
            description,
            duration_weeks,
            target_muscle_groups,
            difficulty_level,
        }
    }
}

/// Request payload for `POST /workout-plans`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateWorkoutPlanBody {
    #[schema(example = 1)]
    pub user_id: u64,
    #[serde(flatten)]
    pub details: PlanDetailsBody,
}

/// Plan representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct WorkoutPlanResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1)]
    pub user_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub duration_weeks: u32,
    pub target_muscle_groups: Vec<MuscleGroup>,
    pub difficulty_level: u8,
    /// Workout identifiers in the order they were added.
    pub workouts: Vec<u64>,
    pub created_at: DateTime<Utc>,
}

impl From<WorkoutPlan> for WorkoutPlanResponse {
    fn from(plan: WorkoutPlan) -> Self {
        let details = plan.details();
        Self {
            id: plan.id().get(),
            user_id: plan.user_id().get(),
            name: details.name().to_owned(),
            description: details.description().map(str::to_owned),
            duration_weeks: details.duration_weeks(),
            target_muscle_groups: details.target_muscle_groups().to_vec(),
            difficulty_level: details.difficulty_level(),
            workouts: plan.workouts().iter().map(|id| id.get()).collect(),
            created_at: plan.created_at(),
        }
    }
}

/// Filter accepted by `GET /workout-plans`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWorkoutPlansQuery {
    /// Only plans owned by this user. The user must exist.
    pub user_id: Option<u64>,
}

/// Create a plan for an existing user.
#[utoipa::path(
    post,
    path = "/workout-plans",
    request_body = CreateWorkoutPlanBody,
    responses(
        (status = 201, description = "Plan created", body = WorkoutPlanResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["workout-plans"],
    operation_id = "createWorkoutPlan"
)]
#[post("/workout-plans")]
pub async fn create_plan(
    state: web::Data<HttpState>,
    payload: web::Json<CreateWorkoutPlanBody>,
) -> ApiResult<HttpResponse> {
    let CreateWorkoutPlanBody { user_id, details } = payload.into_inner();
    let plan = state
        .plans
        .create_plan(CreateWorkoutPlanRequest {
            user_id: UserId::new(user_id),
            details: details.into(),
        })
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/workout-plans/{}", plan.id())))
        .json(WorkoutPlanResponse::from(plan)))
}

/// List plans, optionally for one user.
#[utoipa::path(
    get,
    path = "/workout-plans",
    params(ListWorkoutPlansQuery),
    responses(
        (status = 200, description = "Plans ordered by identifier", body = [WorkoutPlanResponse]),
        (status = 400, description = "Invalid query", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["workout-plans"],
    operation_id = "listWorkoutPlans"
)]
#[get("/workout-plans")]
pub async fn list_plans(
    state: web::Data<HttpState>,
    query: web::Query<ListWorkoutPlansQuery>,
) -> ApiResult<web::Json<Vec<WorkoutPlanResponse>>> {
    let plans = state
        .plans_query
        .list_plans(query.into_inner().user_id.map(UserId::new))
        .await?;
    Ok(web::Json(
        plans.into_iter().map(WorkoutPlanResponse::from).collect(),
    ))
}

/// Fetch one plan.
#[utoipa::path(
    get,
    path = "/workout-plans/{id}",
    params(("id" = u64, Path, description = "Plan identifier")),
    responses(
        (status = 200, description = "Plan", body = WorkoutPlanResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown plan", body = Error)
    ),
    tags = ["workout-plans"],
    operation_id = "getWorkoutPlan"
)]
#[get("/workout-plans/{id}")]
pub async fn get_plan(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<WorkoutPlanResponse>> {
    let plan = state
        .plans_query
        .get_plan(WorkoutPlanId::new(path.into_inner()))
        .await?;
    Ok(web::Json(WorkoutPlanResponse::from(plan)))
}

/// Replace a plan's details, keeping its workouts. `PUT` and `PATCH` behave
/// the same.
#[utoipa::path(
    method(put, patch),
    path = "/workout-plans/{id}",
    params(("id" = u64, Path, description = "Plan identifier")),
    request_body = PlanDetailsBody,
    responses(
        (status = 200, description = "Updated plan", body = WorkoutPlanResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown plan", body = Error)
    ),
    tags = ["workout-plans"],
    operation_id = "updateWorkoutPlan"
)]
#[route("/workout-plans/{id}", method = "PUT", method = "PATCH")]
pub async fn update_plan(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<PlanDetailsBody>,
) -> ApiResult<web::Json<WorkoutPlanResponse>> {
    let plan = state
        .plans
        .update_plan(
            WorkoutPlanId::new(path.into_inner()),
            payload.into_inner().into(),
        )
        .await?;
    Ok(web::Json(WorkoutPlanResponse::from(plan)))
}

/// Delete a plan. Its workouts are kept.
#[utoipa::path(
    delete,
    path = "/workout-plans/{id}",
    params(("id" = u64, Path, description = "Plan identifier")),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown plan", body = Error)
    ),
    tags = ["workout-plans"],
    operation_id = "deleteWorkoutPlan"
)]
#[delete("/workout-plans/{id}")]
pub async fn delete_plan(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state
        .plans
        .delete_plan(WorkoutPlanId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Attach an existing workout to a plan. Attaching twice is a no-op.
#[utoipa::path(
    post,
    path = "/workout-plans/{id}/workouts/{workout_id}",
    params(
        ("id" = u64, Path, description = "Plan identifier"),
        ("workout_id" = u64, Path, description = "Workout identifier")
    ),
    responses(
        (status = 200, description = "Updated plan", body = WorkoutPlanResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown plan or workout", body = Error)
    ),
    tags = ["workout-plans"],
    operation_id = "addWorkoutToPlan"
)]
#[post("/workout-plans/{id}/workouts/{workout_id}")]
pub async fn add_plan_workout(
    state: web::Data<HttpState>,
    path: web::Path<(u64, u64)>,
) -> ApiResult<web::Json<WorkoutPlanResponse>> {
    let (id, workout_id) = path.into_inner();
    let plan = state
        .plans
        .add_workout(WorkoutPlanId::new(id), WorkoutId::new(workout_id))
        .await?;
    Ok(web::Json(WorkoutPlanResponse::from(plan)))
}

/// Detach a workout from a plan. Detaching an unlisted workout is a no-op.
#[utoipa::path(
    delete,
    path = "/workout-plans/{id}/workouts/{workout_id}",
    params(
        ("id" = u64, Path, description = "Plan identifier"),
        ("workout_id" = u64, Path, description = "Workout identifier")
    ),
    responses(
        (status = 200, description = "Updated plan", body = WorkoutPlanResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown plan", body = Error)
    ),
    tags = ["workout-plans"],
    operation_id = "removeWorkoutFromPlan"
)]
#[delete("/workout-plans/{id}/workouts/{workout_id}")]
pub async fn remove_plan_workout(
    state: web::Data<HttpState>,
    path: web::Path<(u64, u64)>,
) -> ApiResult<web::Json<WorkoutPlanResponse>> {
    let (id, workout_id) = path.into_inner();
    let plan = state
        .plans
        .remove_workout(WorkoutPlanId::new(id), WorkoutId::new(workout_id))
        .await?;
    Ok(web::Json(WorkoutPlanResponse::from(plan)))
}

#[cfg(test)]
#[path = "plans_tests.rs"]
mod tests;
