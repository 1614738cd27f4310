//! Users API handlers.
//!
//! ```text
//! POST /users {"name":"Ada","email":"ada@example.com"}
//! GET /users
//! GET /users/{id}
//! PUT|PATCH /users/{id} {"is_active":false}
//! DELETE /users/{id}
//! GET /users/{id}/stats
//! ```

use actix_web::{HttpResponse, delete, get, http::header, post, route, web};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{RegisterUserRequest, UpdateUserRequest};
use crate::domain::{Error, TrainingStats, User, UserId, WorkoutCategory};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Registration payload for `POST /users`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RegisterUserBody {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Partial update payload for `PUT`/`PATCH /users/{id}`. Omitted fields keep
/// their current value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

/// User representation returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            is_active: user.is_active(),
            created_at: user.created_at(),
        }
    }
}

/// Training summary returned by `GET /users/{id}/stats`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct TrainingStatsResponse {
    pub user_id: u64,
    pub workout_count: u64,
    pub exercise_count: u64,
    pub total_sets: u64,
    pub total_reps: u64,
    pub total_volume_kg: f64,
    pub total_duration_seconds: u64,
    pub top_category: Option<WorkoutCategory>,
    /// UTC date of the most recent workout.
    pub last_workout_date: Option<NaiveDate>,
    /// Consecutive training days ending at `last_workout_date`.
    pub streak_days: u32,
}

impl TrainingStatsResponse {
    fn new(user_id: UserId, stats: TrainingStats) -> Self {
        let TrainingStats {
            workout_count,
            exercise_count,
            total_sets,
            total_reps,
            total_volume_kg,
            total_duration_seconds,
            top_category,
            last_workout_date,
            streak_days,
        } = stats;
        Self {
            user_id: user_id.get(),
            workout_count,
            exercise_count,
            total_sets,
            total_reps,
            total_volume_kg,
            total_duration_seconds,
            top_category,
            last_workout_date,
            streak_days,
        }
    }
}

/// Register a user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use fitness_backend::inbound::http::users::register_user;
///
/// let app = App::new().service(register_user);
/// ```
#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterUserBody,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserBody>,
) -> ApiResult<HttpResponse> {
    let RegisterUserBody { name, email } = payload.into_inner();
    let user = state
        .users
        .register_user(RegisterUserRequest { name, email })
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/users/{}", user.id())))
        .json(UserResponse::from(user)))
}

/// List every registered user ordered by identifier.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users_query
        .get_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Update name, email or active flag. `PUT` and `PATCH` behave the same.
#[utoipa::path(
    method(put, patch),
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 409, description = "Email already registered", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[route("/users/{id}", method = "PUT", method = "PATCH")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let UpdateUserBody {
        name,
        email,
        is_active,
    } = payload.into_inner();
    let user = state
        .users
        .update_user(UpdateUserRequest {
            id: UserId::new(path.into_inner()),
            name,
            email,
            is_active,
        })
        .await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Delete a user. Their workouts remain retrievable by identifier.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state.users.delete_user(UserId::new(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Summarise a user's training.
#[utoipa::path(
    get,
    path = "/users/{id}/stats",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Training summary", body = TrainingStatsResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "userStats"
)]
#[get("/users/{id}/stats")]
pub async fn user_stats(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<TrainingStatsResponse>> {
    let user_id = UserId::new(path.into_inner());
    let stats = state.workouts_query.training_stats(user_id).await?;
    Ok(web::Json(TrainingStatsResponse::new(user_id, stats)))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
