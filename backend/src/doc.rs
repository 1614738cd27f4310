//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers every handler from the
//! inbound layer (info, health, users, workouts, exercises, plans and
//! progress) together with the request, response and error schemas they
//! reference.
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, MuscleGroup, WorkoutCategory};
use crate::inbound::http::catalogue::{CatalogueExerciseBody, CatalogueExerciseResponse};
use crate::inbound::http::info::{ApiInfo, InfoResponse};
use crate::inbound::http::plans::{CreateWorkoutPlanBody, PlanDetailsBody, WorkoutPlanResponse};
use crate::inbound::http::progress::{ProgressLogResponse, RecordProgressBody};
use crate::inbound::http::users::{
    RegisterUserBody, TrainingStatsResponse, UpdateUserBody, UserResponse,
};
use crate::inbound::http::workouts::{
    CreateWorkoutBody, ExerciseBody, ExerciseResponse, UpdateWorkoutBody, WorkoutResponse,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fitness tracker API",
        description = "In-memory HTTP interface for users, workouts, training summaries, the \
            exercise catalogue, workout plans and progress logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::info::api_info,
        crate::inbound::http::health::healthz,
        crate::inbound::http::health::ready,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::user_stats,
        crate::inbound::http::workouts::create_workout,
        crate::inbound::http::workouts::list_workouts,
        crate::inbound::http::workouts::get_workout,
        crate::inbound::http::workouts::update_workout,
        crate::inbound::http::workouts::delete_workout,
        crate::inbound::http::catalogue::create_exercise,
        crate::inbound::http::catalogue::list_exercises,
        crate::inbound::http::catalogue::exercises_by_muscle_group,
        crate::inbound::http::catalogue::get_exercise,
        crate::inbound::http::catalogue::update_exercise,
        crate::inbound::http::catalogue::delete_exercise,
        crate::inbound::http::plans::create_plan,
        crate::inbound::http::plans::list_plans,
        crate::inbound::http::plans::get_plan,
        crate::inbound::http::plans::update_plan,
        crate::inbound::http::plans::delete_plan,
        crate::inbound::http::plans::add_plan_workout,
        crate::inbound::http::plans::remove_plan_workout,
        crate::inbound::http::progress::record_progress,
        crate::inbound::http::progress::list_progress,
        crate::inbound::http::progress::get_progress,
        crate::inbound::http::progress::delete_progress,
    ),
    components(schemas(
        Error,
        ErrorCode,
        WorkoutCategory,
        ApiInfo,
        InfoResponse,
        RegisterUserBody,
        UpdateUserBody,
        UserResponse,
        TrainingStatsResponse,
        ExerciseBody,
        CreateWorkoutBody,
        UpdateWorkoutBody,
        ExerciseResponse,
        WorkoutResponse,
        MuscleGroup,
        CatalogueExerciseBody,
        CatalogueExerciseResponse,
        PlanDetailsBody,
        CreateWorkoutPlanBody,
        WorkoutPlanResponse,
        RecordProgressBody,
        ProgressLogResponse,
    )),
    tags(
        (name = "info", description = "API metadata"),
        (name = "users", description = "User registration and management"),
        (name = "workouts", description = "Workout recording"),
        (name = "exercises", description = "Exercise catalogue"),
        (name = "workout-plans", description = "Workout plans"),
        (name = "progress", description = "Body progress logs"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
