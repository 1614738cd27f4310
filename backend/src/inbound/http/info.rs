//! Root endpoint describing the API.

use std::collections::BTreeMap;

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const APP_NAME: &str = "Fitness Tracker";
const DESCRIPTION: &str = "Record users, workouts, plans and progress in memory";

/// Build metadata reported by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiInfo {
    #[schema(example = "Fitness Tracker")]
    pub app_name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub description: String,
}

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub message: String,
    pub api_info: ApiInfo,
    /// Resource collections keyed by path segment.
    pub endpoints: BTreeMap<String, String>,
}

impl InfoResponse {
    fn current() -> Self {
        let endpoints = [
            ("users", "Register and manage users"),
            ("workouts", "Record and review workouts"),
            ("exercises", "Browse the exercise catalogue"),
            ("workout-plans", "Group workouts into plans"),
            ("progress", "Log body metrics over time"),
            ("healthz", "Liveness check"),
        ]
        .into_iter()
        .map(|(path, purpose)| (path.to_owned(), purpose.to_owned()))
        .collect();

        Self {
            message: format!("Welcome to the {APP_NAME} API!"),
            api_info: ApiInfo {
                app_name: APP_NAME.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                description: DESCRIPTION.to_owned(),
            },
            endpoints,
        }
    }
}

/// Describe the API and its resource collections.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "API information", body = InfoResponse)),
    tags = ["info"],
    operation_id = "apiInfo"
)]
#[get("/")]
pub async fn api_info() -> web::Json<InfoResponse> {
    web::Json(InfoResponse::current())
}
