//! Exercise catalogue handlers.
//!
//! ```text
//! POST /exercises {"name":"Back squat","muscle_groups":["legs","core"]}
//! GET /exercises?muscle_group=legs
//! GET /exercises/muscle-group/{muscle_group}
//! GET /exercises/{id}
//! PUT|PATCH /exercises/{id}
//! DELETE /exercises/{id}
//! ```

use actix_web::{HttpResponse, delete, get, http::header, post, route, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::CatalogueExerciseRequest;
use crate::domain::{CatalogueExercise, CatalogueExerciseId, Error, MuscleGroup};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Payload for creating or replacing a catalogue entry.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CatalogueExerciseBody {
    #[schema(example = "Back squat")]
    pub name: String,
    pub description: Option<String>,
    pub muscle_groups: Vec<MuscleGroup>,
    #[schema(example = "barbell")]
    pub equipment_needed: Option<String>,
}

impl From<CatalogueExerciseBody> for CatalogueExerciseRequest {
    fn from(body: CatalogueExerciseBody) -> Self {
        let CatalogueExerciseBody {
            name,
            description,
            muscle_groups,
            equipment_needed,
        } = body;
        Self {
            name,
            description,
            muscle_groups,
            equipment_needed,
        }
    }
}

/// Catalogue entry returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CatalogueExerciseResponse {
    #[schema(example = 1)]
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub muscle_groups: Vec<MuscleGroup>,
    pub equipment_needed: Option<String>,
}

impl From<CatalogueExercise> for CatalogueExerciseResponse {
    fn from(exercise: CatalogueExercise) -> Self {
        let entry = exercise.entry();
        Self {
            id: exercise.id().get(),
            name: entry.name().to_owned(),
            description: entry.description().map(str::to_owned),
            muscle_groups: entry.muscle_groups().to_vec(),
            equipment_needed: entry.equipment_needed().map(str::to_owned),
        }
    }
}

/// Filter accepted by `GET /exercises`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCatalogueQuery {
    /// Only entries training this muscle group.
    pub muscle_group: Option<MuscleGroup>,
}

fn into_responses(exercises: Vec<CatalogueExercise>) -> Vec<CatalogueExerciseResponse> {
    exercises
        .into_iter()
        .map(CatalogueExerciseResponse::from)
        .collect()
}

/// Add an entry to the catalogue.
#[utoipa::path(
    post,
    path = "/exercises",
    request_body = CatalogueExerciseBody,
    responses(
        (status = 201, description = "Entry created", body = CatalogueExerciseResponse),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "createExercise"
)]
#[post("/exercises")]
pub async fn create_exercise(
    state: web::Data<HttpState>,
    payload: web::Json<CatalogueExerciseBody>,
) -> ApiResult<HttpResponse> {
    let exercise = state
        .catalogue
        .create_exercise(payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/exercises/{}", exercise.id())))
        .json(CatalogueExerciseResponse::from(exercise)))
}

/// List catalogue entries, optionally for one muscle group.
#[utoipa::path(
    get,
    path = "/exercises",
    params(ListCatalogueQuery),
    responses(
        (status = 200, description = "Entries by identifier", body = [CatalogueExerciseResponse]),
        (status = 400, description = "Invalid query", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "listExercises"
)]
#[get("/exercises")]
pub async fn list_exercises(
    state: web::Data<HttpState>,
    query: web::Query<ListCatalogueQuery>,
) -> ApiResult<web::Json<Vec<CatalogueExerciseResponse>>> {
    let exercises = state
        .catalogue_query
        .list_exercises(query.into_inner().muscle_group)
        .await?;
    Ok(web::Json(into_responses(exercises)))
}

/// List catalogue entries training one muscle group.
#[utoipa::path(
    get,
    path = "/exercises/muscle-group/{muscle_group}",
    params(("muscle_group" = MuscleGroup, Path, description = "Muscle group")),
    responses(
        (status = 200, description = "Matching entries", body = [CatalogueExerciseResponse]),
        (status = 400, description = "Unknown muscle group", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "listExercisesByMuscleGroup"
)]
#[get("/exercises/muscle-group/{muscle_group}")]
pub async fn exercises_by_muscle_group(
    state: web::Data<HttpState>,
    path: web::Path<MuscleGroup>,
) -> ApiResult<web::Json<Vec<CatalogueExerciseResponse>>> {
    let exercises = state
        .catalogue_query
        .list_exercises(Some(path.into_inner()))
        .await?;
    Ok(web::Json(into_responses(exercises)))
}

/// Fetch one catalogue entry.
#[utoipa::path(
    get,
    path = "/exercises/{id}",
    params(("id" = u64, Path, description = "Catalogue entry identifier")),
    responses(
        (status = 200, description = "Entry", body = CatalogueExerciseResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown entry", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "getExercise"
)]
#[get("/exercises/{id}")]
pub async fn get_exercise(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<CatalogueExerciseResponse>> {
    let exercise = state
        .catalogue_query
        .get_exercise(CatalogueExerciseId::new(path.into_inner()))
        .await?;
    Ok(web::Json(CatalogueExerciseResponse::from(exercise)))
}

/// Replace a catalogue entry. `PUT` and `PATCH` behave the same.
#[utoipa::path(
    method(put, patch),
    path = "/exercises/{id}",
    params(("id" = u64, Path, description = "Catalogue entry identifier")),
    request_body = CatalogueExerciseBody,
    responses(
        (status = 200, description = "Updated entry", body = CatalogueExerciseResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown entry", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "updateExercise"
)]
#[route("/exercises/{id}", method = "PUT", method = "PATCH")]
pub async fn update_exercise(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<CatalogueExerciseBody>,
) -> ApiResult<web::Json<CatalogueExerciseResponse>> {
    let exercise = state
        .catalogue
        .update_exercise(
            CatalogueExerciseId::new(path.into_inner()),
            payload.into_inner().into(),
        )
        .await?;
    Ok(web::Json(CatalogueExerciseResponse::from(exercise)))
}

/// Remove a catalogue entry. Workouts are unaffected.
#[utoipa::path(
    delete,
    path = "/exercises/{id}",
    params(("id" = u64, Path, description = "Catalogue entry identifier")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown entry", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "deleteExercise"
)]
#[delete("/exercises/{id}")]
pub async fn delete_exercise(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state
        .catalogue
        .delete_exercise(CatalogueExerciseId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "catalogue_tests.rs"]
mod tests;
