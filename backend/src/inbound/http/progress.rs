//! Progress log handlers.
//!
//! ```text
//! POST /progress/logs {"user_id":1,"log_date":"2024-03-01","weight_kg":82.5}
//! GET /progress/logs?user_id=1&from_date=2024-03-01&to_date=2024-03-31
//! GET /progress/logs/{id}
//! DELETE /progress/logs/{id}
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpResponse, delete, get, http::header, post, web};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{ListProgressRequest, RecordProgressRequest};
use crate::domain::{Error, ProgressEntryDraft, ProgressLog, ProgressLogId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for `POST /progress/logs`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RecordProgressBody {
    #[schema(example = 1)]
    pub user_id: u64,
    #[schema(example = "2024-03-01")]
    pub log_date: NaiveDate,
    #[schema(example = 82.5)]
    pub weight_kg: Option<f64>,
    #[schema(minimum = 0, maximum = 100)]
    pub body_fat_percentage: Option<f64>,
    pub notes: Option<String>,
    /// Named body measurements, e.g. `{"waist": 81.0}`.
    #[serde(default)]
    pub measurements: BTreeMap<String, f64>,
}

impl From<RecordProgressBody> for RecordProgressRequest {
    fn from(body: RecordProgressBody) -> Self {
        let RecordProgressBody {
            user_id,
            log_date,
            weight_kg,
            body_fat_percentage,
            notes,
            measurements,
        } = body;
        Self {
            user_id: UserId::new(user_id),
            entry: ProgressEntryDraft {
                log_date,
                weight_kg,
                body_fat_percentage,
                notes,
                measurements,
            },
        }
    }
}

/// Progress log returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ProgressLogResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1)]
    pub user_id: u64,
    pub log_date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub notes: Option<String>,
    pub measurements: BTreeMap<String, f64>,
    pub created_at: DateTime<Utc>,
}

impl From<ProgressLog> for ProgressLogResponse {
    fn from(log: ProgressLog) -> Self {
        let entry = log.entry();
        Self {
            id: log.id().get(),
            user_id: log.user_id().get(),
            log_date: entry.log_date(),
            weight_kg: entry.weight_kg(),
            body_fat_percentage: entry.body_fat_percentage(),
            notes: entry.notes().map(str::to_owned),
            measurements: entry.measurements().clone(),
            created_at: log.created_at(),
        }
    }
}

/// Filters accepted by `GET /progress/logs`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProgressQuery {
    /// Owner of the logs. The user must exist.
    pub user_id: u64,
    /// Earliest log date to include.
    pub from_date: Option<NaiveDate>,
    /// Latest log date to include.
    pub to_date: Option<NaiveDate>,
}

impl From<ListProgressQuery> for ListProgressRequest {
    fn from(query: ListProgressQuery) -> Self {
        Self {
            user_id: UserId::new(query.user_id),
            from_date: query.from_date,
            to_date: query.to_date,
        }
    }
}

/// Record body metrics for an existing user.
#[utoipa::path(
    post,
    path = "/progress/logs",
    request_body = RecordProgressBody,
    responses(
        (status = 201, description = "Log recorded", body = ProgressLogResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["progress"],
    operation_id = "recordProgress"
)]
#[post("/progress/logs")]
pub async fn record_progress(
    state: web::Data<HttpState>,
    payload: web::Json<RecordProgressBody>,
) -> ApiResult<HttpResponse> {
    let log = state
        .progress
        .record_progress(payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/progress/logs/{}", log.id())))
        .json(ProgressLogResponse::from(log)))
}

/// List a user's logs ordered by log date, optionally within a date window.
#[utoipa::path(
    get,
    path = "/progress/logs",
    params(ListProgressQuery),
    responses(
        (status = 200, description = "Logs ordered by date", body = [ProgressLogResponse]),
        (status = 400, description = "Invalid query or inverted window", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["progress"],
    operation_id = "listProgress"
)]
#[get("/progress/logs")]
pub async fn list_progress(
    state: web::Data<HttpState>,
    query: web::Query<ListProgressQuery>,
) -> ApiResult<web::Json<Vec<ProgressLogResponse>>> {
    let logs = state
        .progress_query
        .list_progress(query.into_inner().into())
        .await?;
    Ok(web::Json(
        logs.into_iter().map(ProgressLogResponse::from).collect(),
    ))
}

/// Fetch one log.
#[utoipa::path(
    get,
    path = "/progress/logs/{id}",
    params(("id" = u64, Path, description = "Progress log identifier")),
    responses(
        (status = 200, description = "Log", body = ProgressLogResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown log", body = Error)
    ),
    tags = ["progress"],
    operation_id = "getProgress"
)]
#[get("/progress/logs/{id}")]
pub async fn get_progress(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<ProgressLogResponse>> {
    let log = state
        .progress_query
        .get_progress(ProgressLogId::new(path.into_inner()))
        .await?;
    Ok(web::Json(ProgressLogResponse::from(log)))
}

/// Delete a log.
#[utoipa::path(
    delete,
    path = "/progress/logs/{id}",
    params(("id" = u64, Path, description = "Progress log identifier")),
    responses(
        (status = 204, description = "Log deleted"),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown log", body = Error)
    ),
    tags = ["progress"],
    operation_id = "deleteProgress"
)]
#[delete("/progress/logs/{id}")]
pub async fn delete_progress(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state
        .progress
        .delete_progress(ProgressLogId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
