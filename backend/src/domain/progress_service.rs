//! Progress log service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    ListProgressRequest, ProgressCommand, ProgressLogRepository, ProgressLogRepositoryError,
    ProgressQuery, RecordProgressRequest,
};
use crate::domain::user_service::user_not_found;
use crate::domain::{
    DateRange, Error, ProgressEntry, ProgressLog, ProgressLogDraft, ProgressLogId,
    ProgressValidationError, UserId,
};

/// Progress service implementing the progress driving ports.
#[derive(Clone)]
pub struct ProgressService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ProgressService<R> {
    /// Create a new service over `repo`, stamping logs with `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_validation_error(error: &ProgressValidationError) -> Error {
    Error::invalid_request(error.to_string())
        .with_details(json!({ "field": error.field(), "code": error.code() }))
}

fn map_repository_error(error: ProgressLogRepositoryError) -> Error {
    match error {
        ProgressLogRepositoryError::UnknownOwner { user_id } => {
            user_not_found(UserId::new(user_id))
        }
        ProgressLogRepositoryError::Query { message } => {
            Error::internal(format!("progress log repository error: {message}"))
        }
    }
}

fn log_not_found(id: ProgressLogId) -> Error {
    Error::not_found(format!("progress log {id} not found"))
}

#[async_trait]
impl<R> ProgressCommand for ProgressService<R>
where
    R: ProgressLogRepository,
{
    async fn record_progress(&self, request: RecordProgressRequest) -> Result<ProgressLog, Error> {
        let RecordProgressRequest { user_id, entry } = request;
        let entry = ProgressEntry::try_from(entry).map_err(|err| map_validation_error(&err))?;

        let log = self
            .repo
            .insert(ProgressLogDraft {
                user_id,
                entry,
                created_at: self.clock.utc(),
            })
            .await
            .map_err(map_repository_error)?;

        info!(
            log_id = %log.id(),
            user_id = %user_id,
            log_date = %log.entry().log_date(),
            "progress recorded"
        );
        Ok(log)
    }

    async fn delete_progress(&self, id: ProgressLogId) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !removed {
            return Err(log_not_found(id));
        }
        info!(log_id = %id, "progress log deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ProgressQuery for ProgressService<R>
where
    R: ProgressLogRepository,
{
    async fn get_progress(&self, id: ProgressLogId) -> Result<ProgressLog, Error> {
        debug!(log_id = %id, "fetching progress log");
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| log_not_found(id))
    }

    async fn list_progress(&self, request: ListProgressRequest) -> Result<Vec<ProgressLog>, Error> {
        let ListProgressRequest {
            user_id,
            from_date,
            to_date,
        } = request;
        let range = DateRange::new(from_date, to_date).map_err(|err| map_validation_error(&err))?;

        let logs = self
            .repo
            .list_by_owner(user_id)
            .await
            .map_err(map_repository_error)?;
        Ok(logs
            .into_iter()
            .filter(|log| range.contains(log.entry().log_date()))
            .collect())
    }
}

#[cfg(test)]
#[path = "progress_service_tests.rs"]
mod tests;
