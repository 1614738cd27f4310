//! Exercise catalogue service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CatalogueCommand, CatalogueExerciseRequest, CatalogueQuery, CatalogueRepository,
    CatalogueRepositoryError,
};
use crate::domain::{
    CatalogueEntry, CatalogueExercise, CatalogueExerciseId, CatalogueValidationError, Error,
    MuscleGroup,
};

/// Catalogue service implementing the catalogue driving ports.
#[derive(Clone)]
pub struct CatalogueService<R> {
    repo: Arc<R>,
}

impl<R> CatalogueService<R> {
    /// Create a new service over `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_validation_error(error: CatalogueValidationError) -> Error {
    Error::invalid_request(error.to_string())
        .with_details(json!({ "field": error.field(), "code": error.code() }))
}

fn map_repository_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::Query { message } => {
            Error::internal(format!("catalogue repository error: {message}"))
        }
    }
}

fn exercise_not_found(id: CatalogueExerciseId) -> Error {
    Error::not_found(format!("exercise {id} not found"))
}

fn parse_entry(request: CatalogueExerciseRequest) -> Result<CatalogueEntry, Error> {
    let CatalogueExerciseRequest {
        name,
        description,
        muscle_groups,
        equipment_needed,
    } = request;
    CatalogueEntry::new(name, description, muscle_groups, equipment_needed)
        .map_err(map_validation_error)
}

#[async_trait]
impl<R> CatalogueCommand for CatalogueService<R>
where
    R: CatalogueRepository,
{
    async fn create_exercise(
        &self,
        request: CatalogueExerciseRequest,
    ) -> Result<CatalogueExercise, Error> {
        let entry = parse_entry(request)?;
        let exercise = self
            .repo
            .insert(entry)
            .await
            .map_err(map_repository_error)?;

        info!(
            exercise_id = %exercise.id(),
            name = exercise.entry().name(),
            "catalogue exercise created"
        );
        Ok(exercise)
    }

    async fn update_exercise(
        &self,
        id: CatalogueExerciseId,
        request: CatalogueExerciseRequest,
    ) -> Result<CatalogueExercise, Error> {
        let entry = parse_entry(request)?;
        let exercise = self
            .repo
            .update(id, entry)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| exercise_not_found(id))?;

        info!(exercise_id = %id, "catalogue exercise updated");
        Ok(exercise)
    }

    async fn delete_exercise(&self, id: CatalogueExerciseId) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !removed {
            return Err(exercise_not_found(id));
        }
        info!(exercise_id = %id, "catalogue exercise deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> CatalogueQuery for CatalogueService<R>
where
    R: CatalogueRepository,
{
    async fn get_exercise(&self, id: CatalogueExerciseId) -> Result<CatalogueExercise, Error> {
        debug!(exercise_id = %id, "fetching catalogue exercise");
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| exercise_not_found(id))
    }

    async fn list_exercises(
        &self,
        muscle_group: Option<MuscleGroup>,
    ) -> Result<Vec<CatalogueExercise>, Error> {
        let exercises = self.repo.list().await.map_err(map_repository_error)?;
        Ok(match muscle_group {
            Some(group) => exercises
                .into_iter()
                .filter(|exercise| exercise.targets(group))
                .collect(),
            None => exercises,
        })
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
