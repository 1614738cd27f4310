//! Driving ports for the exercise catalogue.

use async_trait::async_trait;

use crate::domain::{CatalogueExercise, CatalogueExerciseId, Error, MuscleGroup};

/// Raw catalogue fields shared by create and replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueExerciseRequest {
    pub name: String,
    pub description: Option<String>,
    pub muscle_groups: Vec<MuscleGroup>,
    pub equipment_needed: Option<String>,
}

/// Domain use-case port for catalogue writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueCommand: Send + Sync {
    /// Add an entry. Fails with `invalid_request` on malformed fields.
    async fn create_exercise(
        &self,
        request: CatalogueExerciseRequest,
    ) -> Result<CatalogueExercise, Error>;

    /// Replace an entry's content, or `not_found`.
    async fn update_exercise(
        &self,
        id: CatalogueExerciseId,
        request: CatalogueExerciseRequest,
    ) -> Result<CatalogueExercise, Error>;

    /// Remove an entry, or `not_found`.
    async fn delete_exercise(&self, id: CatalogueExerciseId) -> Result<(), Error>;
}

/// Domain use-case port for catalogue reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Fetch one entry, or `not_found`.
    async fn get_exercise(&self, id: CatalogueExerciseId) -> Result<CatalogueExercise, Error>;

    /// Entries ordered by identifier, optionally restricted to those training
    /// `muscle_group`.
    async fn list_exercises(
        &self,
        muscle_group: Option<MuscleGroup>,
    ) -> Result<Vec<CatalogueExercise>, Error>;
}
