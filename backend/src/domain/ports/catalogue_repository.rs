//! Driven port for exercise catalogue storage.

use async_trait::async_trait;

use crate::domain::{CatalogueEntry, CatalogueExercise, CatalogueExerciseId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by catalogue repository adapters.
    pub enum CatalogueRepositoryError {
        /// The adapter could not serve the request.
        Query { message: String } => "catalogue repository query failed: {message}",
    }
}

/// Storage for [`CatalogueExercise`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Store a new entry under the next identifier.
    async fn insert(
        &self,
        entry: CatalogueEntry,
    ) -> Result<CatalogueExercise, CatalogueRepositoryError>;

    /// Fetch an entry by identifier.
    async fn find_by_id(
        &self,
        id: CatalogueExerciseId,
    ) -> Result<Option<CatalogueExercise>, CatalogueRepositoryError>;

    /// Snapshot of every entry, ordered by identifier.
    async fn list(&self) -> Result<Vec<CatalogueExercise>, CatalogueRepositoryError>;

    /// Replace an entry's content. `Ok(None)` when the id is unknown.
    async fn update(
        &self,
        id: CatalogueExerciseId,
        entry: CatalogueEntry,
    ) -> Result<Option<CatalogueExercise>, CatalogueRepositoryError>;

    /// Remove an entry. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: CatalogueExerciseId) -> Result<bool, CatalogueRepositoryError>;
}
