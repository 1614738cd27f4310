//! User registration and profile services.
//!
//! Implements the [`UsersCommand`] and [`UsersQuery`] driving ports on top of
//! a [`UserRepository`]. Raw request fields are validated here; uniqueness is
//! left to the repository so the check and the write share one lock.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    RegisterUserRequest, UpdateUserRequest, UserRepository, UserRepositoryError, UsersCommand,
    UsersQuery,
};
use crate::domain::{
    DisplayName, EmailAddress, Error, User, UserChanges, UserDraft, UserId, UserValidationError,
};

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserService<R> {
    /// Create a new service over `repo`, stamping records with `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_user_validation_error(error: &UserValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": error.code(),
    }))
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::EmailTaken { email } => Error::conflict(format!(
            "email {email} is already registered"
        ))
        .with_details(json!({ "field": "email", "code": "already_registered" })),
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

pub(crate) fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

fn parse_changes(request: UpdateUserRequest) -> Result<UserChanges, UserValidationError> {
    let UpdateUserRequest {
        id: _,
        name,
        email,
        is_active,
    } = request;
    Ok(UserChanges {
        name: name.map(DisplayName::new).transpose()?,
        email: email.map(EmailAddress::new).transpose()?,
        is_active,
    })
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn register_user(&self, request: RegisterUserRequest) -> Result<User, Error> {
        let RegisterUserRequest { name, email } = request;
        let name = DisplayName::new(name).map_err(|err| map_user_validation_error(&err))?;
        let email = EmailAddress::new(email).map_err(|err| map_user_validation_error(&err))?;

        let user = self
            .repo
            .insert(UserDraft {
                name,
                email,
                created_at: self.clock.utc(),
            })
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error> {
        let id = request.id;
        let changes = parse_changes(request).map_err(|err| map_user_validation_error(&err))?;

        let user = self
            .repo
            .update(id, changes)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))?;

        info!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !removed {
            return Err(user_not_found(id));
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        debug!(user_id = %id, "fetching user");
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
