//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are what inbound adapters call.
//! Driven ports (`*Repository`) are what outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_command;
mod catalogue_repository;
mod progress_command;
mod progress_log_repository;
mod user_repository;
mod users_command;
mod users_query;
mod workout_plan_repository;
mod workout_plans_command;
mod workout_repository;
mod workouts_command;
mod workouts_query;

#[cfg(test)]
pub use catalogue_command::{MockCatalogueCommand, MockCatalogueQuery};
pub use catalogue_command::{CatalogueCommand, CatalogueExerciseRequest, CatalogueQuery};
#[cfg(test)]
pub use catalogue_repository::MockCatalogueRepository;
pub use catalogue_repository::{CatalogueRepository, CatalogueRepositoryError};
#[cfg(test)]
pub use progress_command::{MockProgressCommand, MockProgressQuery};
pub use progress_command::{
    ListProgressRequest, ProgressCommand, ProgressQuery, RecordProgressRequest,
};
#[cfg(test)]
pub use progress_log_repository::MockProgressLogRepository;
pub use progress_log_repository::{ProgressLogRepository, ProgressLogRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::{RegisterUserRequest, UpdateUserRequest, UsersCommand};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
#[cfg(test)]
pub use workout_plan_repository::MockWorkoutPlanRepository;
pub use workout_plan_repository::{WorkoutPlanRepository, WorkoutPlanRepositoryError};
#[cfg(test)]
pub use workout_plans_command::{MockWorkoutPlansCommand, MockWorkoutPlansQuery};
pub use workout_plans_command::{
    CreateWorkoutPlanRequest, WorkoutPlansCommand, WorkoutPlansQuery,
};
#[cfg(test)]
pub use workout_repository::MockWorkoutRepository;
pub use workout_repository::{WorkoutRepository, WorkoutRepositoryError};
#[cfg(test)]
pub use workouts_command::MockWorkoutsCommand;
pub use workouts_command::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutsCommand};
#[cfg(test)]
pub use workouts_query::MockWorkoutsQuery;
pub use workouts_query::{ListWorkoutsRequest, WorkoutsQuery};
