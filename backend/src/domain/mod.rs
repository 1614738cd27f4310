//! Domain entities, validation rules, ports and services.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.
//! - [`User`] and its validated fields ([`DisplayName`], [`EmailAddress`]).
//! - [`Workout`], [`Exercise`] and [`TrainingStats`].
//! - [`CatalogueExercise`] and [`MuscleGroup`]: the exercise catalogue.
//! - [`WorkoutPlan`]: user-owned groupings of workouts.
//! - [`ProgressLog`]: dated body metrics.
//! - [`UserService`], [`WorkoutService`], [`CatalogueService`],
//!   [`WorkoutPlanService`] and [`ProgressService`]: driving port
//!   implementations.

pub mod catalogue;
mod catalogue_service;
pub mod error;
pub mod plans;
pub mod ports;
pub mod progress;
mod progress_service;
mod text;
pub mod trace_id;
pub mod user;
mod user_service;
mod workout_plan_service;
mod workout_service;
pub mod workouts;

pub use self::catalogue::{
    CATALOGUE_NAME_MAX, CatalogueEntry, CatalogueExercise, CatalogueExerciseId,
    CatalogueValidationError, DESCRIPTION_MAX, EQUIPMENT_MAX, MuscleGroup,
};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::plans::{
    DIFFICULTY_MAX, PLAN_NAME_MAX, PLAN_WEEKS_MAX, PlanDetails, PlanDetailsDraft,
    PlanValidationError, WorkoutPlan, WorkoutPlanDraft, WorkoutPlanId,
};
pub use self::progress::{
    BODY_WEIGHT_KG_MAX, DateRange, MEASUREMENT_NAME_MAX, MEASUREMENTS_MAX, ProgressEntry,
    ProgressEntryDraft, ProgressLog, ProgressLogDraft, ProgressLogId, ProgressValidationError,
};
pub use self::progress_service::ProgressService;
pub use self::trace_id::TraceId;
pub use self::user::{
    DISPLAY_NAME_MAX, DisplayName, EMAIL_MAX, EmailAddress, User, UserChanges, UserDraft, UserId,
    UserValidationError,
};
pub use self::user_service::UserService;
pub use self::workout_plan_service::WorkoutPlanService;
pub use self::workout_service::WorkoutService;
pub use self::workouts::{
    DURATION_SECONDS_MAX, EXERCISE_NAME_MAX, Exercise, ExerciseDraft, ExerciseList,
    ExerciseValidationError, NOTES_MAX, REPS_MAX, SETS_MAX, TrainingStats, WEIGHT_KG_MAX, Workout,
    WorkoutCategory, WorkoutChanges, WorkoutDraft, WorkoutId, WorkoutNotes, WorkoutValidationError,
};
