//! Workout and exercise domain types.
//!
//! A workout belongs to one user and embeds a non-empty list of exercises.
//! Exercises have no identity of their own; updating a workout replaces the
//! whole list.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod exercise;
mod stats;
#[cfg(test)]
mod tests;
mod workout;

pub use exercise::{
    DURATION_SECONDS_MAX, EXERCISE_NAME_MAX, Exercise, ExerciseDraft, ExerciseList, REPS_MAX,
    SETS_MAX, WEIGHT_KG_MAX,
};
pub use stats::TrainingStats;
pub use workout::{NOTES_MAX, Workout, WorkoutChanges, WorkoutDraft, WorkoutNotes};

/// Store-assigned workout identifier. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(u64);

impl WorkoutId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Training style of a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    Strength,
    Cardio,
    Mobility,
    Hiit,
    Yoga,
    Crossfit,
}

impl WorkoutCategory {
    /// Every category in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Cardio,
        Self::Mobility,
        Self::Hiit,
        Self::Yoga,
        Self::Crossfit,
    ];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Mobility => "mobility",
            Self::Hiit => "hiit",
            Self::Yoga => "yoga",
            Self::Crossfit => "crossfit",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors raised for a single exercise entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseValidationError {
    EmptyName,
    NameTooLong { max: usize },
    InvalidSets,
    InvalidReps,
    InvalidWeight,
    InvalidDuration,
}

impl ExerciseValidationError {
    /// Name of the exercise field the error refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::InvalidSets => "sets",
            Self::InvalidReps => "reps",
            Self::InvalidWeight => "weight_kg",
            Self::InvalidDuration => "duration_seconds",
        }
    }

    /// Stable machine-readable reason.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyName => "empty",
            Self::NameTooLong { .. } => "too_long",
            Self::InvalidSets | Self::InvalidReps | Self::InvalidWeight | Self::InvalidDuration => {
                "out_of_range"
            }
        }
    }
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "exercise name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "exercise name must be at most {max} characters")
            }
            Self::InvalidSets => write!(f, "sets must be between 1 and {SETS_MAX}"),
            Self::InvalidReps => write!(f, "reps must be between 1 and {REPS_MAX}"),
            Self::InvalidWeight => {
                write!(f, "weight_kg must be between 0 and {WEIGHT_KG_MAX}")
            }
            Self::InvalidDuration => {
                write!(f, "duration_seconds must be between 1 and {DURATION_SECONDS_MAX}")
            }
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Validation errors raised while building a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutValidationError {
    NoExercises,
    Exercise {
        index: usize,
        source: ExerciseValidationError,
    },
    NotesTooLong {
        max: usize,
    },
}

impl WorkoutValidationError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NoExercises => "exercises",
            Self::Exercise { source, .. } => source.field(),
            Self::NotesTooLong { .. } => "notes",
        }
    }

    /// Position of the offending exercise, when the error concerns one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Exercise { index, .. } => Some(*index),
            Self::NoExercises | Self::NotesTooLong { .. } => None,
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoExercises => "empty",
            Self::Exercise { source, .. } => source.code(),
            Self::NotesTooLong { .. } => "too_long",
        }
    }
}

impl fmt::Display for WorkoutValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoExercises => write!(f, "workout must contain at least one exercise"),
            Self::Exercise { index, source } => write!(f, "exercises[{index}]: {source}"),
            Self::NotesTooLong { max } => write!(f, "notes must be at most {max} characters"),
        }
    }
}

impl std::error::Error for WorkoutValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Exercise { source, .. } => Some(source),
            Self::NoExercises | Self::NotesTooLong { .. } => None,
        }
    }
}
