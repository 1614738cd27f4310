//! Workout aggregate.

use chrono::{DateTime, Utc};

use super::{Exercise, ExerciseList, WorkoutCategory, WorkoutId, WorkoutValidationError};
use crate::domain::UserId;

/// Maximum length of workout notes, in characters.
pub const NOTES_MAX: usize = 1000;

/// Free-text notes attached to a workout. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutNotes(String);

impl WorkoutNotes {
    /// Normalise optional notes; blank text is treated as absent.
    pub fn parse(raw: Option<String>) -> Result<Option<Self>, WorkoutValidationError> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > NOTES_MAX {
            return Err(WorkoutValidationError::NotesTooLong { max: NOTES_MAX });
        }
        Ok(Some(Self(trimmed.to_owned())))
    }
}

impl AsRef<str> for WorkoutNotes {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated input for a workout that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub user_id: UserId,
    pub exercises: ExerciseList,
    pub category: Option<WorkoutCategory>,
    pub notes: Option<WorkoutNotes>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutDraft {
    /// Materialise the draft under the identifier assigned by the store.
    #[must_use]
    pub fn into_workout(self, id: WorkoutId) -> Workout {
        Workout {
            id,
            user_id: self.user_id,
            exercises: self.exercises.into(),
            category: self.category,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}

/// Replacement applied by a workout update.
///
/// The exercise list is replaced wholesale. `category` and `notes` replace the
/// stored values only when supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutChanges {
    pub exercises: ExerciseList,
    pub category: Option<WorkoutCategory>,
    pub notes: Option<WorkoutNotes>,
    pub updated_at: DateTime<Utc>,
}

/// Recorded training session.
///
/// ## Invariants
/// - `exercises` is non-empty.
/// - `user_id` referenced an existing user when the workout was created; the
///   user may since have been deleted.
/// - `updated_at` is `None` until the first successful update.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    user_id: UserId,
    exercises: Vec<Exercise>,
    category: Option<WorkoutCategory>,
    notes: Option<WorkoutNotes>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Workout {
    /// Store-assigned identifier.
    pub fn id(&self) -> WorkoutId {
        self.id
    }

    /// Owner at creation time.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Exercises in the order they were submitted.
    pub fn exercises(&self) -> &[Exercise] {
        self.exercises.as_slice()
    }

    /// Training style, if recorded.
    pub fn category(&self) -> Option<WorkoutCategory> {
        self.category
    }

    /// Free-text notes, if recorded.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_ref().map(AsRef::as_ref)
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the latest update.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Apply an update in place.
    pub fn apply(&mut self, changes: WorkoutChanges) {
        let WorkoutChanges {
            exercises,
            category,
            notes,
            updated_at,
        } = changes;
        self.exercises = exercises.into();
        if category.is_some() {
            self.category = category;
        }
        if notes.is_some() {
            self.notes = notes;
        }
        self.updated_at = Some(updated_at);
    }
}
