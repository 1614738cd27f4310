//! Exercise entries embedded in a workout.

use super::{ExerciseValidationError, WorkoutValidationError};

/// Maximum length of an exercise name, in characters.
pub const EXERCISE_NAME_MAX: usize = 100;
/// Upper bound on sets per exercise entry.
pub const SETS_MAX: u32 = 100;
/// Upper bound on repetitions per set.
pub const REPS_MAX: u32 = 1_000;
/// Upper bound on the recorded load, in kilograms.
pub const WEIGHT_KG_MAX: f64 = 1_000.0;
/// Upper bound on the recorded duration: one day.
pub const DURATION_SECONDS_MAX: u32 = 86_400;

/// Unvalidated exercise as received from a client.
///
/// Counts are signed so negative values reach validation instead of failing
/// to decode.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight_kg: Option<f64>,
    pub duration_seconds: Option<i64>,
}

/// Validated exercise entry.
///
/// ## Invariants
/// - `name` is trimmed and 1 to [`EXERCISE_NAME_MAX`] characters.
/// - `sets` is 1 to [`SETS_MAX`]; `reps` is 1 to [`REPS_MAX`].
/// - `weight_kg`, when present, is finite and 0 to [`WEIGHT_KG_MAX`].
/// - `duration_seconds`, when present, is 1 to [`DURATION_SECONDS_MAX`].
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    name: String,
    sets: u32,
    reps: u32,
    weight_kg: Option<f64>,
    duration_seconds: Option<u32>,
}

fn bounded(
    value: i64,
    max: u32,
    error: ExerciseValidationError,
) -> Result<u32, ExerciseValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|count| (1..=max).contains(count))
        .ok_or(error)
}

impl TryFrom<ExerciseDraft> for Exercise {
    type Error = ExerciseValidationError;

    fn try_from(value: ExerciseDraft) -> Result<Self, Self::Error> {
        let ExerciseDraft {
            name,
            sets,
            reps,
            weight_kg,
            duration_seconds,
        } = value;

        let name = name.trim();
        if name.is_empty() {
            return Err(ExerciseValidationError::EmptyName);
        }
        if name.chars().count() > EXERCISE_NAME_MAX {
            return Err(ExerciseValidationError::NameTooLong {
                max: EXERCISE_NAME_MAX,
            });
        }

        let sets = bounded(sets, SETS_MAX, ExerciseValidationError::InvalidSets)?;
        let reps = bounded(reps, REPS_MAX, ExerciseValidationError::InvalidReps)?;

        if weight_kg.is_some_and(|weight| !(0.0..=WEIGHT_KG_MAX).contains(&weight)) {
            return Err(ExerciseValidationError::InvalidWeight);
        }
        let duration_seconds = duration_seconds
            .map(|seconds| {
                bounded(
                    seconds,
                    DURATION_SECONDS_MAX,
                    ExerciseValidationError::InvalidDuration,
                )
            })
            .transpose()?;

        Ok(Self {
            name: name.to_owned(),
            sets,
            reps,
            weight_kg,
            duration_seconds,
        })
    }
}

impl Exercise {
    /// Exercise name, e.g. `"squat"`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Number of sets.
    pub fn sets(&self) -> u32 {
        self.sets
    }

    /// Repetitions per set.
    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Load in kilograms, if recorded.
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// Duration in seconds, if recorded.
    pub fn duration_seconds(&self) -> Option<u32> {
        self.duration_seconds
    }

    /// Total load moved: sets × reps × weight. Zero when unweighted.
    pub fn volume_kg(&self) -> f64 {
        self.weight_kg.map_or(0.0, |weight| {
            f64::from(self.sets) * f64::from(self.reps) * weight
        })
    }
}

/// Non-empty, ordered list of validated exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseList(Vec<Exercise>);

impl ExerciseList {
    /// Validate every draft, reporting the first failure with its position.
    ///
    /// # Examples
    /// ```
    /// use fitness_backend::domain::{ExerciseDraft, ExerciseList};
    ///
    /// let list = ExerciseList::new(vec![ExerciseDraft {
    ///     name: "squat".into(),
    ///     sets: 3,
    ///     reps: 5,
    ///     weight_kg: Some(100.0),
    ///     duration_seconds: None,
    /// }])
    /// .unwrap();
    /// assert_eq!(list.as_slice().len(), 1);
    /// ```
    pub fn new(drafts: Vec<ExerciseDraft>) -> Result<Self, WorkoutValidationError> {
        if drafts.is_empty() {
            return Err(WorkoutValidationError::NoExercises);
        }
        drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                Exercise::try_from(draft)
                    .map_err(|source| WorkoutValidationError::Exercise { index, source })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Borrow the exercises in order.
    pub fn as_slice(&self) -> &[Exercise] {
        self.0.as_slice()
    }
}

impl From<ExerciseList> for Vec<Exercise> {
    fn from(value: ExerciseList) -> Self {
        value.0
    }
}
