//! Workout plans.
//!
//! A plan belongs to one user and groups existing workouts under a training
//! goal. Plans reference workouts by identifier; deleting a workout removes it
//! from every plan.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalogue::{DESCRIPTION_MAX, dedup_groups};
use crate::domain::text::optional_text;
use crate::domain::{MuscleGroup, UserId, WorkoutId};

/// Maximum length of a plan name, in characters.
pub const PLAN_NAME_MAX: usize = 100;
/// Longest supported plan, in weeks.
pub const PLAN_WEEKS_MAX: u32 = 104;
/// Hardest difficulty level. The easiest is 1.
pub const DIFFICULTY_MAX: u8 = 5;

/// Store-assigned plan identifier. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutPlanId(u64);

impl WorkoutPlanId {
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

impl fmt::Display for WorkoutPlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors raised while building plan details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanValidationError {
    EmptyName,
    NameTooLong { max: usize },
    DescriptionTooLong { max: usize },
    InvalidDuration,
    InvalidDifficulty,
}

impl PlanValidationError {
    /// Name of the request field the error refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::DescriptionTooLong { .. } => "description",
            Self::InvalidDuration => "duration_weeks",
            Self::InvalidDifficulty => "difficulty_level",
        }
    }

    /// Stable machine-readable reason.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyName => "empty",
            Self::NameTooLong { .. } | Self::DescriptionTooLong { .. } => "too_long",
            Self::InvalidDuration | Self::InvalidDifficulty => "out_of_range",
        }
    }
}

impl fmt::Display for PlanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::DescriptionTooLong { max } => {
                write!(f, "description must be at most {max} characters")
            }
            Self::InvalidDuration => {
                write!(f, "duration_weeks must be between 1 and {PLAN_WEEKS_MAX}")
            }
            Self::InvalidDifficulty => {
                write!(f, "difficulty_level must be between 1 and {DIFFICULTY_MAX}")
            }
        }
    }
}

impl std::error::Error for PlanValidationError {}

/// Validated, replaceable description of a plan.
///
/// ## Invariants
/// - `name` is trimmed and 1 to [`PLAN_NAME_MAX`] characters.
/// - `duration_weeks` is 1 to [`PLAN_WEEKS_MAX`].
/// - `difficulty_level` is 1 to [`DIFFICULTY_MAX`].
/// - `target_muscle_groups` holds no duplicates and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDetails {
    name: String,
    description: Option<String>,
    duration_weeks: u32,
    target_muscle_groups: Vec<MuscleGroup>,
    difficulty_level: u8,
}

/// Raw plan fields as received from a client.
///
/// Numbers are signed so out-of-range values reach validation instead of
/// failing to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDetailsDraft {
    pub name: String,
    pub description: Option<String>,
    pub duration_weeks: i64,
    pub target_muscle_groups: Vec<MuscleGroup>,
    pub difficulty_level: i64,
}

impl TryFrom<PlanDetailsDraft> for PlanDetails {
    type Error = PlanValidationError;

    fn try_from(value: PlanDetailsDraft) -> Result<Self, Self::Error> {
        let PlanDetailsDraft {
            name,
            description,
            duration_weeks,
            target_muscle_groups,
            difficulty_level,
        } = value;

        let name = name.trim();
        if name.is_empty() {
            return Err(PlanValidationError::EmptyName);
        }
        if name.chars().count() > PLAN_NAME_MAX {
            return Err(PlanValidationError::NameTooLong { max: PLAN_NAME_MAX });
        }
        let description = optional_text(description, DESCRIPTION_MAX).map_err(|_| {
            PlanValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            }
        })?;
        let duration_weeks = u32::try_from(duration_weeks)
            .ok()
            .filter(|weeks| (1..=PLAN_WEEKS_MAX).contains(weeks))
            .ok_or(PlanValidationError::InvalidDuration)?;
        let difficulty_level = u8::try_from(difficulty_level)
            .ok()
            .filter(|level| (1..=DIFFICULTY_MAX).contains(level))
            .ok_or(PlanValidationError::InvalidDifficulty)?;

        Ok(Self {
            name: name.to_owned(),
            description,
            duration_weeks,
            target_muscle_groups: dedup_groups(target_muscle_groups),
            difficulty_level,
        })
    }
}

impl PlanDetails {
    /// Plan name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-text description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Planned length in weeks.
    pub fn duration_weeks(&self) -> u32 {
        self.duration_weeks
    }

    /// Muscle groups the plan focuses on.
    pub fn target_muscle_groups(&self) -> &[MuscleGroup] {
        self.target_muscle_groups.as_slice()
    }

    /// Difficulty from 1 (easiest) to [`DIFFICULTY_MAX`].
    pub fn difficulty_level(&self) -> u8 {
        self.difficulty_level
    }
}

/// Validated input for a plan that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlanDraft {
    pub user_id: UserId,
    pub details: PlanDetails,
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlanDraft {
    /// Materialise the draft under the identifier assigned by the store. The
    /// plan starts without workouts.
    #[must_use]
    pub fn into_plan(self, id: WorkoutPlanId) -> WorkoutPlan {
        WorkoutPlan {
            id,
            user_id: self.user_id,
            details: self.details,
            workouts: Vec::new(),
            created_at: self.created_at,
        }
    }
}

/// Stored workout plan.
///
/// ## Invariants
/// - `workouts` holds no duplicates and keeps insertion order.
/// - Every listed workout existed when it was added; deleted workouts are
///   removed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    id: WorkoutPlanId,
    user_id: UserId,
    details: PlanDetails,
    workouts: Vec<WorkoutId>,
    created_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Store-assigned identifier.
    pub fn id(&self) -> WorkoutPlanId {
        self.id
    }

    /// Owner at creation time.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Current description.
    pub fn details(&self) -> &PlanDetails {
        &self.details
    }

    /// Workouts in the order they were added.
    pub fn workouts(&self) -> &[WorkoutId] {
        self.workouts.as_slice()
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the description, keeping the workout list.
    pub fn replace(&mut self, details: PlanDetails) {
        self.details = details;
    }

    /// Append `workout` unless it is already listed.
    pub fn attach(&mut self, workout: WorkoutId) {
        if !self.workouts.contains(&workout) {
            self.workouts.push(workout);
        }
    }

    /// Remove `workout` if listed.
    pub fn detach(&mut self, workout: WorkoutId) {
        self.workouts.retain(|listed| *listed != workout);
    }
}
