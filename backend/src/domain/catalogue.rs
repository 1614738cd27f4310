//! Exercise catalogue.
//!
//! Catalogue entries describe movements independently of any workout: a name,
//! the muscle groups it trains and optional equipment. Workouts do not link to
//! entries, so an entry can be edited or removed at any time.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::text::optional_text;

/// Maximum length of a catalogue entry name, in characters.
pub const CATALOGUE_NAME_MAX: usize = 100;
/// Maximum length of a description, in characters.
pub const DESCRIPTION_MAX: usize = 1000;
/// Maximum length of the equipment note, in characters.
pub const EQUIPMENT_MAX: usize = 100;

/// Body region trained by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    FullBody,
}

impl MuscleGroup {
    /// Every muscle group in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Arms,
        Self::Core,
        Self::FullBody,
    ];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Core => "core",
            Self::FullBody => "full_body",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drop repeated groups, keeping the first occurrence of each.
pub(crate) fn dedup_groups(groups: Vec<MuscleGroup>) -> Vec<MuscleGroup> {
    let mut unique = Vec::with_capacity(groups.len());
    for group in groups {
        if !unique.contains(&group) {
            unique.push(group);
        }
    }
    unique
}

/// Store-assigned catalogue entry identifier. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogueExerciseId(u64);

impl CatalogueExerciseId {
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

impl fmt::Display for CatalogueExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors raised while building a catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueValidationError {
    EmptyName,
    NameTooLong { max: usize },
    DescriptionTooLong { max: usize },
    EquipmentTooLong { max: usize },
    NoMuscleGroups,
}

impl CatalogueValidationError {
    /// Name of the request field the error refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::DescriptionTooLong { .. } => "description",
            Self::EquipmentTooLong { .. } => "equipment_needed",
            Self::NoMuscleGroups => "muscle_groups",
        }
    }

    /// Stable machine-readable reason.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyName | Self::NoMuscleGroups => "empty",
            Self::NameTooLong { .. }
            | Self::DescriptionTooLong { .. }
            | Self::EquipmentTooLong { .. } => "too_long",
        }
    }
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::DescriptionTooLong { max } => {
                write!(f, "description must be at most {max} characters")
            }
            Self::EquipmentTooLong { max } => {
                write!(f, "equipment_needed must be at most {max} characters")
            }
            Self::NoMuscleGroups => write!(f, "at least one muscle group is required"),
        }
    }
}

impl std::error::Error for CatalogueValidationError {}

/// Validated, replaceable content of a catalogue entry.
///
/// ## Invariants
/// - `name` is trimmed and 1 to [`CATALOGUE_NAME_MAX`] characters.
/// - `muscle_groups` is non-empty and free of duplicates.
/// - `description` and `equipment_needed` are never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    name: String,
    description: Option<String>,
    muscle_groups: Vec<MuscleGroup>,
    equipment_needed: Option<String>,
}

impl CatalogueEntry {
    /// Validate raw catalogue fields.
    ///
    /// # Examples
    /// ```
    /// use fitness_backend::domain::{CatalogueEntry, MuscleGroup};
    ///
    /// let entry = CatalogueEntry::new(
    ///     " Back squat ",
    ///     None,
    ///     vec![MuscleGroup::Legs, MuscleGroup::Core, MuscleGroup::Legs],
    ///     Some("barbell".into()),
    /// )
    /// .unwrap();
    /// assert_eq!(entry.name(), "Back squat");
    /// assert_eq!(entry.muscle_groups(), [MuscleGroup::Legs, MuscleGroup::Core]);
    /// ```
    pub fn new(
        name: impl AsRef<str>,
        description: Option<String>,
        muscle_groups: Vec<MuscleGroup>,
        equipment_needed: Option<String>,
    ) -> Result<Self, CatalogueValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(CatalogueValidationError::EmptyName);
        }
        if name.chars().count() > CATALOGUE_NAME_MAX {
            return Err(CatalogueValidationError::NameTooLong {
                max: CATALOGUE_NAME_MAX,
            });
        }
        let description = optional_text(description, DESCRIPTION_MAX).map_err(|_| {
            CatalogueValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            }
        })?;
        let equipment_needed = optional_text(equipment_needed, EQUIPMENT_MAX).map_err(|_| {
            CatalogueValidationError::EquipmentTooLong { max: EQUIPMENT_MAX }
        })?;
        let muscle_groups = dedup_groups(muscle_groups);
        if muscle_groups.is_empty() {
            return Err(CatalogueValidationError::NoMuscleGroups);
        }

        Ok(Self {
            name: name.to_owned(),
            description,
            muscle_groups,
            equipment_needed,
        })
    }

    /// Entry name, e.g. `"Back squat"`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-text description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Muscle groups in the order they were submitted.
    pub fn muscle_groups(&self) -> &[MuscleGroup] {
        self.muscle_groups.as_slice()
    }

    /// Equipment note, if any.
    pub fn equipment_needed(&self) -> Option<&str> {
        self.equipment_needed.as_deref()
    }

    /// Materialise the entry under the identifier assigned by the store.
    #[must_use]
    pub fn into_exercise(self, id: CatalogueExerciseId) -> CatalogueExercise {
        CatalogueExercise { id, entry: self }
    }
}

/// Stored catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueExercise {
    id: CatalogueExerciseId,
    entry: CatalogueEntry,
}

impl CatalogueExercise {
    /// Store-assigned identifier.
    pub fn id(&self) -> CatalogueExerciseId {
        self.id
    }

    /// Current content.
    pub fn entry(&self) -> &CatalogueEntry {
        &self.entry
    }

    /// Whether the entry trains `group`.
    pub fn targets(&self, group: MuscleGroup) -> bool {
        self.entry.muscle_groups.contains(&group)
    }

    /// Replace the content, keeping the identifier.
    pub fn replace(&mut self, entry: CatalogueEntry) {
        self.entry = entry;
    }
}
