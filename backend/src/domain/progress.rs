//! Body progress logs.
//!
//! A log records body metrics for one user on one calendar day. Logs are
//! immutable once stored; corrections are made by deleting and re-recording.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::text::optional_text;
use crate::domain::{NOTES_MAX, UserId};

/// Upper bound on a recorded body weight, in kilograms.
pub const BODY_WEIGHT_KG_MAX: f64 = 500.0;
/// Most named measurements accepted on one log.
pub const MEASUREMENTS_MAX: usize = 20;
/// Maximum length of a measurement name, in characters.
pub const MEASUREMENT_NAME_MAX: usize = 50;

/// Store-assigned progress log identifier. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressLogId(u64);

impl ProgressLogId {
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

impl fmt::Display for ProgressLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors raised for progress logs and their filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressValidationError {
    InvalidWeight,
    InvalidBodyFat,
    NotesTooLong { max: usize },
    TooManyMeasurements { max: usize },
    EmptyMeasurementName,
    MeasurementNameTooLong { max: usize },
    InvalidMeasurement { name: String },
    InvertedRange,
}

impl ProgressValidationError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidWeight => "weight_kg",
            Self::InvalidBodyFat => "body_fat_percentage",
            Self::NotesTooLong { .. } => "notes",
            Self::TooManyMeasurements { .. }
            | Self::EmptyMeasurementName
            | Self::MeasurementNameTooLong { .. }
            | Self::InvalidMeasurement { .. } => "measurements",
            Self::InvertedRange => "from_date",
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidWeight | Self::InvalidBodyFat | Self::InvalidMeasurement { .. } => {
                "out_of_range"
            }
            Self::NotesTooLong { .. }
            | Self::TooManyMeasurements { .. }
            | Self::MeasurementNameTooLong { .. } => "too_long",
            Self::EmptyMeasurementName => "empty",
            Self::InvertedRange => "inverted_range",
        }
    }
}

impl fmt::Display for ProgressValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeight => {
                write!(f, "weight_kg must be above 0 and at most {BODY_WEIGHT_KG_MAX}")
            }
            Self::InvalidBodyFat => write!(f, "body_fat_percentage must be between 0 and 100"),
            Self::NotesTooLong { max } => write!(f, "notes must be at most {max} characters"),
            Self::TooManyMeasurements { max } => {
                write!(f, "at most {max} measurements may be recorded")
            }
            Self::EmptyMeasurementName => write!(f, "measurement names must not be empty"),
            Self::MeasurementNameTooLong { max } => {
                write!(f, "measurement names must be at most {max} characters")
            }
            Self::InvalidMeasurement { name } => {
                write!(f, "measurement {name} must be finite and positive")
            }
            Self::InvertedRange => write!(f, "from_date must not be after to_date"),
        }
    }
}

impl std::error::Error for ProgressValidationError {}

/// Unvalidated log content as received from a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntryDraft {
    pub log_date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub notes: Option<String>,
    pub measurements: BTreeMap<String, f64>,
}

/// Validated log content.
///
/// ## Invariants
/// - `weight_kg`, when present, is above 0 and at most [`BODY_WEIGHT_KG_MAX`].
/// - `body_fat_percentage`, when present, is 0 to 100.
/// - Measurement names are trimmed and non-empty; values are finite and
///   positive; at most [`MEASUREMENTS_MAX`] entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    log_date: NaiveDate,
    weight_kg: Option<f64>,
    body_fat_percentage: Option<f64>,
    notes: Option<String>,
    measurements: BTreeMap<String, f64>,
}

fn measurements(
    raw: BTreeMap<String, f64>,
) -> Result<BTreeMap<String, f64>, ProgressValidationError> {
    if raw.len() > MEASUREMENTS_MAX {
        return Err(ProgressValidationError::TooManyMeasurements {
            max: MEASUREMENTS_MAX,
        });
    }
    raw.into_iter()
        .map(|(name, value)| {
            let name = name.trim();
            if name.is_empty() {
                return Err(ProgressValidationError::EmptyMeasurementName);
            }
            if name.chars().count() > MEASUREMENT_NAME_MAX {
                return Err(ProgressValidationError::MeasurementNameTooLong {
                    max: MEASUREMENT_NAME_MAX,
                });
            }
            if !value.is_finite() || value <= 0.0 {
                return Err(ProgressValidationError::InvalidMeasurement {
                    name: name.to_owned(),
                });
            }
            Ok((name.to_owned(), value))
        })
        .collect()
}

impl TryFrom<ProgressEntryDraft> for ProgressEntry {
    type Error = ProgressValidationError;

    fn try_from(value: ProgressEntryDraft) -> Result<Self, Self::Error> {
        let ProgressEntryDraft {
            log_date,
            weight_kg,
            body_fat_percentage,
            notes,
            measurements: raw_measurements,
        } = value;

        if weight_kg.is_some_and(|weight| !(weight > 0.0 && weight <= BODY_WEIGHT_KG_MAX)) {
            return Err(ProgressValidationError::InvalidWeight);
        }
        if body_fat_percentage.is_some_and(|percent| !(0.0..=100.0).contains(&percent)) {
            return Err(ProgressValidationError::InvalidBodyFat);
        }
        let notes = optional_text(notes, NOTES_MAX)
            .map_err(|_| ProgressValidationError::NotesTooLong { max: NOTES_MAX })?;

        Ok(Self {
            log_date,
            weight_kg,
            body_fat_percentage,
            notes,
            measurements: measurements(raw_measurements)?,
        })
    }
}

impl ProgressEntry {
    /// Calendar day the metrics were taken.
    pub fn log_date(&self) -> NaiveDate {
        self.log_date
    }

    /// Body weight in kilograms, if recorded.
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// Body fat percentage, if recorded.
    pub fn body_fat_percentage(&self) -> Option<f64> {
        self.body_fat_percentage
    }

    /// Free-text notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Named body measurements, e.g. `{"waist": 81.5}`.
    pub fn measurements(&self) -> &BTreeMap<String, f64> {
        &self.measurements
    }
}

/// Validated input for a log that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressLogDraft {
    pub user_id: UserId,
    pub entry: ProgressEntry,
    pub created_at: DateTime<Utc>,
}

impl ProgressLogDraft {
    /// Materialise the draft under the identifier assigned by the store.
    #[must_use]
    pub fn into_log(self, id: ProgressLogId) -> ProgressLog {
        ProgressLog {
            id,
            user_id: self.user_id,
            entry: self.entry,
            created_at: self.created_at,
        }
    }
}

/// Stored progress log.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressLog {
    id: ProgressLogId,
    user_id: UserId,
    entry: ProgressEntry,
    created_at: DateTime<Utc>,
}

impl ProgressLog {
    /// Store-assigned identifier.
    pub fn id(&self) -> ProgressLogId {
        self.id
    }

    /// Owner at creation time.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Recorded metrics.
    pub fn entry(&self) -> &ProgressEntry {
        &self.entry
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Inclusive calendar-day window. Open ends are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    /// Build a window, rejecting `from` after `to`.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use fitness_backend::domain::DateRange;
    ///
    /// let march = DateRange::new(NaiveDate::from_ymd_opt(2024, 3, 1), None).unwrap();
    /// assert!(march.contains(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
    /// assert!(!march.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    /// ```
    pub fn new(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Self, ProgressValidationError> {
        if let (Some(start), Some(end)) = (from, to) {
            if start > end {
                return Err(ProgressValidationError::InvertedRange);
            }
        }
        Ok(Self { from, to })
    }

    /// Whether `day` falls inside the window.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from.is_none_or(|start| day >= start) && self.to.is_none_or(|end| day <= end)
    }
}
