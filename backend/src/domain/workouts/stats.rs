//! Training summary derived from a user's workouts.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use super::{Workout, WorkoutCategory};

/// Aggregate totals across a set of workouts.
///
/// Counters saturate instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingStats {
    pub workout_count: u64,
    pub exercise_count: u64,
    pub total_sets: u64,
    pub total_reps: u64,
    pub total_volume_kg: f64,
    pub total_duration_seconds: u64,
    /// Most frequent category. Ties go to the category declared first in
    /// [`WorkoutCategory`]; `None` when no workout carries a category.
    pub top_category: Option<WorkoutCategory>,
    /// UTC calendar day of the most recent workout.
    pub last_workout_date: Option<NaiveDate>,
    /// Consecutive UTC days with at least one workout, counted back from
    /// `last_workout_date`.
    pub streak_days: u32,
}

impl TrainingStats {
    /// Summarise `workouts`.
    ///
    /// `total_reps` counts every repetition, i.e. sets × reps per exercise.
    pub fn from_workouts<'a>(workouts: impl IntoIterator<Item = &'a Workout>) -> Self {
        let mut stats = Self::default();
        let mut categories: HashMap<WorkoutCategory, u64> = HashMap::new();
        let mut days = BTreeSet::new();

        for workout in workouts {
            stats.workout_count = stats.workout_count.saturating_add(1);
            days.insert(workout.created_at().date_naive());
            if let Some(category) = workout.category() {
                let count = categories.entry(category).or_default();
                *count = count.saturating_add(1);
            }
            for exercise in workout.exercises() {
                let sets = u64::from(exercise.sets());
                stats.exercise_count = stats.exercise_count.saturating_add(1);
                stats.total_sets = stats.total_sets.saturating_add(sets);
                stats.total_reps = stats
                    .total_reps
                    .saturating_add(sets.saturating_mul(u64::from(exercise.reps())));
                stats.total_volume_kg =
                    (stats.total_volume_kg + exercise.volume_kg()).min(f64::MAX);
                stats.total_duration_seconds = stats
                    .total_duration_seconds
                    .saturating_add(exercise.duration_seconds().map_or(0, u64::from));
            }
        }

        stats.top_category = WorkoutCategory::ALL
            .into_iter()
            .filter_map(|category| categories.get(&category).map(|count| (category, *count)))
            .fold(None, |best: Option<(WorkoutCategory, u64)>, candidate| match best {
                Some((_, best_count)) if best_count >= candidate.1 => best,
                _ => Some(candidate),
            })
            .map(|(category, _)| category);
        stats.last_workout_date = days.last().copied();
        stats.streak_days = trailing_streak(&days);

        stats
    }
}

fn trailing_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut streak = 0_u32;
    let mut cursor = days.last().copied();
    while let Some(day) = cursor.filter(|day| days.contains(day)) {
        streak = streak.saturating_add(1);
        cursor = day.pred_opt();
    }
    streak
}
