//! Regression coverage for workout domain types.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rstest::{fixture, rstest};

use super::{
    DURATION_SECONDS_MAX, EXERCISE_NAME_MAX, ExerciseDraft, ExerciseList,
    ExerciseValidationError, NOTES_MAX, REPS_MAX, SETS_MAX, TrainingStats, WEIGHT_KG_MAX, Workout,
    WorkoutCategory, WorkoutChanges, WorkoutDraft, WorkoutId, WorkoutNotes, WorkoutValidationError,
};
use crate::domain::UserId;

fn squat() -> ExerciseDraft {
    ExerciseDraft {
        name: "squat".to_owned(),
        sets: 3,
        reps: 5,
        weight_kg: Some(100.0),
        duration_seconds: None,
    }
}

fn plank() -> ExerciseDraft {
    ExerciseDraft {
        name: "plank".to_owned(),
        sets: 2,
        reps: 1,
        weight_kg: None,
        duration_seconds: Some(60),
    }
}

#[fixture]
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 7, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn workout(
    id: u64,
    exercises: Vec<ExerciseDraft>,
    category: Option<WorkoutCategory>,
    created_at: DateTime<Utc>,
) -> Workout {
    WorkoutDraft {
        user_id: UserId::new(1),
        exercises: ExerciseList::new(exercises).expect("valid exercises"),
        category,
        notes: None,
        created_at,
    }
    .into_workout(WorkoutId::new(id))
}

#[rstest]
fn exercise_list_accepts_valid_entries() {
    let list = ExerciseList::new(vec![squat(), plank()]).expect("valid list");
    let names: Vec<_> = list.as_slice().iter().map(|e| e.name().to_owned()).collect();
    assert_eq!(names, ["squat", "plank"]);
}

#[rstest]
fn exercise_list_rejects_empty() {
    assert_eq!(
        ExerciseList::new(Vec::new()),
        Err(WorkoutValidationError::NoExercises)
    );
}

#[rstest]
#[case(ExerciseDraft { sets: 0, ..squat() }, ExerciseValidationError::InvalidSets)]
#[case(ExerciseDraft { sets: -3, ..squat() }, ExerciseValidationError::InvalidSets)]
#[case(ExerciseDraft { sets: i64::MAX, ..squat() }, ExerciseValidationError::InvalidSets)]
#[case(
    ExerciseDraft { sets: i64::from(u32::MAX), ..squat() },
    ExerciseValidationError::InvalidSets
)]
#[case(
    ExerciseDraft { sets: i64::from(SETS_MAX) + 1, ..squat() },
    ExerciseValidationError::InvalidSets
)]
#[case(ExerciseDraft { reps: 0, ..squat() }, ExerciseValidationError::InvalidReps)]
#[case(
    ExerciseDraft { reps: i64::from(u32::MAX), ..squat() },
    ExerciseValidationError::InvalidReps
)]
#[case(ExerciseDraft { reps: -1, ..squat() }, ExerciseValidationError::InvalidReps)]
#[case(ExerciseDraft { name: "  ".to_owned(), ..squat() }, ExerciseValidationError::EmptyName)]
#[case(ExerciseDraft { weight_kg: Some(-0.5), ..squat() }, ExerciseValidationError::InvalidWeight)]
#[case(
    ExerciseDraft { weight_kg: Some(f64::NAN), ..squat() },
    ExerciseValidationError::InvalidWeight
)]
#[case(ExerciseDraft { weight_kg: Some(1e308), ..squat() }, ExerciseValidationError::InvalidWeight)]
#[case(
    ExerciseDraft { duration_seconds: Some(i64::MAX), ..plank() },
    ExerciseValidationError::InvalidDuration
)]
#[case(
    ExerciseDraft { duration_seconds: Some(0), ..plank() },
    ExerciseValidationError::InvalidDuration
)]
fn exercise_list_reports_failing_index(
    #[case] invalid: ExerciseDraft,
    #[case] expected: ExerciseValidationError,
) {
    let result = ExerciseList::new(vec![plank(), invalid]);
    assert_eq!(
        result,
        Err(WorkoutValidationError::Exercise {
            index: 1,
            source: expected
        })
    );
}

#[rstest]
fn exercise_name_is_trimmed_and_bounded() {
    let list = ExerciseList::new(vec![ExerciseDraft {
        name: "  deadlift ".to_owned(),
        ..squat()
    }])
    .expect("valid list");
    assert_eq!(list.as_slice().first().map(|e| e.name()), Some("deadlift"));

    let result = ExerciseList::new(vec![ExerciseDraft {
        name: "x".repeat(EXERCISE_NAME_MAX + 1),
        ..squat()
    }]);
    assert_eq!(result.map_err(|e| e.code()), Err("too_long"));
}

#[rstest]
fn zero_weight_is_allowed() {
    let list = ExerciseList::new(vec![ExerciseDraft {
        weight_kg: Some(0.0),
        ..squat()
    }]);
    assert!(list.is_ok());
}

#[rstest]
fn validation_error_exposes_details() {
    let error = WorkoutValidationError::Exercise {
        index: 2,
        source: ExerciseValidationError::InvalidReps,
    };
    assert_eq!(error.field(), "reps");
    assert_eq!(error.index(), Some(2));
    assert_eq!(error.code(), "out_of_range");
    assert_eq!(error.to_string(), "exercises[2]: reps must be between 1 and 1000");

    assert_eq!(WorkoutValidationError::NoExercises.field(), "exercises");
    assert_eq!(WorkoutValidationError::NoExercises.index(), None);
}

#[rstest]
#[case(None, None)]
#[case(Some("   "), None)]
#[case(Some(" felt strong "), Some("felt strong"))]
fn notes_are_normalised(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
    let notes = WorkoutNotes::parse(raw.map(str::to_owned)).expect("valid notes");
    assert_eq!(notes.as_ref().map(AsRef::as_ref), expected);
}

#[rstest]
fn notes_enforce_length() {
    let result = WorkoutNotes::parse(Some("n".repeat(NOTES_MAX + 1)));
    assert_eq!(
        result,
        Err(WorkoutValidationError::NotesTooLong { max: NOTES_MAX })
    );
}

#[rstest]
fn draft_materialises_without_update_timestamp(created_at: DateTime<Utc>) {
    let stored = workout(4, vec![squat()], Some(WorkoutCategory::Strength), created_at);
    assert_eq!(stored.id(), WorkoutId::new(4));
    assert_eq!(stored.user_id(), UserId::new(1));
    assert_eq!(stored.category(), Some(WorkoutCategory::Strength));
    assert_eq!(stored.created_at(), created_at);
    assert!(stored.updated_at().is_none());
}

#[rstest]
fn apply_replaces_exercises_and_keeps_omitted_fields(created_at: DateTime<Utc>) {
    let mut stored = workout(1, vec![squat(), plank()], Some(WorkoutCategory::Hiit), created_at);
    let updated_at = created_at + Duration::hours(1);

    stored.apply(WorkoutChanges {
        exercises: ExerciseList::new(vec![plank()]).expect("valid list"),
        category: None,
        notes: WorkoutNotes::parse(Some("core day".to_owned())).expect("valid notes"),
        updated_at,
    });

    assert_eq!(stored.exercises().len(), 1);
    assert_eq!(stored.exercises().first().map(|e| e.name()), Some("plank"));
    assert_eq!(stored.category(), Some(WorkoutCategory::Hiit));
    assert_eq!(stored.notes(), Some("core day"));
    assert_eq!(stored.updated_at(), Some(updated_at));
    assert_eq!(stored.created_at(), created_at);
}

#[rstest]
fn category_serialises_snake_case() {
    for category in WorkoutCategory::ALL {
        let value = serde_json::to_value(category).expect("serialise category");
        assert_eq!(value, serde_json::Value::from(category.as_str()));
    }
    let parsed: WorkoutCategory = serde_json::from_str("\"hiit\"").expect("known category");
    assert_eq!(parsed, WorkoutCategory::Hiit);
    assert!(serde_json::from_str::<WorkoutCategory>("\"pilates\"").is_err());
}

#[rstest]
fn stats_are_empty_without_workouts() {
    let stats = TrainingStats::from_workouts(std::iter::empty());
    assert_eq!(stats, TrainingStats::default());
    assert!(stats.top_category.is_none());
}

#[rstest]
fn stats_sum_across_workouts(created_at: DateTime<Utc>) {
    let workouts = [
        workout(1, vec![squat(), plank()], Some(WorkoutCategory::Strength), created_at),
        workout(2, vec![squat()], Some(WorkoutCategory::Cardio), created_at),
        workout(3, vec![plank()], Some(WorkoutCategory::Cardio), created_at),
        workout(4, vec![plank()], None, created_at),
    ];

    let stats = TrainingStats::from_workouts(&workouts);

    assert_eq!(stats.workout_count, 4);
    assert_eq!(stats.exercise_count, 5);
    assert_eq!(stats.total_sets, 3 + 2 + 3 + 2 + 2);
    assert_eq!(stats.total_reps, 15 + 2 + 15 + 2 + 2);
    assert!((stats.total_volume_kg - 3000.0).abs() < f64::EPSILON);
    assert_eq!(stats.total_duration_seconds, 180);
    assert_eq!(stats.top_category, Some(WorkoutCategory::Cardio));
}

#[rstest]
fn stats_break_category_ties_by_declaration_order(created_at: DateTime<Utc>) {
    let workouts = [
        workout(1, vec![plank()], Some(WorkoutCategory::Yoga), created_at),
        workout(2, vec![plank()], Some(WorkoutCategory::Mobility), created_at),
    ];
    let stats = TrainingStats::from_workouts(&workouts);
    assert_eq!(stats.top_category, Some(WorkoutCategory::Mobility));
}

fn heaviest() -> ExerciseDraft {
    ExerciseDraft {
        name: "sled push".to_owned(),
        sets: i64::from(SETS_MAX),
        reps: i64::from(REPS_MAX),
        weight_kg: Some(WEIGHT_KG_MAX),
        duration_seconds: Some(i64::from(DURATION_SECONDS_MAX)),
    }
}

#[rstest]
fn stats_stay_exact_for_exercises_at_the_limits(created_at: DateTime<Utc>) {
    let workouts = [
        workout(1, vec![heaviest(), heaviest()], None, created_at),
        workout(2, vec![heaviest()], None, created_at),
    ];

    let stats = TrainingStats::from_workouts(&workouts);

    let per_exercise_reps = u64::from(SETS_MAX) * u64::from(REPS_MAX);
    assert_eq!(stats.total_sets, 3 * u64::from(SETS_MAX));
    assert_eq!(stats.total_reps, 3 * per_exercise_reps);
    assert_eq!(stats.total_duration_seconds, 3 * u64::from(DURATION_SECONDS_MAX));
    assert!(stats.total_volume_kg.is_finite());
    assert!((stats.total_volume_kg - 3.0e8).abs() < 1.0);
}

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[rstest]
fn streak_counts_back_from_the_latest_training_day() {
    let workouts = [
        workout(1, vec![plank()], None, at(1, 7)),
        workout(2, vec![plank()], None, at(3, 7)),
        workout(3, vec![plank()], None, at(4, 6)),
        workout(4, vec![plank()], None, at(4, 18)),
        workout(5, vec![plank()], None, at(5, 7)),
    ];

    let stats = TrainingStats::from_workouts(&workouts);

    assert_eq!(
        stats.last_workout_date,
        NaiveDate::from_ymd_opt(2024, 3, 5)
    );
    assert_eq!(stats.streak_days, 3);
}

#[rstest]
fn single_day_is_a_streak_of_one(created_at: DateTime<Utc>) {
    let stats = TrainingStats::from_workouts(&[workout(1, vec![plank()], None, created_at)]);
    assert_eq!(stats.streak_days, 1);
    assert_eq!(stats.last_workout_date, Some(created_at.date_naive()));
}
