//! Regression coverage for the in-memory store.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::{
    DisplayName, ExerciseDraft, ExerciseList, MuscleGroup, PlanDetailsDraft, ProgressEntry,
    ProgressEntryDraft,
};
use crate::test_support::fixture_timestamp;

#[fixture]
fn store() -> InMemoryStore {
    InMemoryStore::new()
}

fn user_draft(name: &str, email: &str) -> UserDraft {
    UserDraft {
        name: DisplayName::new(name).expect("valid name"),
        email: EmailAddress::new(email).expect("valid email"),
        created_at: fixture_timestamp(),
    }
}

fn exercises(names: &[&str]) -> ExerciseList {
    ExerciseList::new(
        names
            .iter()
            .map(|name| ExerciseDraft {
                name: (*name).to_owned(),
                sets: 3,
                reps: 8,
                weight_kg: None,
                duration_seconds: None,
            })
            .collect(),
    )
    .expect("valid exercises")
}

fn workout_draft(user_id: UserId, names: &[&str]) -> WorkoutDraft {
    WorkoutDraft {
        user_id,
        exercises: exercises(names),
        category: None,
        notes: None,
        created_at: fixture_timestamp(),
    }
}

fn plan_draft(user_id: UserId) -> WorkoutPlanDraft {
    let details = PlanDetailsDraft {
        name: "Base".to_owned(),
        description: None,
        duration_weeks: 4,
        target_muscle_groups: Vec::new(),
        difficulty_level: 1,
    };
    WorkoutPlanDraft {
        user_id,
        details: PlanDetails::try_from(details).expect("valid details"),
        created_at: fixture_timestamp(),
    }
}

fn progress_draft(user_id: UserId, day: u32) -> ProgressLogDraft {
    let entry = ProgressEntryDraft {
        log_date: NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date"),
        weight_kg: Some(80.0),
        body_fat_percentage: None,
        notes: None,
        measurements: BTreeMap::new(),
    };
    ProgressLogDraft {
        user_id,
        entry: ProgressEntry::try_from(entry).expect("valid entry"),
        created_at: fixture_timestamp(),
    }
}

async fn register(store: &InMemoryStore, name: &str, email: &str) -> User {
    UserRepository::insert(store, user_draft(name, email))
        .await
        .expect("insert user")
}

#[rstest]
#[tokio::test]
async fn user_ids_start_at_one_and_are_not_reused(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    assert_eq!(ada.id(), UserId::new(1));

    assert!(UserRepository::delete(&store, ada.id()).await.expect("delete"));
    let grace = register(&store, "Grace", "grace@example.com").await;
    assert_eq!(grace.id(), UserId::new(2));
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_rejected_and_store_unchanged(store: InMemoryStore) {
    register(&store, "Ada", "ada@example.com").await;

    let result = UserRepository::insert(&store, user_draft("Other", "ADA@example.com")).await;

    assert_eq!(
        result.err(),
        Some(UserRepositoryError::email_taken("ada@example.com"))
    );
    let users = UserRepository::list(&store).await.expect("list users");
    assert_eq!(users.len(), 1);
}

#[rstest]
#[tokio::test]
async fn update_rejects_email_of_another_user(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    register(&store, "Grace", "grace@example.com").await;

    let result = UserRepository::update(
        &store,
        ada.id(),
        UserChanges {
            email: Some(EmailAddress::new("grace@example.com").expect("valid email")),
            ..UserChanges::default()
        },
    )
    .await;

    assert!(matches!(
        result,
        Err(UserRepositoryError::EmailTaken { .. })
    ));
}

#[rstest]
#[tokio::test]
async fn update_allows_keeping_own_email(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;

    let updated = UserRepository::update(
        &store,
        ada.id(),
        UserChanges {
            name: Some(DisplayName::new("Ada King").expect("valid name")),
            email: Some(EmailAddress::new("ada@example.com").expect("valid email")),
            is_active: None,
        },
    )
    .await
    .expect("update succeeds")
    .expect("user exists");

    assert_eq!(updated.name().as_ref(), "Ada King");
    let stored = UserRepository::find_by_id(&store, ada.id())
        .await
        .expect("lookup succeeds");
    assert_eq!(stored, Some(updated));
}

#[rstest]
#[tokio::test]
async fn missing_ids_are_reported_without_error(store: InMemoryStore) {
    let id = UserId::new(99);
    assert!(UserRepository::find_by_id(&store, id).await.expect("lookup").is_none());
    assert!(
        UserRepository::update(&store, id, UserChanges::default())
            .await
            .expect("update")
            .is_none()
    );
    assert!(!UserRepository::delete(&store, id).await.expect("delete"));
    assert!(!WorkoutRepository::delete(&store, WorkoutId::new(99)).await.expect("delete"));
}

#[rstest]
#[tokio::test]
async fn workout_for_unknown_owner_is_rejected(store: InMemoryStore) {
    let result = WorkoutRepository::insert(&store, workout_draft(UserId::new(1), &["squat"])).await;

    assert_eq!(
        result.err(),
        Some(WorkoutRepositoryError::unknown_owner(1_u64))
    );
    let workouts = WorkoutRepository::list(&store).await.expect("list workouts");
    assert!(workouts.is_empty());
}

#[rstest]
#[tokio::test]
async fn workouts_survive_owner_deletion(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    let workout = WorkoutRepository::insert(&store, workout_draft(ada.id(), &["squat"]))
        .await
        .expect("insert workout");

    assert!(UserRepository::delete(&store, ada.id()).await.expect("delete"));

    let orphan = WorkoutRepository::find_by_id(&store, workout.id())
        .await
        .expect("lookup succeeds");
    assert_eq!(orphan, Some(workout));
    assert!(matches!(
        WorkoutRepository::list_by_owner(&store, ada.id()).await,
        Err(WorkoutRepositoryError::UnknownOwner { user_id: 1 })
    ));
}

#[rstest]
#[tokio::test]
async fn list_by_owner_returns_only_their_workouts_in_id_order(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    let grace = register(&store, "Grace", "grace@example.com").await;
    for (owner, name) in [(ada.id(), "squat"), (grace.id(), "row"), (ada.id(), "bench")] {
        WorkoutRepository::insert(&store, workout_draft(owner, &[name]))
            .await
            .expect("insert workout");
    }

    let workouts = WorkoutRepository::list_by_owner(&store, ada.id())
        .await
        .expect("list succeeds");

    let ids: Vec<_> = workouts.iter().map(|w| w.id().get()).collect();
    assert_eq!(ids, [1, 3]);
    let none = WorkoutRepository::list_by_owner(&store, grace.id())
        .await
        .expect("list succeeds");
    assert_eq!(none.len(), 1);
}

#[rstest]
#[tokio::test]
async fn workout_update_replaces_exercises(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    let workout = WorkoutRepository::insert(&store, workout_draft(ada.id(), &["squat", "bench"]))
        .await
        .expect("insert workout");

    let updated = WorkoutRepository::update(
        &store,
        workout.id(),
        WorkoutChanges {
            exercises: exercises(&["deadlift"]),
            category: None,
            notes: None,
            updated_at: fixture_timestamp(),
        },
    )
    .await
    .expect("update succeeds")
    .expect("workout exists");

    let names: Vec<_> = updated.exercises().iter().map(|e| e.name().to_owned()).collect();
    assert_eq!(names, ["deadlift"]);
    assert_eq!(updated.updated_at(), Some(fixture_timestamp()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_with_same_email_admit_one() {
    let store = Arc::new(InMemoryStore::new());
    let handles: Vec<_> = (0..16)
        .map(|n| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let draft = user_draft(&format!("User {n}"), "same@example.com");
                UserRepository::insert(store.as_ref(), draft).await.is_ok()
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("task completes") {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    let users = UserRepository::list(store.as_ref()).await.expect("list users");
    assert_eq!(users.len(), 1);
}

#[rstest]
#[tokio::test]
async fn poisoned_lock_surfaces_as_query_error(store: InMemoryStore) {
    let store = Arc::new(store);
    let poisoner = Arc::clone(&store);
    let outcome = std::thread::spawn(move || {
        let _guard = poisoner.state.lock().expect("lock is healthy");
        panic!("poison the store");
    })
    .join();
    assert!(outcome.is_err());

    let result = UserRepository::list(store.as_ref()).await;
    assert_eq!(result.err(), Some(UserRepositoryError::query(POISONED)));
}

#[rstest]
#[tokio::test]
async fn catalogue_entries_are_replaced_in_place(store: InMemoryStore) {
    let entry = CatalogueEntry::new("Squat", None, vec![MuscleGroup::Legs], None)
        .expect("valid entry");
    let stored = CatalogueRepository::insert(&store, entry)
        .await
        .expect("insert entry");
    assert_eq!(stored.id(), CatalogueExerciseId::new(1));

    let replacement = CatalogueEntry::new("Front squat", None, vec![MuscleGroup::Core], None)
        .expect("valid entry");
    let updated = CatalogueRepository::update(&store, stored.id(), replacement)
        .await
        .expect("update succeeds")
        .expect("entry exists");

    assert_eq!(updated.id(), stored.id());
    assert!(updated.targets(MuscleGroup::Core));
    assert!(CatalogueRepository::delete(&store, stored.id()).await.expect("delete"));
    assert!(
        CatalogueRepository::list(&store)
            .await
            .expect("list entries")
            .is_empty()
    );
}

#[rstest]
#[tokio::test]
async fn plan_for_unknown_owner_is_rejected(store: InMemoryStore) {
    let result = WorkoutPlanRepository::insert(&store, plan_draft(UserId::new(3))).await;

    assert_eq!(
        result.err(),
        Some(WorkoutPlanRepositoryError::unknown_owner(3_u64))
    );
}

#[rstest]
#[tokio::test]
async fn adding_workouts_checks_both_sides_and_is_idempotent(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    let plan = WorkoutPlanRepository::insert(&store, plan_draft(ada.id()))
        .await
        .expect("insert plan");
    let workout = WorkoutRepository::insert(&store, workout_draft(ada.id(), &["squat"]))
        .await
        .expect("insert workout");

    for _ in 0..2 {
        WorkoutPlanRepository::add_workout(&store, plan.id(), workout.id())
            .await
            .expect("add succeeds")
            .expect("plan exists");
    }
    let stored = WorkoutPlanRepository::find_by_id(&store, plan.id())
        .await
        .expect("lookup succeeds")
        .expect("plan exists");
    assert_eq!(stored.workouts(), [workout.id()]);

    assert_eq!(
        WorkoutPlanRepository::add_workout(&store, plan.id(), WorkoutId::new(9))
            .await
            .err(),
        Some(WorkoutPlanRepositoryError::unknown_workout(9_u64))
    );
    assert_eq!(
        WorkoutPlanRepository::add_workout(&store, WorkoutPlanId::new(9), workout.id())
            .await
            .expect("lookup succeeds"),
        None
    );
}

#[rstest]
#[tokio::test]
async fn deleting_a_workout_detaches_it_from_plans(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    let plan = WorkoutPlanRepository::insert(&store, plan_draft(ada.id()))
        .await
        .expect("insert plan");
    for name in ["squat", "row"] {
        let workout = WorkoutRepository::insert(&store, workout_draft(ada.id(), &[name]))
            .await
            .expect("insert workout");
        WorkoutPlanRepository::add_workout(&store, plan.id(), workout.id())
            .await
            .expect("add succeeds");
    }

    assert!(WorkoutRepository::delete(&store, WorkoutId::new(1)).await.expect("delete"));

    let stored = WorkoutPlanRepository::find_by_id(&store, plan.id())
        .await
        .expect("lookup succeeds")
        .expect("plan exists");
    assert_eq!(stored.workouts(), [WorkoutId::new(2)]);
}

#[rstest]
#[tokio::test]
async fn plan_update_keeps_workouts_and_removal_tolerates_absent_ids(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    let plan = WorkoutPlanRepository::insert(&store, plan_draft(ada.id()))
        .await
        .expect("insert plan");
    let workout = WorkoutRepository::insert(&store, workout_draft(ada.id(), &["squat"]))
        .await
        .expect("insert workout");
    WorkoutPlanRepository::add_workout(&store, plan.id(), workout.id())
        .await
        .expect("add succeeds");

    let details = plan_draft(ada.id()).details;
    let updated = WorkoutPlanRepository::update(&store, plan.id(), details)
        .await
        .expect("update succeeds")
        .expect("plan exists");
    assert_eq!(updated.workouts(), [workout.id()]);

    let unchanged = WorkoutPlanRepository::remove_workout(&store, plan.id(), WorkoutId::new(9))
        .await
        .expect("remove succeeds")
        .expect("plan exists");
    assert_eq!(unchanged.workouts(), [workout.id()]);
}

#[rstest]
#[tokio::test]
async fn progress_logs_are_ordered_by_log_date(store: InMemoryStore) {
    let ada = register(&store, "Ada", "ada@example.com").await;
    for day in [5, 2, 9, 2] {
        ProgressLogRepository::insert(&store, progress_draft(ada.id(), day))
            .await
            .expect("insert log");
    }

    let logs = ProgressLogRepository::list_by_owner(&store, ada.id())
        .await
        .expect("list succeeds");

    let ids: Vec<_> = logs.iter().map(|log| log.id().get()).collect();
    assert_eq!(ids, [2, 4, 1, 3]);
}

#[rstest]
#[tokio::test]
async fn progress_logs_require_an_existing_owner(store: InMemoryStore) {
    let result = ProgressLogRepository::insert(&store, progress_draft(UserId::new(1), 1)).await;
    assert_eq!(
        result.err(),
        Some(ProgressLogRepositoryError::unknown_owner(1_u64))
    );

    let ada = register(&store, "Ada", "ada@example.com").await;
    let log = ProgressLogRepository::insert(&store, progress_draft(ada.id(), 1))
        .await
        .expect("insert log");
    assert!(UserRepository::delete(&store, ada.id()).await.expect("delete"));

    assert!(
        ProgressLogRepository::find_by_id(&store, log.id())
            .await
            .expect("lookup succeeds")
            .is_some()
    );
    assert!(matches!(
        ProgressLogRepository::list_by_owner(&store, ada.id()).await,
        Err(ProgressLogRepositoryError::UnknownOwner { user_id: 1 })
    ));
}
