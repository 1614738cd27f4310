//! Tests for workout HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::inbound::http::configure;
use crate::test_support::{fixed_clock, fixture_timestamp, in_memory_state};

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(in_memory_state(fixed_clock())))
        .configure(configure)
}

async fn send(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    request: actix_test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    actix_test::call_service(app, request.to_request()).await
}

async fn register_user(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    email: &str,
) {
    let response = send(
        app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ada", "email": email })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

fn squat_workout(user_id: u64) -> Value {
    json!({
        "user_id": user_id,
        "exercises": [
            { "name": "squat", "sets": 3, "reps": 5, "weight_kg": 100.0 }
        ],
        "category": "strength",
        "notes": "felt strong"
    })
}

#[actix_web::test]
async fn create_then_get_returns_the_same_workout() {
    let app = actix_test::init_service(test_app()).await;
    register_user(&app, "ada@example.com").await;

    let response = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/workouts")
            .set_json(squat_workout(1)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: WorkoutResponse = actix_test::read_body_json(response).await;

    assert_eq!(
        created,
        WorkoutResponse {
            id: 1,
            user_id: 1,
            exercises: vec![ExerciseResponse {
                name: "squat".to_owned(),
                sets: 3,
                reps: 5,
                weight_kg: Some(100.0),
                duration_seconds: None,
            }],
            category: Some(WorkoutCategory::Strength),
            notes: Some("felt strong".to_owned()),
            created_at: fixture_timestamp(),
            updated_at: None,
        }
    );

    let fetched: WorkoutResponse = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/workouts/1").to_request(),
    )
    .await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn create_for_unknown_user_is_not_found_and_stores_nothing() {
    let app = actix_test::init_service(test_app()).await;

    let response = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/workouts")
            .set_json(squat_workout(7)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let all: Vec<WorkoutResponse> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/workouts").to_request(),
    )
    .await;
    assert!(all.is_empty());
}

#[rstest]
#[case(json!([]), "exercises", "empty")]
#[case(json!([{ "name": "squat", "sets": 0, "reps": 5 }]), "sets", "out_of_range")]
#[case(json!([{ "name": "squat", "sets": 3, "reps": -1 }]), "reps", "out_of_range")]
#[case(json!([{ "name": "  ", "sets": 3, "reps": 5 }]), "name", "empty")]
#[case(
    json!([{ "name": "squat", "sets": 3, "reps": 5, "weight_kg": 1e308 }]),
    "weight_kg",
    "out_of_range"
)]
#[actix_web::test]
async fn create_rejects_invalid_exercises(
    #[case] exercises: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app()).await;
    register_user(&app, "ada@example.com").await;

    let response = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/workouts")
            .set_json(json!({ "user_id": 1, "exercises": exercises })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.pointer("/details/field").and_then(Value::as_str), Some(field));
    assert_eq!(body.pointer("/details/code").and_then(Value::as_str), Some(code));
}

#[rstest]
#[case(actix_test::TestRequest::put())]
#[case(actix_test::TestRequest::patch())]
#[actix_web::test]
async fn update_replaces_exercises_exactly(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app()).await;
    register_user(&app, "ada@example.com").await;
    send(
        &app,
        actix_test::TestRequest::post()
            .uri("/workouts")
            .set_json(squat_workout(1)),
    )
    .await;

    let updated: WorkoutResponse = actix_test::call_and_read_body_json(
        &app,
        request
            .uri("/workouts/1")
            .set_json(json!({
                "exercises": [
                    { "name": "row", "sets": 4, "reps": 10 },
                    { "name": "plank", "sets": 1, "reps": 1, "duration_seconds": 60 }
                ]
            }))
            .to_request(),
    )
    .await;

    let names: Vec<_> = updated.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["row", "plank"]);
    assert_eq!(updated.category, Some(WorkoutCategory::Strength));
    assert_eq!(updated.notes.as_deref(), Some("felt strong"));
    assert_eq!(updated.updated_at, Some(fixture_timestamp()));

    let fetched: WorkoutResponse = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/workouts/1").to_request(),
    )
    .await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn list_filters_by_user_and_category() {
    let app = actix_test::init_service(test_app()).await;
    register_user(&app, "ada@example.com").await;
    register_user(&app, "grace@example.com").await;
    for (user_id, category) in [(1, "strength"), (2, "strength"), (1, "cardio")] {
        let mut workout = squat_workout(user_id);
        workout["category"] = json!(category);
        send(
            &app,
            actix_test::TestRequest::post().uri("/workouts").set_json(workout),
        )
        .await;
    }

    let mine: Vec<WorkoutResponse> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/workouts?user_id=1")
            .to_request(),
    )
    .await;
    let ids: Vec<_> = mine.iter().map(|w| w.id).collect();
    assert_eq!(ids, [1, 3]);

    let strength: Vec<WorkoutResponse> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/workouts?category=strength")
            .to_request(),
    )
    .await;
    let ids: Vec<_> = strength.iter().map(|w| w.id).collect();
    assert_eq!(ids, [1, 2]);
}

#[rstest]
#[case("/workouts?user_id=abc", StatusCode::BAD_REQUEST)]
#[case("/workouts?category=pilates", StatusCode::BAD_REQUEST)]
#[case("/workouts?user_id=9", StatusCode::NOT_FOUND)]
#[case("/workouts/9", StatusCode::NOT_FOUND)]
#[case("/workouts/nine", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn rejects_bad_queries_and_unknown_ids(#[case] uri: &str, #[case] expected: StatusCode) {
    let app = actix_test::init_service(test_app()).await;

    let response = send(&app, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(response.status(), expected);
}

#[actix_web::test]
async fn delete_then_get_is_not_found() {
    let app = actix_test::init_service(test_app()).await;
    register_user(&app, "ada@example.com").await;
    send(
        &app,
        actix_test::TestRequest::post()
            .uri("/workouts")
            .set_json(squat_workout(1)),
    )
    .await;

    let deleted = send(&app, actix_test::TestRequest::delete().uri("/workouts/1")).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let fetched = send(&app, actix_test::TestRequest::get().uri("/workouts/1")).await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
    let again = send(&app, actix_test::TestRequest::delete().uri("/workouts/1")).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn stats_summarise_recorded_workouts() {
    let app = actix_test::init_service(test_app()).await;
    register_user(&app, "ada@example.com").await;
    for _ in 0..2 {
        send(
            &app,
            actix_test::TestRequest::post()
                .uri("/workouts")
                .set_json(squat_workout(1)),
        )
        .await;
    }

    let stats: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/users/1/stats").to_request(),
    )
    .await;

    assert_eq!(stats.get("workout_count"), Some(&json!(2)));
    assert_eq!(stats.get("total_sets"), Some(&json!(6)));
    assert_eq!(stats.get("total_reps"), Some(&json!(30)));
    assert_eq!(stats.get("total_volume_kg"), Some(&json!(3000.0)));
    assert_eq!(stats.get("top_category"), Some(&json!("strength")));
    assert_eq!(stats.get("last_workout_date"), Some(&json!("2026-01-01")));
    assert_eq!(stats.get("streak_days"), Some(&json!(1)));
}

#[actix_web::test]
async fn oversized_counts_are_rejected_and_stats_stay_available() {
    let app = actix_test::init_service(test_app()).await;
    register_user(&app, "ada@example.com").await;
    let huge = json!({ "name": "squat", "sets": u32::MAX, "reps": u32::MAX });

    let response = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/workouts")
            .set_json(json!({ "user_id": 1, "exercises": [huge.clone(), huge] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.pointer("/details/field").and_then(Value::as_str), Some("sets"));
    assert_eq!(body.pointer("/details/index").and_then(Value::as_u64), Some(0));

    let stats = send(&app, actix_test::TestRequest::get().uri("/users/1/stats")).await;
    assert_eq!(stats.status(), StatusCode::OK);
    let stats: Value = actix_test::read_body_json(stats).await;
    assert_eq!(stats.get("workout_count"), Some(&json!(0)));
    assert_eq!(stats.get("total_reps"), Some(&json!(0)));
    assert_eq!(stats.get("streak_days"), Some(&json!(0)));
    assert_eq!(stats.get("last_workout_date"), Some(&Value::Null));
}
