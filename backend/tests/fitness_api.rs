//! End-to-end tests for the fitness HTTP API over a fresh in-memory store.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use fitness_backend::inbound::http::configure;
use fitness_backend::inbound::http::health::HealthState;
use fitness_backend::middleware::{PROCESS_TIME_HEADER, ProcessTime};
use fitness_backend::test_support::{fixed_clock, in_memory_state};
use fitness_backend::{TRACE_ID_HEADER, Trace};
use rstest::rstest;
use serde_json::{Value, json};

async fn app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(HealthState::new()))
            .app_data(web::Data::new(in_memory_state(fixed_clock())))
            .wrap(ProcessTime)
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn call(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    request: test::TestRequest,
) -> (StatusCode, Value) {
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, value)
}

fn ada() -> Value {
    json!({ "name": "Ada", "email": "ada@example.com" })
}

fn squat(user_id: u64) -> Value {
    json!({
        "user_id": user_id,
        "exercises": [{ "name": "squat", "sets": 3, "reps": 5, "weight_kg": 80.0 }]
    })
}

#[actix_web::test]
async fn orphaned_workouts_remain_retrievable() {
    let app = app().await;

    let (status, user) = call(&app, test::TestRequest::post().uri("/users").set_json(ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user.get("id"), Some(&json!(1)));

    let (status, created) =
        call(&app, test::TestRequest::post().uri("/workouts").set_json(squat(1))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.get("id"), Some(&json!(1)));

    let (status, fetched) = call(&app, test::TestRequest::get().uri("/workouts/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, _) = call(&app, test::TestRequest::delete().uri("/users/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, orphan) = call(&app, test::TestRequest::get().uri("/workouts/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orphan, created);

    let (status, _) = call(&app, test::TestRequest::get().uri("/workouts?user_id=1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn registered_user_resolves_by_id() {
    let app = app().await;

    let (_, user) = call(&app, test::TestRequest::post().uri("/users").set_json(ada())).await;
    let id = user.get("id").and_then(Value::as_u64).expect("numeric id");

    let (status, fetched) =
        call(&app, test::TestRequest::get().uri(&format!("/users/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, user);
}

#[actix_web::test]
async fn second_registration_with_same_email_conflicts() {
    let app = app().await;

    let (first, _) = call(&app, test::TestRequest::post().uri("/users").set_json(ada())).await;
    let (second, error) = call(&app, test::TestRequest::post().uri("/users").set_json(ada())).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(error.get("code"), Some(&json!("conflict")));
    let (_, users) = call(&app, test::TestRequest::get().uri("/users")).await;
    assert_eq!(users.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn workout_for_missing_user_leaves_store_unchanged() {
    let app = app().await;

    let (status, error) =
        call(&app, test::TestRequest::post().uri("/workouts").set_json(squat(42))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.get("message"), Some(&json!("user 42 not found")));
    let (_, workouts) = call(&app, test::TestRequest::get().uri("/workouts")).await;
    assert_eq!(workouts, json!([]));
}

#[actix_web::test]
async fn update_is_reflected_by_get() {
    let app = app().await;
    call(&app, test::TestRequest::post().uri("/users").set_json(ada())).await;
    call(&app, test::TestRequest::post().uri("/workouts").set_json(squat(1))).await;

    let replacement = json!({
        "exercises": [{ "name": "run", "sets": 1, "reps": 1, "duration_seconds": 1800 }],
        "category": "cardio"
    });
    let (status, updated) = call(
        &app,
        test::TestRequest::put().uri("/workouts/1").set_json(replacement),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = call(&app, test::TestRequest::get().uri("/workouts/1")).await;
    assert_eq!(fetched, updated);
    assert_eq!(
        fetched.pointer("/exercises/0/name").and_then(Value::as_str),
        Some("run")
    );
    assert_eq!(fetched.get("exercises").and_then(Value::as_array).map(Vec::len), Some(1));
    assert_eq!(fetched.get("category"), Some(&json!("cardio")));
}

#[rstest]
#[case("/healthz")]
#[case("/users/1")]
#[case("/workouts/abc")]
#[actix_web::test]
async fn every_response_carries_trace_and_timing_headers(#[case] uri: &str) {
    let app = app().await;

    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let elapsed = response
        .headers()
        .get(PROCESS_TIME_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<f64>().ok());
    assert!(elapsed.is_some_and(|seconds| seconds >= 0.0));
}

#[actix_web::test]
async fn healthz_is_always_ok() {
    let app = app().await;

    for _ in 0..3 {
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(test::read_body(response).await.as_ref(), b"ok");
    }
}

#[actix_web::test]
async fn a_training_block_ties_catalogue_plans_and_progress_together() {
    let app = app().await;
    call(&app, test::TestRequest::post().uri("/users").set_json(ada())).await;

    let (status, entry) = call(
        &app,
        test::TestRequest::post().uri("/exercises").set_json(json!({
            "name": "Back squat",
            "muscle_groups": ["legs", "core"],
            "equipment_needed": "barbell"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(entry.get("id"), Some(&json!(1)));
    let (status, legs) = call(
        &app,
        test::TestRequest::get().uri("/exercises/muscle-group/legs"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(legs, json!([entry]));

    for _ in 0..2 {
        call(&app, test::TestRequest::post().uri("/workouts").set_json(squat(1))).await;
    }
    let (status, plan) = call(
        &app,
        test::TestRequest::post().uri("/workout-plans").set_json(json!({
            "user_id": 1,
            "name": "Squat block",
            "duration_weeks": 6,
            "difficulty_level": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(plan.get("workouts"), Some(&json!([])));
    for workout_id in [1, 2] {
        let (status, _) = call(
            &app,
            test::TestRequest::post().uri(&format!("/workout-plans/1/workouts/{workout_id}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    call(&app, test::TestRequest::delete().uri("/workouts/2")).await;
    let (_, plan) = call(&app, test::TestRequest::get().uri("/workout-plans/1")).await;
    assert_eq!(plan.get("workouts"), Some(&json!([1])));

    for (log_date, weight) in [("2024-03-08", 81.2), ("2024-03-01", 82.0)] {
        let (status, _) = call(
            &app,
            test::TestRequest::post().uri("/progress/logs").set_json(json!({
                "user_id": 1,
                "log_date": log_date,
                "weight_kg": weight
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, logs) = call(
        &app,
        test::TestRequest::get().uri("/progress/logs?user_id=1&to_date=2024-03-07"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logs.pointer("/0/weight_kg"), Some(&json!(82.0)));
    assert_eq!(logs.as_array().map(Vec::len), Some(1));

    let (_, stats) = call(&app, test::TestRequest::get().uri("/users/1/stats")).await;
    assert_eq!(stats.get("workout_count"), Some(&json!(1)));
    assert_eq!(stats.get("streak_days"), Some(&json!(1)));
}
