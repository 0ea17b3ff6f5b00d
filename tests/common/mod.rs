#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use liftbook::catalog::{BundledCatalog, ExerciseCatalog};
use liftbook::db::Database;
use liftbook::handlers::{catalog, health, settings, stats, workouts};
use liftbook::models::{ExerciseWithSets, NewWorkoutExercise, WorkoutExercise, WorkoutSession};
use liftbook::repositories::{ExerciseRepository, SessionRepository, WorkoutRepository};

pub fn setup_test_db() -> Database {
    Database::open_in_memory().expect("Failed to create test database")
}

pub fn create_test_app(db: Database) -> Router {
    let session_repo = SessionRepository::new(db.clone());
    let exercise_repo = ExerciseRepository::new(db.clone());
    let workout_repo = WorkoutRepository::new(db.clone());

    liftbook::routes::create_router(
        health::HealthState { db: db.clone() },
        workouts::WorkoutsState { workout_repo },
        stats::StatsState {
            session_repo,
            exercise_repo,
        },
        catalog::CatalogState {
            catalog: Arc::new(ExerciseCatalog::loaded(&BundledCatalog)),
        },
        settings::SettingsState { db },
    )
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// Test data creation helpers
pub async fn create_test_workout(
    db: &Database,
    date: NaiveDate,
    bodyweight: f64,
    exercises: &[(&str, &str)],
) -> (WorkoutSession, Vec<WorkoutExercise>) {
    let exercises = exercises
        .iter()
        .map(|(name, sets)| ExerciseWithSets::new(*name, *sets))
        .collect();
    WorkoutRepository::new(db.clone())
        .save_workout(date, bodyweight, exercises)
        .await
        .unwrap()
}

pub async fn create_orphan_exercise(db: &Database, name: &str, sets: &str) -> WorkoutExercise {
    ExerciseRepository::new(db.clone())
        .save(NewWorkoutExercise {
            name: name.to_string(),
            sets: sets.to_string(),
            session_id: None,
        })
        .await
        .unwrap()
}

/// Sessions 2024-01-01 (80 kg) and 2024-01-02 (82 kg): bench press on both
/// days, squats on the first.
pub async fn seed_two_sessions(db: &Database) {
    create_test_workout(
        db,
        date(2024, 1, 1),
        80.0,
        &[("Bench Press", "100x5-110x4"), ("Squat", "140x5")],
    )
    .await;
    create_test_workout(db, date(2024, 1, 2), 82.0, &[("Bench Press", "120x3")]).await;
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

/// Non-JSON bodies (plain-text errors) come back as a JSON string.
async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&body).into()));
    (status, value)
}
