mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_wipe_removes_all_data() {
    let db = common::setup_test_db();
    common::seed_two_sessions(&db).await;
    let app = common::create_test_app(db.clone());

    let (status, body) = common::post_json(app.clone(), "/settings/wipe", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    // In-memory stores have no backing file
    assert_eq!(body, json!({"existed": false}));

    let (status, body) = common::get_json(app, "/stats/bodyweight").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert!(db.is_open());
}

#[tokio::test]
async fn test_store_usable_after_wipe() {
    let db = common::setup_test_db();
    common::seed_two_sessions(&db).await;
    db.wipe().unwrap();

    common::create_test_workout(&db, common::date(2024, 5, 1), 79.0, &[("Squat", "150x1")]).await;
    let app = common::create_test_app(db);

    let (_, body) = common::get_json(app, "/graphs/exercises").await;
    assert_eq!(body, json!(["Squat"]));
}

#[tokio::test]
async fn test_health_reports_database_state() {
    let db = common::setup_test_db();
    let app = common::create_test_app(db.clone());

    let (status, body) = common::get_json(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "open");

    db.close().unwrap();
    let (_, body) = common::get_json(app, "/health").await;
    assert_eq!(body["database"], "closed");
}
