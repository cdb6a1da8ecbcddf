mod common;

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_list_measurements_empty() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/data")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_batch_insert_skips_empty_values() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let squat = common::create_test_exercise(&pool, "Squat").await;
    let bench = common::create_test_exercise(&pool, "Bench Press").await;
    let row = common::create_test_exercise(&pool, "Row").await;

    let data: HashMap<String, String> = HashMap::from([
        (squat.id.to_string(), "50".to_string()),
        (bench.id.to_string(), "".to_string()),
        (row.id.to_string(), "30".to_string()),
    ]);
    let payload = json!({"date": "2024-01-01", "data": data});

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/data")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({"inserted": 2}));
}

#[tokio::test]
async fn test_batch_insert_failures_do_not_fail_request() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let squat = common::create_test_exercise(&pool, "Squat").await;

    // One good row, one unknown exercise, one non-numeric id. Only the
    // good row counts; the request still succeeds.
    let data: HashMap<String, String> = HashMap::from([
        (squat.id.to_string(), "80".to_string()),
        ("9999".to_string(), "10".to_string()),
        ("not-an-id".to_string(), "5".to_string()),
    ]);
    let payload = json!({"date": "2024-01-01", "data": data});

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/data")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({"inserted": 1}));
}

#[tokio::test]
async fn test_list_orders_date_desc_then_name_asc() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let squat = common::create_test_exercise(&pool, "Squat").await;
    let bench = common::create_test_exercise(&pool, "Bench Press").await;
    common::insert_test_measurement(&pool, squat.id, "2024-01-01", 100.0);
    common::insert_test_measurement(&pool, bench.id, "2024-01-01", 60.0);
    common::insert_test_measurement(&pool, squat.id, "2024-01-08", 105.0);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/data")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    let rows = json.as_array().unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["date"], "2024-01-08");
    assert_eq!(rows[0]["exercise"], "Squat");
    assert_eq!(rows[1]["date"], "2024-01-01");
    assert_eq!(rows[1]["exercise"], "Bench Press");
    assert_eq!(rows[2]["date"], "2024-01-01");
    assert_eq!(rows[2]["exercise"], "Squat");
}

#[tokio::test]
async fn test_delete_measurement_returns_count() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let squat = common::create_test_exercise(&pool, "Squat").await;
    let id = common::insert_test_measurement(&pool, squat.id, "2024-01-01", 100.0);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/data/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({"deleted": 1}));
}

#[tokio::test]
async fn test_delete_missing_measurement_returns_zero() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/data/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({"deleted": 0}));
}
