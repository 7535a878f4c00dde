//! Job listing endpoint integration tests
//!
//! - GET /api/jobs

use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestApp;

fn as_set(body: &Value) -> HashSet<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|job| job.to_string())
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_list_jobs_empty() {
    let app = TestApp::new().await.unwrap();

    let (status, body) = app.get("/api/jobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[test_log::test(tokio::test)]
async fn test_list_jobs_returns_every_posting() {
    let app = TestApp::new().await.unwrap();
    let rust = app
        .seed_job("Rust Engineer", "Build services", "Acme")
        .await
        .unwrap();
    let sre = app
        .seed_job("SRE", "Keep them running", "Globex")
        .await
        .unwrap();

    let (status, body) = app.get("/api/jobs").await;

    assert_eq!(status, StatusCode::OK);
    let expected: HashSet<String> = [
        json!({"id": rust.id, "title": "Rust Engineer", "description": "Build services", "company": "Acme"}),
        json!({"id": sre.id, "title": "SRE", "description": "Keep them running", "company": "Globex"}),
    ]
    .iter()
    .map(|job| job.to_string())
    .collect();
    assert_eq!(as_set(&body), expected);
}

#[test_log::test(tokio::test)]
async fn test_list_jobs_is_idempotent() {
    let app = TestApp::new().await.unwrap();
    for i in 0..5 {
        app.seed_job(&format!("Job {i}"), "Description", "Company")
            .await
            .unwrap();
    }

    let (_, first) = app.get("/api/jobs").await;
    let (_, second) = app.get("/api/jobs").await;

    assert_eq!(first.as_array().unwrap().len(), 5);
    assert_eq!(as_set(&first), as_set(&second));
}

#[test_log::test(tokio::test)]
async fn test_list_jobs_ignores_request_body_and_users() {
    let app = TestApp::new().await.unwrap();
    app.register("alice", "secret1").await;

    let (status, body) = app.get("/api/jobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[test_log::test(tokio::test)]
async fn test_jobs_route_rejects_post() {
    let app = TestApp::new().await.unwrap();

    let (status, _) = app.post_json("/api/jobs", json!({"title": "x"})).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
