//! End-to-end walk through the whole API surface

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[test_log::test(tokio::test)]
async fn test_register_login_and_list_scenario() {
    let app = TestApp::new().await.unwrap();

    let (status, body) = app.register("alice", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Sign-up successful!"}));

    let (status, body) = app.register("alice", "secret1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Username already taken."}));

    let (status, body) = app.login("alice", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid username or password."}));

    let (status, body) = app.login("alice", "secret1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert!(!body["access_token"].as_str().unwrap().is_empty());

    let (status, body) = app.get("/api/jobs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
