//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests including:
//! - Test store setup (single-connection in-memory SQLite)
//! - Job fixtures seeded out-of-band through the repository
//! - Request helpers returning status + parsed JSON

#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use jobboard_common::Config;
use jobboard_jobs::{Job, JobRepository, NewJob};
use serde_json::Value;
use sqlx::AnyPool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only";

/// Test environment configuration
#[derive(Debug, Clone)]
pub struct TestConfig {
    vars: HashMap<&'static str, String>,
}

impl TestConfig {
    pub fn with_database_url(database_url: &str) -> Self {
        let mut vars = HashMap::new();
        vars.insert("DATABASE_URL", database_url.to_string());
        // One connection, so every query sees the same in-memory database
        vars.insert("DATABASE_MAX_CONNECTIONS", "1".to_string());
        vars.insert("SECRET_KEY", TEST_SECRET.to_string());
        vars.insert("JWT_ISSUER", "jobboard-test".to_string());
        vars.insert("BCRYPT_COST", "4".to_string());
        Self { vars }
    }

    pub fn into_config(self) -> Config {
        Config::from_lookup(|key| self.vars.get(key).cloned())
            .expect("test configuration is valid")
    }
}

/// Test application with its backing store
pub struct TestApp {
    pub config: Config,
    pub pool: AnyPool,
    router: Router,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub async fn new() -> Result<Self> {
        let config = TestConfig::with_database_url("sqlite::memory:").into_config();
        let pool = jobboard_app::init_store(&config).await?;
        let router = jobboard_app::with_middleware(jobboard_app::create_app(&config, pool.clone()));

        Ok(Self {
            config,
            pool,
            router,
        })
    }

    /// Router for `oneshot` requests
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Insert a job posting directly, the way postings arrive out-of-band
    pub async fn seed_job(&self, title: &str, description: &str, company: &str) -> Result<Job> {
        let job = NewJob::new(title, description, company)?;
        Ok(JobRepository::new(self.pool.clone()).create(&job).await?)
    }

    /// Stored password column for `username`
    pub async fn stored_password(&self, username: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(password,)| password))
    }

    pub async fn user_count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// POST a JSON body
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// GET a path
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.post_json(
            "/api/register",
            serde_json::json!({"username": username, "password": password}),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.post_json(
            "/api/login",
            serde_json::json!({"username": username, "password": password}),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }
}
