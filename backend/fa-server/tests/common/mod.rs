#![allow(dead_code)]

//! Test infrastructure for fa-server API tests

use fa_config::Config;
use fa_core::{Role, Student, StudentEmbedding};
use fa_db::{EmbeddingRepository, MIGRATOR, StudentRepository};
use fa_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";
pub const EMBEDDING_DIM: usize = 4;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

/// Create AppState for testing with small embeddings and a tight login limit
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    config.rate_limit.login_max_requests = 3;
    config.rate_limit.login_window_secs = 60;
    config.recognition.embedding_dim = EMBEDDING_DIM;

    AppState::new(pool, &config, TEST_SECRET)
}

pub fn app(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Bearer token for a fresh user id with `role`
pub fn token_for(state: &AppState, role: Role) -> String {
    state
        .jwt_issuer
        .issue(Uuid::new_v4(), role)
        .expect("Failed to issue token")
}

/// Send a request and return status plus parsed JSON body (Null when empty)
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Insert a student directly
pub async fn create_test_student(pool: &SqlitePool, code: &str, name: &str) -> Student {
    let student = Student::new(code.to_string(), name.to_string());
    StudentRepository::new(pool.clone())
        .create(&student)
        .await
        .expect("Failed to create test student");
    student
}

/// Enrol a unit-axis embedding so each student matches exactly one direction
pub async fn enroll_axis(pool: &SqlitePool, student: &Student, axis: usize) -> Vec<f32> {
    let vector = axis_vector(axis);
    EmbeddingRepository::new(pool.clone())
        .replace(&StudentEmbedding::new(student.id, vector.clone(), None))
        .await
        .expect("Failed to enroll embedding");
    vector
}

pub fn axis_vector(axis: usize) -> Vec<f32> {
    let mut vector = vec![0.0; EMBEDDING_DIM];
    vector[axis] = 1.0;
    vector
}
