//! Integration tests for health endpoints
mod common;

use crate::common::{app, create_test_app_state, send};

use axum::http::StatusCode;
use googletest::prelude::*;

#[tokio::test]
async fn given_running_server_when_root_then_message() {
    // Given
    let state = create_test_app_state().await;

    // When
    let (status, body) = send(app(&state), "GET", "/", None, None).await;

    // Then
    assert_that!(status, eq(StatusCode::OK));
    assert_that!(
        body["message"].as_str(),
        some(eq("Backend is running successfully"))
    );
}

#[tokio::test]
async fn given_open_database_when_health_then_healthy() {
    // Given
    let state = create_test_app_state().await;

    // When
    let (status, body) = send(app(&state), "GET", "/health", None, None).await;

    // Then
    assert_that!(status, eq(StatusCode::OK));
    assert_that!(body["status"].as_str(), some(eq("healthy")));
    assert_that!(body["components"]["database"].as_str(), some(eq("operational")));
}

#[tokio::test]
async fn given_closed_pool_when_ready_then_503() {
    // Given
    let state = create_test_app_state().await;
    state.pool.close().await;

    // When
    let (status, _) = send(app(&state), "GET", "/ready", None, None).await;

    // Then
    assert_that!(status, eq(StatusCode::SERVICE_UNAVAILABLE));
}
