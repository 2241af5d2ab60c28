use crate::ApiError;

use fa_auth::AuthError;
use fa_core::CoreError;
use fa_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::{StatusCode, header};
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_detail_and_code() {
    // Given
    let error = ApiError::not_found("Student not found");

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["detail"].as_str(), some(eq("Student not found")));
    assert_that!(json["code"].as_str(), some(eq("NOT_FOUND")));
}

#[tokio::test]
async fn given_unauthorized_when_rendered_then_www_authenticate_header_set() {
    // Given
    let error = ApiError::unauthorized("Not authenticated");

    // When
    let response = error.into_response();

    // Then
    assert_that!(response.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(
        response.headers().get(header::WWW_AUTHENTICATE).map(|v| v.as_bytes()),
        some(eq(b"Bearer".as_slice()))
    );
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500() {
    // Given
    let error = ApiError::internal("Database operation failed");

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["code"].as_str(), some(eq("INTERNAL_ERROR")));
}

#[test]
fn given_missing_header_when_converted_then_not_authenticated() {
    // Given
    let error = AuthError::MissingHeader { location: here() };

    // When
    let api: ApiError = error.into();

    // Then
    assert_that!(api.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(api.to_string(), contains_substring("Not authenticated"));
}

#[test]
fn given_expired_token_when_converted_then_invalid_or_expired() {
    // Given
    let error = AuthError::TokenExpired { location: here() };

    // When
    let api: ApiError = error.into();

    // Then
    assert_that!(api.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(api.to_string(), contains_substring("Invalid or expired token"));
}

#[test]
fn given_forbidden_when_converted_then_403_lists_roles() {
    // Given
    let error = AuthError::Forbidden {
        required: "teacher, admin".to_string(),
        location: here(),
    };

    // When
    let api: ApiError = error.into();

    // Then
    assert_that!(api.status(), eq(StatusCode::FORBIDDEN));
    assert_that!(
        api.to_string(),
        contains_substring("Access denied. Required roles: teacher, admin")
    );
}

#[test]
fn given_rate_limit_when_converted_then_429() {
    // Given
    let error = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: here(),
    };

    // When
    let api: ApiError = error.into();

    // Then
    assert_that!(api.status(), eq(StatusCode::TOO_MANY_REQUESTS));
}

#[test]
fn given_core_validation_when_converted_then_400_keeps_message() {
    // Given
    let error = CoreError::Validation {
        message: "name cannot be empty".to_string(),
        location: here(),
    };

    // When
    let api: ApiError = error.into();

    // Then
    assert_that!(api.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(api.to_string(), contains_substring("name cannot be empty"));
}

#[test]
fn given_db_conflict_when_converted_then_400() {
    // Given
    let error = DbError::Conflict {
        message: "UNIQUE constraint failed: students.student_id".to_string(),
        location: here(),
    };

    // When
    let api: ApiError = error.into();

    // Then
    assert_that!(api.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(api.to_string(), not(contains_substring("UNIQUE")));
}

#[test]
fn given_db_migration_failure_when_converted_then_internal_hides_details() {
    // Given
    let error = DbError::Migration {
        message: "table students already exists".to_string(),
        location: here(),
    };

    // When
    let api: ApiError = error.into();

    // Then
    assert_that!(api.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(api.to_string(), not(contains_substring("students")));
}

#[test]
fn given_bad_uuid_when_converted_then_validation() {
    // Given
    let error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();

    // When
    let api: ApiError = error.into();

    // Then
    assert_that!(api.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(api.to_string(), contains_substring("Invalid UUID format"));
}
