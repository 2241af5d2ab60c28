//! Integration tests for the client using a wiremock mock server

use fa_client::{
    ApiClient, AuthForm, AuthMode, AuthOutcome, ClientError, FALLBACK_ERROR, MemoryTokenStore,
    TokenStore,
};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path, query_param},
};

#[tokio::test]
async fn test_fetch_api_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let body = client.fetch_api("/").await;

    assert_eq!(body, Some(json!({ "message": "ok" })));
}

#[tokio::test]
async fn test_fetch_api_non_success_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());

    assert_eq!(client.fetch_api("/").await, None);
}

#[tokio::test]
async fn test_fetch_api_network_failure_is_none() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1");

    assert_eq!(client.fetch_api("/").await, None);
}

#[tokio::test]
async fn test_login_stores_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "t@school.edu", "password": "secret123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-token",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let store = MemoryTokenStore::new();
    let mut form = AuthForm::login("t@school.edu", "secret123");

    let outcome = form.submit(&client, &store).await;

    assert_eq!(outcome, AuthOutcome::LoggedIn);
    assert_eq!(store.get().unwrap(), Some("jwt-token".to_string()));
    assert!(form.password.is_empty());
}

#[tokio::test]
async fn test_register_sends_teacher_role_and_switches_to_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@school.edu",
            "password": "secret123",
            "role": "teacher"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Ada",
            "email": "ada@school.edu",
            "role": "teacher"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let store = MemoryTokenStore::new();
    let mut form = AuthForm::register("Ada", "ada@school.edu", "secret123");

    let outcome = form.submit(&client, &store).await;

    assert_eq!(outcome, AuthOutcome::Registered);
    assert_eq!(form.mode, AuthMode::Login);
    assert!(form.name.is_empty());
    assert!(form.password.is_empty());
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn test_login_failure_shows_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "bad credentials" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let store = MemoryTokenStore::new();
    let mut form = AuthForm::login("t@school.edu", "wrong-pass");

    let outcome = form.submit(&client, &store).await;

    assert_eq!(outcome, AuthOutcome::Failed("bad credentials".to_string()));
    assert_eq!(store.get().unwrap(), None);
    assert!(form.password.is_empty());
}

#[tokio::test]
async fn test_login_failure_without_detail_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let mut form = AuthForm::login("t@school.edu", "secret123");

    let outcome = form.submit(&client, &MemoryTokenStore::new()).await;

    assert_eq!(outcome, AuthOutcome::Failed(FALLBACK_ERROR.to_string()));
}

#[tokio::test]
async fn test_login_network_failure_uses_fallback() {
    let client = ApiClient::new("http://127.0.0.1:1");
    let mut form = AuthForm::login("t@school.edu", "secret123");

    let outcome = form.submit(&client, &MemoryTokenStore::new()).await;

    assert_eq!(outcome, AuthOutcome::Failed(FALLBACK_ERROR.to_string()));
}

#[tokio::test]
async fn test_bearer_token_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "00000000-0000-0000-0000-000000000001",
            "role": "teacher"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_token(Some("jwt-token".into()));
    let me = client.me().await.unwrap();

    assert_eq!(me["role"], "teacher");
}

#[tokio::test]
async fn test_forbidden_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recognition-logs/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "detail": "Access denied. Required roles: teacher, admin",
            "code": "FORBIDDEN"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_token(Some("student-token".into()));
    let err = client.recognition_logs(None, None).await.unwrap_err();

    match err {
        ClientError::Api { status, code, .. } => {
            assert_eq!(status, 403);
            assert_eq!(code.as_deref(), Some("FORBIDDEN"));
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn test_mark_attendance_sends_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/attendance/stu-1"))
        .and(query_param("status", "late"))
        .and(query_param("session_id", "sess-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "late" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_token(Some("t".into()));
    let record = client
        .mark_attendance("stu-1", "sess-1", "late")
        .await
        .unwrap();

    assert_eq!(record["status"], "late");
}

#[tokio::test]
async fn test_take_attendance_posts_images() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recognition/take-attendance"))
        .and(body_string_contains("\"class_session_id\":\"sess-1\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "detected_students": [],
            "attendance_summary": { "present": 0, "absent": 2, "session_id": "sess-1" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_token(Some("t".into()));
    let images = json!([[{ "bbox": [0, 0, 10, 10], "detection_confidence": 0.9, "embedding": [1.0, 0.0] }]]);
    let result = client.take_attendance("sess-1", &images).await.unwrap();

    assert_eq!(result["attendance_summary"]["absent"], 2);
}

#[tokio::test]
async fn test_delete_with_empty_body_is_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/students/S-001"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_token(Some("t".into()));
    let result = client.delete_student("S-001").await.unwrap();

    assert!(result.is_null());
}
