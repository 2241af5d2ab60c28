use crate::ApiClient;

use serde_json::json;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = ApiClient::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = ApiClient::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_token_stored() {
    let client = ApiClient::new("http://localhost:8000").with_token(Some("abc".into()));
    assert!(client.has_token());
}

#[test]
fn test_empty_token_ignored() {
    let client = ApiClient::new("http://localhost:8000").with_token(Some(String::new()));
    assert!(!client.has_token());
}

#[test]
fn test_detail_of_string() {
    let body = json!({ "detail": "bad credentials", "code": "BAD_REQUEST" });
    assert_eq!(ApiClient::detail_of(&body), Some("bad credentials".to_string()));
}

#[test]
fn test_detail_of_validation_list_uses_first_msg() {
    let body = json!({ "detail": [{ "loc": ["body", "email"], "msg": "field required" }] });
    assert_eq!(ApiClient::detail_of(&body), Some("field required".to_string()));
}

#[test]
fn test_detail_of_missing() {
    assert_eq!(ApiClient::detail_of(&json!({ "error": "x" })), None);
    assert_eq!(ApiClient::detail_of(&json!(null)), None);
}

#[tokio::test]
async fn test_authenticated_call_without_token_fails_fast() {
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, crate::ClientError::NotAuthenticated { .. }));
}
