use crate::ClientError;

use error_location::ErrorLocation;
use std::panic::Location;

#[test]
fn test_api_error_exposes_detail() {
    let err = ClientError::Api {
        status: 400,
        detail: Some("Email already registered".into()),
        code: Some("BAD_REQUEST".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(err.detail(), Some("Email already registered"));
    assert!(err.to_string().contains("API error (400): Email already registered"));
}

#[test]
fn test_api_error_without_detail() {
    let err = ClientError::Api {
        status: 500,
        detail: None,
        code: None,
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(err.detail(), None);
    assert!(err.to_string().contains("no detail"));
}

#[test]
fn test_non_api_errors_have_no_detail() {
    assert_eq!(ClientError::not_authenticated().detail(), None);
    assert_eq!(ClientError::auth_failed("nope").detail(), None);
}
