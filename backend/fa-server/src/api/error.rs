//! REST API error types
//!
//! Every failure becomes a JSON body `{detail, code}` with a matching status.

use fa_auth::AuthError;
use fa_core::CoreError;
use fa_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinError;

pub const NOT_AUTHENTICATED: &str = "Not authenticated";
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable message shown to the user
    pub detail: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400, input rejected by domain validation
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 429
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// 500; `message` is safe to show, internals are logged only
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let (code, detail) = match self {
            ApiError::NotFound { message, .. } => ("NOT_FOUND", message),
            ApiError::Validation { message, .. } => ("VALIDATION_ERROR", message),
            ApiError::BadRequest { message, .. } => ("BAD_REQUEST", message),
            ApiError::Unauthorized { message, .. } => ("UNAUTHORIZED", message),
            ApiError::Forbidden { message, .. } => ("FORBIDDEN", message),
            ApiError::TooManyRequests { message, .. } => ("RATE_LIMITED", message),
            ApiError::Internal { message, .. } => ("INTERNAL_ERROR", message),
        };

        let mut response = (status, Json(ApiErrorBody { detail, code })).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::validation(format!("Invalid UUID format: {}", e))
    }
}

/// Domain validation failures are the caller's fault
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let message = match e {
            CoreError::Validation { message, .. } | CoreError::Embedding { message, .. } => {
                message
            }
            CoreError::InvalidRole { value, .. } => format!("Invalid role: {}", value),
            CoreError::InvalidSessionStatus { value, .. } => {
                format!("Invalid session status: {}", value)
            }
            CoreError::InvalidAttendanceStatus { value, .. } => {
                format!("Invalid attendance status: {}", value)
            }
            CoreError::Uuid { source, .. } => format!("Invalid UUID format: {}", source),
        };

        ApiError::validation(message)
    }
}

impl From<JoinError> for ApiError {
    #[track_caller]
    fn from(e: JoinError) -> Self {
        log::error!("Blocking task failed: {}", e);
        ApiError::internal("Internal server error")
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::MissingHeader { .. } => ApiError::Unauthorized {
                message: NOT_AUTHENTICATED.to_string(),
                location,
            },
            AuthError::InvalidScheme { .. }
            | AuthError::InvalidToken { .. }
            | AuthError::TokenExpired { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => {
                log::debug!("Token rejected: {}", e);
                ApiError::Unauthorized {
                    message: INVALID_TOKEN.to_string(),
                    location,
                }
            }
            AuthError::Forbidden { required, .. } => ApiError::Forbidden {
                message: format!("Access denied. Required roles: {}", required),
                location,
            },
            AuthError::RateLimitExceeded { window_secs, .. } => ApiError::TooManyRequests {
                message: format!(
                    "Too many login attempts. Try again in {} seconds.",
                    window_secs
                ),
                location,
            },
            AuthError::JwtEncode { .. } | AuthError::PasswordHash { .. } => {
                log::error!("Auth failure: {}", e);
                ApiError::Internal {
                    message: "Authentication service failed".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::Conflict { .. } => ApiError::BadRequest {
                message: "Record already exists".to_string(),
                location,
            },
            DbError::ForeignKey { .. } => ApiError::Validation {
                message: "Referenced record does not exist".to_string(),
                location,
            },
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location,
            },
            // Don't expose internal database details to clients
            _ => {
                log::error!("Database error: {}", e);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
