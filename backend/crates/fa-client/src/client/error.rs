use error_location::ErrorLocation;
use std::panic::Location;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during API calls or token storage
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response; `detail` is the server's message when it sent one
    #[error("API error ({status}): {} {location}", display_detail(.detail))]
    Api {
        status: u16,
        detail: Option<String>,
        code: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("File access error at {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Not logged in; run `fa login` first {location}")]
    NotAuthenticated { location: ErrorLocation },

    /// Login or register was rejected; `message` is what the user should see
    #[error("{message} {location}")]
    AuthFailed {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn storage(path: PathBuf, source: std::io::Error) -> Self {
        ClientError::Storage {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        ClientError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth_failed(message: impl Into<String>) -> Self {
        ClientError::AuthFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The server's `detail` message, if this is an API error carrying one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

fn display_detail(detail: &Option<String>) -> &str {
    detail.as_deref().unwrap_or("no detail")
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
