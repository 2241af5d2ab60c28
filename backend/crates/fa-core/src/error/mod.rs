use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid session status: {value} {location}")]
    InvalidSessionStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid attendance status: {value} {location}")]
    InvalidAttendanceStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Embedding error: {message} {location}")]
    Embedding {
        message: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
