use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures; anything here stops the process before it serves
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] fa_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] fa_db::DbError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("I/O error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl ServerError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        ServerError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        ServerError::Io {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
