use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    /// Stored row could not be turned back into a domain value
    #[error("Corrupt row: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Referenced row not found: {message} {location}")]
    ForeignKey {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(db) = &source {
            if db.is_unique_violation() {
                return Self::Conflict {
                    message: db.message().to_string(),
                    location,
                };
            }
            if db.is_foreign_key_violation() {
                return Self::ForeignKey {
                    message: db.message().to_string(),
                    location,
                };
            }
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
