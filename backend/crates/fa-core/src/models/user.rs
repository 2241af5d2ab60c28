//! User account entity.

use crate::{CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Stored lowercased; unique across accounts
    pub email: String,
    /// Argon2 PHC string, never sent to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: &str, password_hash: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: Self::normalize_email(email),
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Check registration input before any hashing work is done
    #[track_caller]
    pub fn validate_registration(name: &str, email: &str, password: &str) -> CoreErrorResult<()> {
        if name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::Validation {
                message: "email must be a valid address".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::Validation {
                message: format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
