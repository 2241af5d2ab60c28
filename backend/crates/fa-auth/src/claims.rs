use crate::{AuthError, Result as AuthErrorResult};

use fa_core::Role;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims issued at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Account role, checked by route guards
    pub role: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.parsed_role()?;

        Ok(())
    }

    #[track_caller]
    pub fn parsed_role(&self) -> AuthErrorResult<Role> {
        Role::from_str(&self.role).map_err(|e| AuthError::InvalidClaim {
            claim: "role".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
