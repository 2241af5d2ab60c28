use crate::{AuthError, Claims, Result as AuthErrorResult};

use fa_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use uuid::Uuid;

/// Validated identity available to handlers after JWT verification
#[derive(Debug, Clone, Serialize)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthContext {
    #[track_caller]
    pub fn from_claims(claims: &Claims) -> AuthErrorResult<Self> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a UUID: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            user_id,
            role: claims.parsed_role()?,
        })
    }

    /// Fail with `Forbidden` unless the caller holds one of `allowed`
    #[track_caller]
    pub fn require_role(&self, allowed: &[Role]) -> AuthErrorResult<()> {
        if allowed.contains(&self.role) {
            return Ok(());
        }

        let required = allowed
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Err(AuthError::Forbidden {
            required,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
