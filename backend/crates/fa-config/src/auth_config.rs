use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 1440;
pub const MAX_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret; required by the server
    pub jwt_secret: Option<String>,
    pub token_ttl_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = &self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set FA_AUTH_JWT_SECRET)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters, got {}",
                MIN_JWT_SECRET_LENGTH,
                secret.len()
            )));
        }

        if self.token_ttl_minutes < 1 || self.token_ttl_minutes > MAX_TOKEN_TTL_MINUTES {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_minutes must be 1-{}, got {}",
                MAX_TOKEN_TTL_MINUTES, self.token_ttl_minutes
            )));
        }

        Ok(())
    }
}
