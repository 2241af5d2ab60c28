use crate::{AuthError, Claims, Result as AuthErrorResult};

use fa_core::Role;

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Signs access tokens handed out by the login endpoint
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    #[track_caller]
    pub fn issue(&self, user_id: Uuid, role: Role) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }
}
