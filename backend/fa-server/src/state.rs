use fa_auth::{JwtIssuer, JwtValidator, LoginRateLimiter, RateLimitConfig};
use fa_config::{Config, RecognitionConfig};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub recognition: RecognitionConfig,
    pub cors_origin: String,
}

impl AppState {
    /// Build state from a validated config and an open pool
    pub fn new(pool: SqlitePool, config: &Config, jwt_secret: &str) -> Self {
        let secret = jwt_secret.as_bytes();

        Self {
            pool,
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret)),
            jwt_issuer: Arc::new(JwtIssuer::with_hs256(
                secret,
                config.auth.token_ttl_minutes,
            )),
            login_limiter: Arc::new(LoginRateLimiter::new(RateLimitConfig {
                max_requests: config.rate_limit.login_max_requests,
                window_secs: config.rate_limit.login_window_secs,
            })),
            recognition: config.recognition.clone(),
            cors_origin: config.server.cors_origin.clone(),
        }
    }
}
