use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_RATE_LIMIT_REQUESTS: u32 = 1;
pub const MAX_RATE_LIMIT_REQUESTS: u32 = 10000;
pub const DEFAULT_LOGIN_MAX_REQUESTS: u32 = 5;

pub const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;
pub const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;

/// Login throttling, applied per email address.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub login_max_requests: u32,
    pub login_window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            login_max_requests: DEFAULT_LOGIN_MAX_REQUESTS,
            login_window_secs: DEFAULT_LOGIN_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.login_max_requests < MIN_RATE_LIMIT_REQUESTS
            || self.login_max_requests > MAX_RATE_LIMIT_REQUESTS
        {
            return Err(ConfigError::config(format!(
                "rate_limit.login_max_requests must be {}-{}, got {}",
                MIN_RATE_LIMIT_REQUESTS, MAX_RATE_LIMIT_REQUESTS, self.login_max_requests
            )));
        }

        if self.login_window_secs < MIN_RATE_LIMIT_WINDOW_SECS
            || self.login_window_secs > MAX_RATE_LIMIT_WINDOW_SECS
        {
            return Err(ConfigError::config(format!(
                "rate_limit.login_window_secs must be {}-{}, got {}",
                MIN_RATE_LIMIT_WINDOW_SECS, MAX_RATE_LIMIT_WINDOW_SECS, self.login_window_secs
            )));
        }

        Ok(())
    }
}
