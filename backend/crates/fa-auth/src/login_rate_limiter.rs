use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::keyed::DefaultKeyedStateStore,
};

/// Checks between sweeps of keys whose window has passed
pub const SWEEP_INTERVAL: u64 = 1024;

/// Login attempt limiter keyed by normalized email.
///
/// Every key checked gets an entry, so stale keys are swept every
/// `SWEEP_INTERVAL` checks to keep the map bounded.
pub struct LoginRateLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    config: RateLimitConfig,
    checks: AtomicU64,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(config.window_secs.max(1));
        // Replenish one attempt every window/burst so a full burst refills in one window
        let period = window / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
            checks: AtomicU64::new(0),
        }
    }

    /// Check if an attempt for `key` is allowed, returns error if rate limited
    #[track_caller]
    pub fn check(&self, key: &str) -> AuthErrorResult<()> {
        if (self.checks.fetch_add(1, Ordering::Relaxed) + 1) % SWEEP_INTERVAL == 0 {
            self.retain_recent();
        }

        self.limiter
            .check_key(&key.to_string())
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl LoginRateLimiter {
    /// Drop keys whose attempts have fully replenished
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of keys currently tracked
    pub fn len(&self) -> usize {
        self.limiter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limiter.is_empty()
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
