use crate::error::AppError;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use types::identity::Identity;

/// Buckets untouched for this long are dropped by `prune_idle`
pub const BUCKET_IDLE_TTL: Duration = Duration::from_secs(300);

/// Token bucket shape applied to every key
#[derive(Debug, Clone, Copy)]
pub struct RateLimits {
    pub capacity: u32,
    pub refill_per_sec: f64,
}

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

impl Bucket {
    fn full(limits: RateLimits, now: Instant) -> Self {
        Self {
            tokens: f64::from(limits.capacity),
            last_refill: now,
        }
    }

    fn try_take(&mut self, limits: RateLimits, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_refill).as_secs_f64();
        self.tokens = f64::min(
            f64::from(limits.capacity),
            self.tokens + elapsed * limits.refill_per_sec,
        );
        self.last_refill = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Per `identity:operation` write throttling
pub struct RateLimiter {
    limits: RateLimits,
    buckets: DashMap<String, Bucket>,
}

impl RateLimiter {
    pub fn new(limits: RateLimits) -> Self {
        Self {
            limits,
            buckets: DashMap::new(),
        }
    }

    /// Spend one token for `operation` on behalf of `identity`
    pub fn check(&self, identity: &Identity, operation: &str) -> Result<(), AppError> {
        self.check_at(&format!("{}:{operation}", identity.id), Instant::now())
    }

    /// Drop buckets idle for at least `max_idle`; returns how many went
    pub fn prune_idle(&self, max_idle: Duration) -> usize {
        self.prune_at(Instant::now(), max_idle)
    }

    fn prune_at(&self, now: Instant, max_idle: Duration) -> usize {
        let before = self.buckets.len();
        self.buckets
            .retain(|_, bucket| now.saturating_duration_since(bucket.last_refill) < max_idle);
        before.saturating_sub(self.buckets.len())
    }

    fn check_at(&self, key: &str, now: Instant) -> Result<(), AppError> {
        let mut bucket = self
            .buckets
            .entry(key.to_string())
            .or_insert_with(|| Bucket::full(self.limits, now));

        if bucket.try_take(self.limits, now) {
            Ok(())
        } else {
            Err(AppError::RateLimitExceeded(format!("Rate limit for {key}")))
        }
    }
}
