//! # Feature: Rate Limiting
//!
//! Sliding window request limit per user. Uses DashMap so concurrently
//! dispatched messages can check and record without a global lock.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true (`RATE_LIMIT_MAX_REQUESTS=0` disables)

use dashmap::DashMap;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct RateLimiter {
    requests: DashMap<u64, Vec<Instant>>,
    max_requests: usize,
    time_window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, time_window: Duration) -> Self {
        RateLimiter {
            requests: DashMap::new(),
            max_requests,
            time_window,
        }
    }

    /// Limiter that allows everything
    pub fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        self.max_requests > 0
    }

    /// Record a request for `user_id`; false when the user is over the limit
    pub fn check_rate_limit(&self, user_id: u64) -> bool {
        if !self.is_enabled() {
            return true;
        }

        let now = Instant::now();
        let mut entry = self.requests.entry(user_id).or_default();

        entry.retain(|&time| now.duration_since(time) < self.time_window);

        if entry.len() >= self.max_requests {
            false
        } else {
            entry.push(now);
            true
        }
    }

    /// Drop users whose whole window has expired
    pub fn prune(&self) {
        let now = Instant::now();
        self.requests.retain(|_, times| {
            times.retain(|&time| now.duration_since(time) < self.time_window);
            !times.is_empty()
        });
    }

    /// Number of users currently tracked
    pub fn tracked_users(&self) -> usize {
        self.requests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[test]
    fn test_rate_limiter_allows_under_limit() {
        let limiter = RateLimiter::new(3, Duration::from_secs(1));

        assert!(limiter.check_rate_limit(1));
        assert!(limiter.check_rate_limit(1));
        assert!(limiter.check_rate_limit(1));
    }

    #[test]
    fn test_rate_limiter_blocks_over_limit() {
        let limiter = RateLimiter::new(2, Duration::from_secs(1));

        assert!(limiter.check_rate_limit(1));
        assert!(limiter.check_rate_limit(1));
        assert!(!limiter.check_rate_limit(1));
    }

    #[tokio::test]
    async fn test_rate_limiter_resets_after_window() {
        let limiter = RateLimiter::new(1, Duration::from_millis(100));

        assert!(limiter.check_rate_limit(1));
        assert!(!limiter.check_rate_limit(1));

        sleep(Duration::from_millis(150)).await;
        assert!(limiter.check_rate_limit(1));
    }

    #[test]
    fn test_rate_limiter_per_user() {
        let limiter = RateLimiter::new(1, Duration::from_secs(1));

        assert!(limiter.check_rate_limit(1));
        assert!(limiter.check_rate_limit(2));
        assert!(!limiter.check_rate_limit(1));
        assert!(!limiter.check_rate_limit(2));
    }

    #[test]
    fn test_disabled_limiter_always_allows() {
        let limiter = RateLimiter::disabled();
        assert!(!limiter.is_enabled());
        for _ in 0..100 {
            assert!(limiter.check_rate_limit(1));
        }
        assert_eq!(limiter.tracked_users(), 0);
    }

    #[tokio::test]
    async fn test_prune_drops_expired_users() {
        let limiter = RateLimiter::new(5, Duration::from_millis(50));
        limiter.check_rate_limit(1);
        limiter.check_rate_limit(2);
        assert_eq!(limiter.tracked_users(), 2);

        sleep(Duration::from_millis(80)).await;
        limiter.check_rate_limit(3);
        limiter.prune();
        assert_eq!(limiter.tracked_users(), 1);
    }
}
