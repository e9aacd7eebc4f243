//! Per-Identifier Rate Limiting
//!
//! Fixed-window limiter over an explicit owned table. The limiter is a
//! plain value the caller constructs once and shares by handle, so tests
//! build isolated instances instead of touching process-wide state. Windows
//! are per-identifier and independent.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::warn;

pub const DEFAULT_MAX_REQUESTS: u32 = 10;
pub const DEFAULT_WINDOW_SECS: u64 = 60;

fn default_max_requests() -> u32 {
    DEFAULT_MAX_REQUESTS
}
fn default_window_secs() -> u64 {
    DEFAULT_WINDOW_SECS
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }
}

/// Tracks one identifier's consumption within its current window.
///
/// An entry whose window has elapsed is logically expired: it is treated as
/// absent by every operation and overwritten on the next allowed check.
#[derive(Debug, Clone)]
pub struct RateLimitEntry {
    count: u32,
    window_start: Instant,
}

pub struct RateLimiter {
    entries: Mutex<HashMap<String, RateLimitEntry>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
        }
    }

    fn window(&self) -> Duration {
        Duration::from_secs(self.config.window_secs)
    }

    /// Record one request for `identifier` and report whether it is allowed
    /// under the configured limit.
    pub fn check(&self, identifier: &str) -> bool {
        self.check_with_limit(identifier, self.config.max_requests)
    }

    /// As [`check`](Self::check), with a per-call limit override.
    pub fn check_with_limit(&self, identifier: &str, max_requests: u32) -> bool {
        self.check_at(identifier, max_requests, Instant::now())
    }

    fn check_at(&self, identifier: &str, max_requests: u32, now: Instant) -> bool {
        let window = self.window();
        let mut entries = self.entries.lock().expect("rate limiter mutex poisoned");

        if let Some(entry) = entries.get_mut(identifier) {
            if now.duration_since(entry.window_start) <= window {
                if entry.count >= max_requests {
                    // Denied without mutating state
                    warn!(identifier, max_requests, "SEC: rate limit exceeded");
                    return false;
                }
                entry.count += 1;
                return true;
            }
        }

        // First observation, or the stored window expired: start fresh
        entries.insert(
            identifier.to_string(),
            RateLimitEntry {
                count: 1,
                window_start: now,
            },
        );
        true
    }

    /// Requests left for `identifier` in its current window. Read-only:
    /// never mutates or resets the table.
    pub fn remaining(&self, identifier: &str) -> u32 {
        self.remaining_with_limit(identifier, self.config.max_requests)
    }

    /// As [`remaining`](Self::remaining), with a per-call limit override.
    pub fn remaining_with_limit(&self, identifier: &str, max_requests: u32) -> u32 {
        self.remaining_at(identifier, max_requests, Instant::now())
    }

    fn remaining_at(&self, identifier: &str, max_requests: u32, now: Instant) -> u32 {
        let window = self.window();
        let entries = self.entries.lock().expect("rate limiter mutex poisoned");

        match entries.get(identifier) {
            Some(entry) if now.duration_since(entry.window_start) <= window => {
                max_requests.saturating_sub(entry.count)
            }
            _ => max_requests,
        }
    }

    /// Drop any stored entry for `identifier`, unconditionally.
    pub fn reset(&self, identifier: &str) {
        let mut entries = self.entries.lock().expect("rate limiter mutex poisoned");
        entries.remove(identifier);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_until_limit_then_denies() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        assert!(limiter.check_at("x", 3, t0));
        assert!(limiter.check_at("x", 3, t0));
        assert!(limiter.check_at("x", 3, t0));
        assert!(!limiter.check_at("x", 3, t0), "fourth call must be denied");
    }

    #[test]
    fn test_remaining_counts_down() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        assert_eq!(limiter.remaining_at("x", 3, t0), 3);
        limiter.check_at("x", 3, t0);
        limiter.check_at("x", 3, t0);
        assert_eq!(limiter.remaining_at("x", 3, t0), 1);
    }

    #[test]
    fn test_remaining_is_read_only() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        limiter.check_at("x", 3, t0);
        limiter.remaining_at("x", 3, t0);
        limiter.remaining_at("x", 3, t0);
        assert_eq!(limiter.remaining_at("x", 3, t0), 2);
    }

    #[test]
    fn test_denied_check_does_not_mutate() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        limiter.check_at("x", 1, t0);
        assert!(!limiter.check_at("x", 1, t0));
        assert_eq!(limiter.remaining_at("x", 1, t0), 0);
        // Still within the window, still denied
        assert!(!limiter.check_at("x", 1, t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_window_expiry_resets_count() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        limiter.check_at("x", 3, t0);
        limiter.check_at("x", 3, t0);
        limiter.check_at("x", 3, t0);
        assert!(!limiter.check_at("x", 3, t0));

        let after_window = t0 + Duration::from_secs(DEFAULT_WINDOW_SECS + 1);
        assert!(limiter.check_at("x", 3, after_window), "expired window resets");
        assert_eq!(limiter.remaining_at("x", 3, after_window), 2);
    }

    #[test]
    fn test_expired_entry_reads_as_full_allowance() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        limiter.check_at("x", 3, t0);
        let after_window = t0 + Duration::from_secs(DEFAULT_WINDOW_SECS + 1);
        assert_eq!(limiter.remaining_at("x", 3, after_window), 3);
    }

    #[test]
    fn test_identifiers_are_independent() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        limiter.check_at("a", 1, t0);
        assert!(!limiter.check_at("a", 1, t0));
        assert!(limiter.check_at("b", 1, t0), "other identifiers unaffected");
    }

    #[test]
    fn test_reset_clears_entry() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        limiter.check_at("x", 1, t0);
        assert!(!limiter.check_at("x", 1, t0));
        limiter.reset("x");
        assert!(limiter.check_at("x", 1, t0));
    }

    #[test]
    fn test_default_config_limits() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_requests, 10);
        assert_eq!(config.window_secs, 60);
    }
}
