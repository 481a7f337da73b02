//! Retry policy for Customer Account API calls.

use std::time::Duration;

/// Attempts, per-attempt deadline, and backoff for one logical API call.
///
/// After the n-th failed attempt the client sleeps `backoff_base * 2^(n-1)`
/// before trying again. No sleep follows the final attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first. Always at least 1.
    pub max_attempts: u32,
    /// Deadline for a single attempt, covering send and body read.
    pub timeout: Duration,
    /// Delay after the first failed attempt.
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

    /// Create a policy; `max_attempts` below 1 is raised to 1.
    #[must_use]
    pub fn new(max_attempts: u32, timeout: Duration, backoff_base: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            timeout,
            backoff_base,
        }
    }

    /// Delay to wait after `attempt` (1-based) has failed.
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let factor = 2_u32.checked_pow(exponent).unwrap_or(u32::MAX);
        self.backoff_base.saturating_mul(factor)
    }

    /// Whether another attempt is allowed after `attempt` (1-based) failed.
    #[must_use]
    pub const fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            timeout: Self::DEFAULT_TIMEOUT,
            backoff_base: Self::DEFAULT_BACKOFF_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.timeout, Duration::from_secs(10));
        assert_eq!(policy.backoff_base, Duration::from_secs(1));
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(1), Duration::from_secs(1));
        assert_eq!(policy.backoff_for(2), Duration::from_secs(2));
        assert_eq!(policy.backoff_for(3), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(64), Duration::from_secs(u64::from(u32::MAX)));
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
    }

    #[test]
    fn test_new_clamps_attempts() {
        let policy = RetryPolicy::new(0, Duration::from_millis(5), Duration::ZERO);
        assert_eq!(policy.max_attempts, 1);
        assert!(!policy.should_retry(1));
    }
}
