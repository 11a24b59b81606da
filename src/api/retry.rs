//
//  foxnose-sdk
//  api/retry.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Retry decisions and backoff.
//!
//! [`RetryPolicy`] is a pure function of the attempt count, the method and the
//! outcome of the last attempt. It never looks at the clock and never sleeps;
//! the transport does the waiting on whichever execution path it runs.
//!
//! # Delay
//!
//! A `Retry-After` header holding a non-negative integer number of seconds
//! wins. Anything else in that header (HTTP-dates included) is ignored and the
//! exponential backoff `backoff_factor * 2^(attempt-1)` is used.
//!
//! Either way the wait is clamped to [`RetryConfig::max_delay`], so a server
//! answering `Retry-After: 86400` cannot park a caller for a day.

use std::time::Duration;

use crate::api::{Method, RawResponse};
use crate::config::RetryConfig;

/// Outcome of one physical attempt, as seen by the policy.
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// No response was obtained.
    TransportFailure,
    /// A response was obtained.
    Response(&'a RawResponse),
}

/// Retry decisions over a shared, read-only [`RetryConfig`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    pub fn max_attempts(&self) -> u32 {
        self.config.attempts
    }

    /// Whether another attempt should follow attempt number `attempt`
    /// (1-indexed) that ended in `outcome`.
    pub fn should_retry(&self, attempt: u32, method: Method, outcome: Outcome<'_>) -> bool {
        if attempt >= self.config.attempts {
            return false;
        }
        if !self.config.is_retryable_method(method) {
            return false;
        }
        match outcome {
            Outcome::TransportFailure => true,
            Outcome::Response(response) => self.config.is_retryable_status(response.status()),
        }
    }

    /// How long to wait before the attempt following `attempt`, never more
    /// than `max_delay`.
    pub fn delay_for(&self, attempt: u32, outcome: Outcome<'_>) -> Duration {
        let delay = match outcome {
            Outcome::Response(response) => retry_after_secs(response)
                .map(Duration::from_secs)
                .unwrap_or_else(|| self.backoff(attempt)),
            Outcome::TransportFailure => self.backoff(attempt),
        };
        delay.min(self.config.max_delay_duration())
    }

    /// `backoff_factor * 2^(attempt-1)`, floored at zero.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(63) as i32;
        let seconds = self.config.backoff_factor * 2f64.powi(exponent);
        if seconds.is_finite() && seconds > 0.0 {
            Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}

/// Parses `Retry-After` as whole seconds. Returns `None` when absent or
/// malformed.
pub fn retry_after_secs(response: &RawResponse) -> Option<u64> {
    response
        .header("retry-after")
        .and_then(|value| value.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};

    fn policy(attempts: u32, backoff_factor: f64) -> RetryPolicy {
        RetryPolicy::new(RetryConfig {
            attempts,
            backoff_factor,
            ..RetryConfig::default()
        })
    }

    fn response(status: u16, retry_after: Option<&str>) -> RawResponse {
        let mut headers = HeaderMap::new();
        if let Some(value) = retry_after {
            headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
        }
        RawResponse::new(status, headers, Vec::new())
    }

    #[test]
    fn test_retries_transient_status_for_get() {
        let policy = policy(3, 0.0);
        let resp = response(503, None);
        assert!(policy.should_retry(1, Method::Get, Outcome::Response(&resp)));
        assert!(policy.should_retry(2, Method::Get, Outcome::Response(&resp)));
        assert!(!policy.should_retry(3, Method::Get, Outcome::Response(&resp)));
    }

    #[test]
    fn test_never_retries_post() {
        let policy = policy(5, 0.0);
        let resp = response(500, None);
        assert!(!policy.should_retry(1, Method::Post, Outcome::Response(&resp)));
        assert!(!policy.should_retry(1, Method::Post, Outcome::TransportFailure));
    }

    #[test]
    fn test_post_retried_when_opted_in() {
        let policy = RetryPolicy::new(RetryConfig {
            methods: vec![Method::Get, Method::Post],
            ..RetryConfig::default()
        });
        assert!(policy.should_retry(1, Method::Post, Outcome::TransportFailure));
    }

    #[test]
    fn test_non_retryable_status() {
        let policy = policy(3, 0.0);
        let resp = response(404, None);
        assert!(!policy.should_retry(1, Method::Get, Outcome::Response(&resp)));
    }

    #[test]
    fn test_transport_failure_is_retryable() {
        let policy = policy(2, 0.0);
        assert!(policy.should_retry(1, Method::Delete, Outcome::TransportFailure));
        assert!(!policy.should_retry(2, Method::Delete, Outcome::TransportFailure));
    }

    #[test]
    fn test_exponential_backoff() {
        let policy = policy(5, 0.5);
        assert_eq!(policy.backoff(1), Duration::from_millis(500));
        assert_eq!(policy.backoff(2), Duration::from_secs(1));
        assert_eq!(policy.backoff(3), Duration::from_secs(2));
        assert_eq!(policy.delay_for(2, Outcome::TransportFailure), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_backoff() {
        let policy = policy(3, 0.0);
        assert_eq!(policy.delay_for(1, Outcome::TransportFailure), Duration::ZERO);
        assert_eq!(policy.backoff(40), Duration::ZERO);
    }

    #[test]
    fn test_retry_after_wins() {
        let policy = policy(3, 10.0);
        let zero = response(429, Some("0"));
        assert_eq!(policy.delay_for(1, Outcome::Response(&zero)), Duration::ZERO);

        let seven = response(503, Some(" 7 "));
        assert_eq!(policy.delay_for(1, Outcome::Response(&seven)), Duration::from_secs(7));
    }

    #[test]
    fn test_delay_is_clamped_to_max_delay() {
        let policy = RetryPolicy::new(RetryConfig {
            backoff_factor: 10.0,
            max_delay: 30.0,
            ..RetryConfig::default()
        });

        let day = response(503, Some("86400"));
        assert_eq!(policy.delay_for(1, Outcome::Response(&day)), Duration::from_secs(30));

        let short = response(503, Some("4"));
        assert_eq!(policy.delay_for(1, Outcome::Response(&short)), Duration::from_secs(4));

        assert_eq!(policy.backoff(3), Duration::from_secs(40));
        assert_eq!(policy.delay_for(3, Outcome::TransportFailure), Duration::from_secs(30));
    }

    #[test]
    fn test_huge_retry_after_does_not_overflow() {
        let policy = policy(3, 0.0);
        let resp = response(429, Some("18446744073709551615"));
        assert_eq!(
            policy.delay_for(1, Outcome::Response(&resp)),
            RetryConfig::default().max_delay_duration()
        );
    }

    #[test]
    fn test_malformed_retry_after_falls_back() {
        let policy = policy(3, 1.0);
        for value in ["invalid-not-a-number", "Wed, 21 Oct 2025 07:28:00 GMT", "-5", "1.5"] {
            let resp = response(503, Some(value));
            assert_eq!(
                policy.delay_for(2, Outcome::Response(&resp)),
                Duration::from_secs(2),
                "value {:?}",
                value
            );
        }
    }
}
