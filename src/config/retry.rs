//
//  foxnose-sdk
//  config/retry.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Retry settings.
//!
//! | Field | Default |
//! |-------|---------|
//! | `attempts` | `3` |
//! | `backoff_factor` | `0.5` seconds |
//! | `methods` | `GET`, `PUT`, `DELETE` |
//! | `status_codes` | `408`, `429`, `500`, `502`, `503`, `504` |
//! | `max_delay` | `120` seconds |
//!
//! `POST` and `PATCH` are left out of the defaults because they are not
//! idempotent. Add them to `methods` explicitly to retry them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::Method;
use crate::error::{FoxnoseError, Result};

/// Default ceiling for one wait between attempts, in seconds.
pub const DEFAULT_MAX_DELAY_SECS: f64 = 120.0;

/// Immutable retry limits shared by every request of a transport.
///
/// ```rust
/// use foxnose_sdk::config::RetryConfig;
///
/// let retry = RetryConfig {
///     attempts: 2,
///     backoff_factor: 0.0,
///     ..RetryConfig::default()
/// };
/// assert!(retry.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of physical attempts per logical request (at least 1).
    pub attempts: u32,

    /// Base backoff in seconds. The n-th retry waits `backoff_factor * 2^(n-1)`.
    pub backoff_factor: f64,

    /// Methods eligible for retry.
    pub methods: Vec<Method>,

    /// Statuses treated as transient.
    pub status_codes: Vec<u16>,

    /// Longest single wait between attempts in seconds. Applies to server
    /// `Retry-After` hints as well as to the computed backoff.
    pub max_delay: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_factor: 0.5,
            methods: vec![Method::Get, Method::Put, Method::Delete],
            status_codes: vec![408, 429, 500, 502, 503, 504],
            max_delay: DEFAULT_MAX_DELAY_SECS,
        }
    }
}

impl RetryConfig {
    /// A configuration that makes exactly one attempt.
    pub fn disabled() -> Self {
        Self {
            attempts: 1,
            ..Self::default()
        }
    }

    /// Checks the limits are usable.
    pub fn validate(&self) -> Result<()> {
        if self.attempts == 0 {
            return Err(FoxnoseError::Config(
                "retry attempts must be at least 1".to_string(),
            ));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor < 0.0 {
            return Err(FoxnoseError::Config(format!(
                "retry backoff factor must be a non-negative number, got {}",
                self.backoff_factor
            )));
        }
        if !self.max_delay.is_finite() || self.max_delay < 0.0 {
            return Err(FoxnoseError::Config(format!(
                "retry max delay must be a non-negative number, got {}",
                self.max_delay
            )));
        }
        Ok(())
    }

    /// `max_delay` as a [`Duration`].
    pub fn max_delay_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.max_delay).unwrap_or(Duration::MAX)
    }

    pub fn is_retryable_method(&self, method: Method) -> bool {
        self.methods.contains(&method)
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.status_codes.contains(&status)
    }
}
