//
//  foxnose-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings consumed by the transport core.
//!
//! - [`FoxnoseConfig`]: base URL, timeout, user agent and default headers
//! - [`RetryConfig`]: attempts, backoff factor, retryable methods and statuses
//!
//! Both can be built in code, read from TOML, or (for `FoxnoseConfig`) read
//! from the environment.
//!
//! ## Example Configuration File
//!
//! ```toml
//! base_url = "https://api.foxnose.net"
//! timeout = 15.0
//!
//! [default_headers]
//! X-Team = "content"
//!
//! [retry]
//! attempts = 5
//! backoff_factor = 0.25
//! methods = ["GET", "PUT", "DELETE"]
//! status_codes = [429, 502, 503]
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `FOXNOSE_BASE_URL` | `base_url` |
//! | `FOXNOSE_TIMEOUT` | `timeout` (seconds) |
//! | `FOXNOSE_USER_AGENT` | `user_agent` |

mod retry;

pub use retry::*;

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FoxnoseError, Result};

/// Default per-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

/// Longest accepted per-call timeout in seconds (one day).
pub const MAX_TIMEOUT_SECS: f64 = 86_400.0;

/// Environment variable holding the base URL.
pub const ENV_BASE_URL: &str = "FOXNOSE_BASE_URL";

/// Environment variable holding the timeout in seconds.
pub const ENV_TIMEOUT: &str = "FOXNOSE_TIMEOUT";

/// Environment variable holding the user agent override.
pub const ENV_USER_AGENT: &str = "FOXNOSE_USER_AGENT";

/// Transport-level settings.
///
/// # Examples
///
/// ```rust
/// use foxnose_sdk::config::FoxnoseConfig;
///
/// let config = FoxnoseConfig::new("https://api.example.com")
///     .with_header("X-Team", "content");
/// assert_eq!(config.timeout, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoxnoseConfig {
    /// Base URL every request path is resolved against.
    pub base_url: String,

    /// Per-call timeout in seconds, enforced by the network layer.
    pub timeout: f64,

    /// User agent for internally created clients.
    pub user_agent: String,

    /// Headers sent with every request unless overridden per request.
    pub default_headers: HashMap<String, String>,

    /// Retry settings. Used when the transport is built without an explicit
    /// [`RetryConfig`].
    pub retry: RetryConfig,
}

impl Default for FoxnoseConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            default_headers: HashMap::new(),
            retry: RetryConfig::default(),
        }
    }
}

impl FoxnoseConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Adds a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.as_secs_f64();
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// The timeout as a [`Duration`]. Non-positive values disable it and
    /// anything above [`MAX_TIMEOUT_SECS`] is clamped to it.
    pub fn timeout_duration(&self) -> Option<Duration> {
        if self.timeout > 0.0 {
            Duration::try_from_secs_f64(self.timeout.min(MAX_TIMEOUT_SECS)).ok()
        } else {
            None
        }
    }

    /// Rejects a timeout that is not a number or exceeds [`MAX_TIMEOUT_SECS`].
    pub fn validate_timeout(&self) -> Result<()> {
        if self.timeout.is_nan() || self.timeout > MAX_TIMEOUT_SECS {
            return Err(FoxnoseError::Config(format!(
                "timeout must be at most {} seconds, got {}",
                MAX_TIMEOUT_SECS, self.timeout
            )));
        }
        Ok(())
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| FoxnoseError::Config(format!("invalid configuration: {}", e)))?;
        config.validate_timeout()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FoxnoseError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Builds a configuration from `FOXNOSE_*` environment variables.
    ///
    /// `FOXNOSE_BASE_URL` is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| FoxnoseError::Config(format!("{} is not set", ENV_BASE_URL)))?;

        let mut config = Self::new(base_url.trim());

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            config.timeout = raw.trim().parse::<f64>().map_err(|_| {
                FoxnoseError::Config(format!("{} must be a number of seconds, got {:?}", ENV_TIMEOUT, raw))
            })?;
        }

        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|v| !v.is_empty()) {
            config.user_agent = agent;
        }

        config.validate_timeout()?;
        Ok(config)
    }
}

/// `foxnose-sdk-rust/<version>`.
pub fn default_user_agent() -> String {
    format!("foxnose-sdk-rust/{}", crate::VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FoxnoseConfig::new("https://api.example.com");
        assert_eq!(config.timeout_duration(), Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("foxnose-sdk-rust/"));
        assert!(config.default_headers.is_empty());
        assert_eq!(config.retry, RetryConfig::default());
    }

    #[test]
    fn test_from_toml_str() {
        let config = FoxnoseConfig::from_toml_str(
            r#"
            base_url = "https://api.example.com"
            timeout = 5.5

            [default_headers]
            X-Team = "content"

            [retry]
            attempts = 5
            methods = ["GET"]
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, 5.5);
        assert_eq!(config.default_headers.get("X-Team").map(String::as_str), Some("content"));
        assert_eq!(config.retry.attempts, 5);
        assert_eq!(config.retry.methods, vec![Method::Get]);
        assert_eq!(config.retry.backoff_factor, RetryConfig::default().backoff_factor);
    }

    #[test]
    fn test_invalid_toml() {
        let err = FoxnoseConfig::from_toml_str("timeout = \"soon\"").unwrap_err();
        assert!(matches!(err, FoxnoseError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://file.example.com\"").unwrap();

        let config = FoxnoseConfig::load(file.path()).unwrap();
        assert_eq!(config.base_url, "https://file.example.com");
    }

    #[test]
    fn test_load_missing_file() {
        let err = FoxnoseConfig::load(Path::new("/nonexistent/foxnose.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_BASE_URL, " https://env.example.com "),
            (ENV_TIMEOUT, "12"),
            (ENV_USER_AGENT, "custom/1.0"),
        ]
        .into_iter()
        .collect();

        let config = FoxnoseConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.timeout, 12.0);
        assert_eq!(config.user_agent, "custom/1.0");
    }

    #[test]
    fn test_from_lookup_requires_base_url() {
        let err = FoxnoseConfig::from_lookup(|_| None).unwrap_err();
        assert!(err.to_string().contains(ENV_BASE_URL));
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let err = FoxnoseConfig::from_lookup(|k| match k {
            ENV_BASE_URL => Some("https://x".to_string()),
            ENV_TIMEOUT => Some("later".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT));
    }

    #[test]
    fn test_oversized_timeout_is_rejected() {
        let err = FoxnoseConfig::from_toml_str("base_url = \"https://x\"\ntimeout = 1e30").unwrap_err();
        assert!(err.to_string().contains("timeout"));

        let err = FoxnoseConfig::from_lookup(|k| match k {
            ENV_BASE_URL => Some("https://x".to_string()),
            ENV_TIMEOUT => Some("NaN".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, FoxnoseError::Config(_)));
    }

    #[test]
    fn test_timeout_duration_never_panics() {
        let mut config = FoxnoseConfig::new("https://x");
        for value in [1e30, f64::INFINITY, f64::MAX] {
            config.timeout = value;
            assert_eq!(config.timeout_duration(), Some(Duration::from_secs(86_400)));
        }
        config.timeout = f64::NAN;
        assert!(config.timeout_duration().is_none());
        config.timeout = -1.0;
        assert!(config.timeout_duration().is_none());
    }

    #[test]
    fn test_zero_timeout_disables() {
        let mut config = FoxnoseConfig::new("https://x");
        config.timeout = 0.0;
        assert!(config.timeout_duration().is_none());
    }
}
