//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Lago API key.
///
/// This newtype ensures the API key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs. The key is sent as a bearer
/// token on every request.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use lago_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL.
///
/// This newtype validates that the URL is an absolute http(s) URL and
/// normalizes away any trailing slash, so path joining is unambiguous.
///
/// # Example
///
/// ```rust
/// use lago_api::ApiUrl;
///
/// let url = ApiUrl::new("https://api.getlago.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.getlago.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// Accepts absolute `http://` or `https://` URLs. A trailing slash is
    /// stripped during normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL is empty, has no
    /// http(s) scheme, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidApiUrl { url }),
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Verify newtypes are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiKey>();
    assert_send_sync::<ApiUrl>();
};
