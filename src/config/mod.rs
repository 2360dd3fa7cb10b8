//! Configuration types for the Lago API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Lago.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`LagoConfig`]: The main configuration struct holding all SDK settings
//! - [`LagoConfigBuilder`]: A builder for constructing [`LagoConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use lago_api::{LagoConfig, ApiKey};
//!
//! let config = LagoConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url().as_ref(), "https://api.getlago.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiUrl};

use crate::error::ConfigError;

/// Default production API host.
pub const DEFAULT_API_URL: &str = "https://api.getlago.com";

/// Default production host for high-throughput event ingestion.
pub const DEFAULT_INGEST_URL: &str = "https://ingest.getlago.com";

/// Versioned base path under which every endpoint lives.
pub const BASE_PATH: &str = "/api/v1";

/// Configuration for the Lago API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// key used for bearer authentication, the API host, and an optional
/// dedicated ingestion host for event endpoints.
///
/// # Thread Safety
///
/// `LagoConfig` is `Clone`, `Send`, and `Sync`, and is immutable once built.
/// A single config value can be shared by reference across every resource
/// call issued by the process.
///
/// # Example
///
/// ```rust
/// use lago_api::{LagoConfig, ApiKey, ApiUrl};
///
/// let config = LagoConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_url(ApiUrl::new("https://billing.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_url().as_ref(), "https://billing.example.com");
/// ```
#[derive(Clone, Debug)]
pub struct LagoConfig {
    api_key: ApiKey,
    api_url: ApiUrl,
    ingest_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl LagoConfig {
    /// Creates a new builder for constructing a `LagoConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lago_api::{LagoConfig, ApiKey};
    ///
    /// let config = LagoConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LagoConfigBuilder {
        LagoConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API host URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the event-ingestion host URL.
    ///
    /// Falls back to the API host when no dedicated ingestion host is
    /// configured.
    #[must_use]
    pub fn ingest_url(&self) -> &ApiUrl {
        self.ingest_url.as_ref().unwrap_or(&self.api_url)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify LagoConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LagoConfig>();
};

/// Builder for constructing [`LagoConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `api_key`; all other fields have production defaults.
///
/// # Defaults
///
/// - `api_url`: `https://api.getlago.com`
/// - `ingest_url`: `None` (event endpoints use `api_url`)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use lago_api::{LagoConfig, ApiKey, ApiUrl};
///
/// let config = LagoConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .ingest_url(ApiUrl::new("https://ingest.getlago.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct LagoConfigBuilder {
    api_key: Option<ApiKey>,
    api_url: Option<ApiUrl>,
    ingest_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl LagoConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API host URL.
    ///
    /// Use this to target a self-hosted instance instead of the production
    /// host.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets a dedicated event-ingestion host URL.
    ///
    /// High-volume event endpoints are routed here; everything else keeps
    /// using the API host.
    #[must_use]
    pub fn ingest_url(mut self, url: ApiUrl) -> Self {
        self.ingest_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`LagoConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<LagoConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_url = match self.api_url {
            Some(url) => url,
            None => ApiUrl::new(DEFAULT_API_URL)?,
        };

        Ok(LagoConfig {
            api_key,
            api_url,
            ingest_url: self.ingest_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = LagoConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_production_defaults() {
        let config = LagoConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_url().as_ref(), DEFAULT_API_URL);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_ingest_url_falls_back_to_api_url() {
        let config = LagoConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_url(ApiUrl::new("https://billing.example.com").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.ingest_url().as_ref(), "https://billing.example.com");
    }

    #[test]
    fn test_dedicated_ingest_url_is_used_when_configured() {
        let config = LagoConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .ingest_url(ApiUrl::new(DEFAULT_INGEST_URL).unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_url().as_ref(), DEFAULT_API_URL);
        assert_eq!(config.ingest_url().as_ref(), DEFAULT_INGEST_URL);
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LagoConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug_masks_key() {
        let config = LagoConfig::builder()
            .api_key(ApiKey::new("hidden-key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.api_url(), config.api_url());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("LagoConfig"));
        assert!(!debug_str.contains("hidden-key"));
    }
}
