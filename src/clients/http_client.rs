//! HTTP connection for Lago API communication.
//!
//! This module provides the [`Connection`] type: the single point of HTTP
//! I/O and response interpretation for all resources sharing one set of
//! credentials.

use std::collections::HashMap;

use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{escape_path_segment, HttpMethod, HttpRequest, RequestHost};
use crate::clients::http_response::{HttpResponse, SUCCESS_CODES};
use crate::config::{LagoConfig, BASE_PATH};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connection to the Lago API.
///
/// The connection handles:
/// - Base URI construction for the API and ingestion hosts
/// - Default headers: bearer authorization, content type, user agent
/// - Identifier escaping when appending a path segment
/// - Response classification into success, empty success, or [`ApiError`]
///
/// The connection performs exactly one round trip per call and never
/// retries; retry policy for billing operations belongs to the caller.
///
/// # Thread Safety
///
/// `Connection` is `Send + Sync` and holds no mutable state, so one instance
/// can be shared freely across async tasks issuing concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// use lago_api::{LagoConfig, ApiKey};
/// use lago_api::clients::Connection;
///
/// let config = LagoConfig::builder()
///     .api_key(ApiKey::new("my-key").unwrap())
///     .build()
///     .unwrap();
///
/// let connection = Connection::new(&config);
/// let response = connection.get("customers", Some("cust-42"), None).await?;
/// ```
#[derive(Debug)]
pub struct Connection {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI for API requests, including the versioned path.
    api_base: String,
    /// Base URI for event-ingestion requests, including the versioned path.
    ingest_base: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

impl Connection {
    /// Creates a new connection for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use lago_api::{LagoConfig, ApiKey};
    /// use lago_api::clients::Connection;
    ///
    /// let config = LagoConfig::builder()
    ///     .api_key(ApiKey::new("my-key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let connection = Connection::new(&config);
    /// assert_eq!(connection.api_base(), "https://api.getlago.com/api/v1");
    /// ```
    #[must_use]
    pub fn new(config: &LagoConfig) -> Self {
        let api_base = format!("{}{BASE_PATH}", config.api_url());
        let ingest_base = format!("{}{BASE_PATH}", config.ingest_url());

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Lago API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base,
            ingest_base,
            default_headers,
        }
    }

    /// Returns the base URI used for API requests.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the base URI used for event-ingestion requests.
    #[must_use]
    pub fn ingest_base(&self) -> &str {
        &self.ingest_base
    }

    /// Returns the default headers for this connection.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the API.
    ///
    /// This method handles request validation, URL construction, header
    /// injection, the empty-payload rule (a payload with no keys sends no
    /// body), and response classification.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The underlying transport fails (`Network`)
    /// - A non-success status is received (`Api`, carrying the status code,
    ///   the raw body, and the request URI)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let base = match request.host {
            RequestHost::Api => &self.api_base,
            RequestHost::Ingest => &self.ingest_base,
        };
        let url = format!("{}/{}", base, request.path.trim_start_matches('/'));

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = request.encoded_body() {
            req_builder = req_builder.body(body);
        }

        tracing::debug!(method = %request.http_method, %url, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let request_uri = res.url().to_string();
        let body_text = res.text().await.unwrap_or_default();

        if SUCCESS_CODES.contains(&code) {
            return Ok(HttpResponse::new(code, request_uri, body_text));
        }

        tracing::warn!(status = code, uri = %request_uri, "request failed");

        // The raw body travels with the error untouched; callers interpret it.
        Err(HttpError::Api(ApiError {
            status_code: code,
            body: body_text,
            request_uri,
        }))
    }

    /// Sends a POST request to the specified path.
    ///
    /// A `None` body (or a body that compacts to nothing) results in a
    /// request with no body at all.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, transport, or API errors.
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Post, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()?).await
    }

    /// Sends a PUT request to `path/{identifier}` with the identifier
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, transport, or API errors.
    pub async fn put(
        &self,
        path: &str,
        identifier: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        let path = join_identifier(path, identifier);
        let mut builder = HttpRequest::builder(HttpMethod::Put, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()?).await
    }

    /// Sends a PATCH request to `path/{identifier}` with the identifier
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, transport, or API errors.
    pub async fn patch(
        &self,
        path: &str,
        identifier: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        let path = join_identifier(path, identifier);
        let mut builder = HttpRequest::builder(HttpMethod::Patch, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()?).await
    }

    /// Sends a DELETE request to `path/{identifier}` with the identifier
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, transport, or API errors.
    pub async fn delete(
        &self,
        path: &str,
        identifier: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let path = join_identifier(path, identifier);
        let mut builder = HttpRequest::builder(HttpMethod::Delete, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()?).await
    }

    /// Sends a GET request to `path`, or to `path/{identifier}` when an
    /// identifier is supplied (percent-encoded).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, transport, or API errors.
    pub async fn get(
        &self,
        path: &str,
        identifier: Option<&str>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let path = identifier.map_or_else(|| path.to_string(), |id| join_identifier(path, id));
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()?).await
    }

    /// Sends a GET request to a collection path with query options.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, transport, or API errors.
    pub async fn get_list(
        &self,
        path: &str,
        query: HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        self.get(path, None, Some(query)).await
    }
}

/// Joins a collection path and a percent-encoded identifier segment.
fn join_identifier(path: &str, identifier: &str) -> String {
    format!(
        "{}/{}",
        path.trim_end_matches('/'),
        escape_path_segment(identifier)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use crate::config::ApiUrl;

    fn create_test_config() -> LagoConfig {
        LagoConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_connection_builds_versioned_base_uris() {
        let connection = Connection::new(&create_test_config());

        assert_eq!(connection.api_base(), "https://api.getlago.com/api/v1");
        assert_eq!(connection.ingest_base(), "https://api.getlago.com/api/v1");
    }

    #[test]
    fn test_connection_uses_dedicated_ingest_host() {
        let config = LagoConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .ingest_url(ApiUrl::new("https://ingest.getlago.com").unwrap())
            .build()
            .unwrap();
        let connection = Connection::new(&config);

        assert_eq!(connection.api_base(), "https://api.getlago.com/api/v1");
        assert_eq!(connection.ingest_base(), "https://ingest.getlago.com/api/v1");
    }

    #[test]
    fn test_bearer_authorization_header() {
        let connection = Connection::new(&create_test_config());

        assert_eq!(
            connection.default_headers().get("Authorization"),
            Some(&"Bearer test-api-key".to_string())
        );
    }

    #[test]
    fn test_content_type_header_is_json() {
        let connection = Connection::new(&create_test_config());

        assert_eq!(
            connection.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let connection = Connection::new(&create_test_config());

        let user_agent = connection.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Lago API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = LagoConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let connection = Connection::new(&config);

        let user_agent = connection.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Lago API Library"));
    }

    #[test]
    fn test_join_identifier_escapes_segment() {
        assert_eq!(join_identifier("customers", "id/42"), "customers/id%2F42");
        assert_eq!(join_identifier("customers/", "a b"), "customers/a%20b");
    }

    #[test]
    fn test_connection_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Connection>();
    }
}
