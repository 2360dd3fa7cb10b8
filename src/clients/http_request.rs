//! HTTP request types for the Lago API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Lago API, plus the identifier-escaping
//! helper used whenever a resource identifier is interpolated into a path.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidRequestError;

/// HTTP methods supported by the Lago API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing or terminating resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Which host a request is routed to.
///
/// Most endpoints live on the API host; high-volume event endpoints can be
/// routed to a dedicated ingestion host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestHost {
    /// The regular API host.
    #[default]
    Api,
    /// The event-ingestion host.
    Ingest,
}

/// Percent-encodes a resource identifier for use as a single path segment.
///
/// Identifiers are opaque external values (typically customer-assigned IDs)
/// that may contain arbitrary characters; reserved characters such as `/`,
/// `+`, space and `@` must not survive into the path unescaped.
///
/// # Example
///
/// ```rust
/// use lago_api::clients::escape_path_segment;
///
/// assert_eq!(escape_path_segment("user/42+@corp"), "user%2F42%2B%40corp");
/// assert_eq!(escape_path_segment("plain-id"), "plain-id");
/// ```
#[must_use]
pub fn escape_path_segment(identifier: &str) -> Cow<'_, str> {
    urlencoding::encode(identifier)
}

/// An HTTP request to be sent to the Lago API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use lago_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "customers")
///     .build()
///     .unwrap();
///
/// // POST request with JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "customers")
///     .body(json!({"customer": {"external_id": "cust-1"}}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the versioned base path) for this request.
    pub path: String,
    /// Which host the request is routed to.
    pub host: RequestHost,
    /// The request body, if any.
    ///
    /// A `None` body, a JSON `null`, or an object with no keys all result in
    /// a request with no body at all (never the literal `"{}"`); some action
    /// endpoints require a genuinely empty body.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::EmptyPath`] if the path is empty.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidRequestError::EmptyPath);
        }
        Ok(())
    }

    /// Returns the body serialized for the wire, or `None` when the payload
    /// compacts to nothing.
    #[must_use]
    pub fn encoded_body(&self) -> Option<String> {
        match &self.body {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Object(map)) if map.is_empty() => None,
            Some(value) => Some(value.to_string()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    host: RequestHost,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            host: RequestHost::Api,
            body: None,
            query: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Routes the request to the given host.
    #[must_use]
    pub const fn host(mut self, host: RequestHost) -> Self {
        self.host = host;
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            host: self.host,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
