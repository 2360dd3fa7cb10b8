//! HTTP-specific error types for the Lago API SDK.
//!
//! This module contains error types for HTTP operations: non-success API
//! responses, request validation failures, and transport errors.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`ApiError`]: Non-success HTTP responses from the API
//! - [`InvalidRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! The API error deliberately carries the raw response body rather than a
//! parsed representation: different endpoints use different error-code
//! vocabularies, and the caller is the right place to interpret them.
//!
//! # Example
//!
//! ```rust,ignore
//! use lago_api::clients::HttpError;
//!
//! match connection.get("customers", Some("missing"), None).await {
//!     Ok(response) => println!("Success: {:?}", response.body),
//!     Err(HttpError::Api(e)) => {
//!         println!("API error {} at {}: {}", e.status_code, e.request_uri, e.body);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-success response.
///
/// Success is the fixed status set {200, 201, 202, 204}; any other status
/// produces this error. The body is the raw response text, preserved
/// verbatim so callers can inspect machine-readable fields (e.g. a `code`
/// entry in a validation failure) without the SDK imposing a taxonomy.
///
/// # Example
///
/// ```rust
/// use lago_api::clients::ApiError;
///
/// let error = ApiError {
///     status_code: 404,
///     body: r#"{"status":404,"error":"Not Found"}"#.to_string(),
///     request_uri: "https://api.getlago.com/api/v1/customers/123".to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {status_code} from {request_uri}: {body}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// The raw response body, uninterpreted.
    pub body: String,
    /// The full URI the request was sent to.
    pub request_uri: String,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
///
/// Transport failures ([`HttpError::Network`]) are propagated unchanged and
/// never retried: retry policy is an explicit decision for the caller, since
/// blindly retrying non-idempotent billing operations can duplicate them.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-success response from the API.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, when this error carries a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            _ => None,
        }
    }
}
