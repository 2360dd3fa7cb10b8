//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the HTTP-level [`HttpError`](crate::clients::HttpError) with
//! resource-level semantics like `NotFound` and `ValidationFailed`.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants while keeping
//! the raw server response intact:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - **Other non-success**: [`ResourceError::Http`]
//!
//! Both mapped variants still carry the full [`ApiError`] — status code, raw
//! body, request URI — so nothing the server said is lost.
//!
//! # Example
//!
//! ```rust,ignore
//! use lago_api::rest::{ApiResource, ResourceError};
//! use lago_api::rest::resources::Customer;
//!
//! match Customer::find(&connection, "cust-42").await {
//!     Ok(customer) => println!("Found: {:?}", customer.name),
//!     Err(ResourceError::NotFound { error, .. }) => {
//!         println!("missing, raw body: {}", error.body);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{ApiError, HttpError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// This enum provides semantic error types for resource operations. API
/// failures are never interpreted beyond the status-code split: the raw body
/// travels with the error for the caller to inspect.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} not found: {error}")]
    NotFound {
        /// The type name of the resource (e.g., "Customer", "Invoice").
        resource: &'static str,
        /// The underlying API error with the raw response body.
        error: ApiError,
    },

    /// The API rejected the payload (HTTP 422).
    ///
    /// The server's validation message is preserved verbatim in
    /// `error.body`.
    #[error("Validation failed for {resource}: {error}")]
    ValidationFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying API error with the raw response body.
        error: ApiError,
    },

    /// The resource does not support this operation.
    ///
    /// Raised locally, before any network call. Calling a verb a resource
    /// has not declared (e.g., `create` on fees) is a programming error,
    /// not a request that silently does nothing.
    #[error("{resource} does not support {operation} with the given identifiers")]
    UnsupportedOperation {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// The response did not match the envelope the resource declares.
    #[error("Unexpected response for {resource}: {reason}")]
    UnexpectedResponse {
        /// The type name of the resource.
        resource: &'static str,
        /// What was wrong with the response.
        reason: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps an HTTP-level error into a resource error.
    ///
    /// 404 and 422 responses get their semantic variants; everything else
    /// passes through unchanged.
    #[must_use]
    pub fn from_http(error: HttpError, resource: &'static str) -> Self {
        match error {
            HttpError::Api(e) if e.status_code == 404 => Self::NotFound { resource, error: e },
            HttpError::Api(e) if e.status_code == 422 => {
                Self::ValidationFailed { resource, error: e }
            }
            other => Self::Http(other),
        }
    }

    /// Returns the HTTP status code, when this error carries a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { error, .. } | Self::ValidationFailed { error, .. } => {
                Some(error.status_code)
            }
            Self::Http(http) => http.status_code(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
