//! HTTP client layer for the Lago API SDK.
//!
//! This module provides the [`Connection`] type and its supporting request
//! and response types. The connection is the single point of HTTP I/O for
//! every resource; it owns header construction, identifier escaping, the
//! empty-payload rule, and classification of responses into success, empty
//! success, or [`ApiError`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, HttpError, InvalidRequestError};
pub use http_client::{Connection, SDK_VERSION};
pub use http_request::{
    escape_path_segment, HttpMethod, HttpRequest, HttpRequestBuilder, RequestHost,
};
pub use http_response::{HttpResponse, ResponseBody, SUCCESS_CODES};
