//! HTTP response types for the Lago API SDK.
//!
//! This module provides the [`HttpResponse`] type and the [`ResponseBody`]
//! triage between an empty success, a JSON payload, and a raw-text payload.

/// HTTP status codes treated as success.
pub const SUCCESS_CODES: [u16; 4] = [200, 201, 202, 204];

/// The decoded body of an API response.
///
/// The API distinguishes three shapes that callers must be able to tell
/// apart:
///
/// - no content at all (a `204`, or an action acknowledged with an empty
///   `200`) — treated as plain boolean success;
/// - a JSON value (the common case);
/// - a raw string body that is not JSON. One legacy endpoint (the webhook
///   public key) can answer `text/plain` on older server versions, so this
///   variant is sniffed from the body content rather than from the declared
///   content type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// The response carried no body.
    Empty,
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The body was non-empty but not JSON.
    Text(String),
}

impl ResponseBody {
    /// Decodes a raw body string, sniffing for JSON content.
    #[must_use]
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    /// Returns the JSON value, if the body parsed as JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` when the response carried no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// An HTTP response from the Lago API.
///
/// Only produced for requests that completed with a success status; any
/// other status is surfaced as an [`ApiError`](crate::clients::ApiError)
/// carrying the raw body instead.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The full URI the request was sent to.
    pub request_uri: String,
    /// The decoded response body.
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, decoding the raw body text.
    #[must_use]
    pub fn new(code: u16, request_uri: String, body_text: String) -> Self {
        Self {
            code,
            request_uri,
            body: ResponseBody::from_text(body_text),
        }
    }

    /// Returns `true` if the status code is in the success set.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        SUCCESS_CODES.contains(&self.code)
    }

    /// Returns the JSON body, if present.
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        self.body.as_json()
    }
}

// Verify response types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResponseBody>();
    assert_send_sync::<HttpResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_from_empty_text_is_empty() {
        assert_eq!(ResponseBody::from_text(String::new()), ResponseBody::Empty);
    }

    #[test]
    fn test_body_from_json_text_parses() {
        let body = ResponseBody::from_text(r#"{"customer":{"name":"Acme"}}"#.to_string());
        assert_eq!(body.as_json(), Some(&json!({"customer": {"name": "Acme"}})));
    }

    #[test]
    fn test_body_from_non_json_text_is_raw() {
        let material = "LS0tLS1CRUdJTiBQVUJMSUMgS0VZLS0tLS0K";
        let body = ResponseBody::from_text(material.to_string());
        assert_eq!(body, ResponseBody::Text(material.to_string()));
    }

    #[test]
    fn test_success_codes_cover_the_fixed_set() {
        for code in [200, 201, 202, 204] {
            let response = HttpResponse::new(code, "uri".to_string(), String::new());
            assert!(response.is_ok(), "{code} should be a success");
        }
        for code in [301, 400, 404, 405, 422, 500] {
            let response = HttpResponse::new(code, "uri".to_string(), String::new());
            assert!(!response.is_ok(), "{code} should not be a success");
        }
    }

    #[test]
    fn test_no_content_response_has_empty_body() {
        let response = HttpResponse::new(204, "uri".to_string(), String::new());
        assert!(response.is_ok());
        assert!(response.body.is_empty());
        assert!(response.json().is_none());
    }
}
