//! Webhook-specific error types for the Lago API SDK.
//!
//! This module contains error types for the webhook verification subsystem.
//!
//! # Error Handling
//!
//! Signature verification itself never errors: an invalid, tampered, or
//! foreign signature is an expected outcome and yields `false`. Errors are
//! reserved for precondition failures — being unable to obtain or decode
//! the public key at all — because those prevent any verdict.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for webhook key retrieval and decoding.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The public key could not be fetched from the API.
    ///
    /// Distinct from a failed verification: without the key there is no
    /// verdict about the signature at all.
    #[error("Failed to fetch webhook public key: {0}")]
    KeyFetch(#[from] HttpError),

    /// The public key response could not be decoded into an RSA public key.
    #[error("Invalid webhook public key material: {reason}")]
    InvalidKey {
        /// What was wrong with the key material.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiError;

    #[test]
    fn test_key_fetch_error_wraps_http_error() {
        let http_error = HttpError::Api(ApiError {
            status_code: 500,
            body: r#"{"error":"Internal Server Error"}"#.to_string(),
            request_uri: "https://api.getlago.com/api/v1/webhooks/public_key".to_string(),
        });

        let error: WebhookError = http_error.into();
        assert!(matches!(error, WebhookError::KeyFetch(_)));
        assert!(error.to_string().contains("public key"));
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_invalid_key_error_message() {
        let error = WebhookError::InvalidKey {
            reason: "not valid base64".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Invalid webhook public key"));
        assert!(message.contains("not valid base64"));
    }

    #[test]
    fn test_error_variants_implement_std_error() {
        let error: &dyn std::error::Error = &WebhookError::InvalidKey {
            reason: "test".to_string(),
        };
        let _ = error;
    }
}
