//! Webhook signature verification for the Lago API SDK.
//!
//! Lago signs every webhook it sends: the `X-Lago-Signature` header carries
//! a compact RS256 token (header.claims.signature) whose claims embed the
//! serialized payload (`data`) and the issuing API URL (`iss`). Verifying
//! the token against the organization's RSA public key proves the payload
//! originated from the server, without trusting the network path the
//! webhook arrived on.
//!
//! # Overview
//!
//! - [`WebhookPublicKey`]: the RSA public key, decoded from the base64
//!   material the API serves
//! - [`fetch_public_key`]: retrieves the key from the API, tolerating both
//!   the JSON envelope and the legacy plain-text response shape
//! - [`verify_signature`]: the pure verification predicate
//! - [`verify`]: convenience wrapper that fetches the key when the caller
//!   has not cached one
//!
//! # Key caching
//!
//! The key rarely changes; fetch it once and pass it back in for every
//! subsequent verification to avoid a network round trip per webhook. The
//! SDK places no expiration policy on that cache — its lifetime is the
//! caller's decision.
//!
//! # Example
//!
//! ```rust,ignore
//! use lago_api::webhooks::{fetch_public_key, verify_signature};
//!
//! let public_key = fetch_public_key(&connection).await?;
//!
//! // For each incoming webhook request:
//! let signature = headers.get("X-Lago-Signature").unwrap();
//! let payload: serde_json::Value = serde_json::from_slice(&body)?;
//!
//! if verify_signature(signature, &payload, &public_key, connection.api_base()) {
//!     // handle the webhook
//! }
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::clients::{Connection, ResponseBody};
use crate::webhooks::WebhookError;

/// Path of the endpoint serving the organization's webhook public key.
pub const PUBLIC_KEY_PATH: &str = "webhooks/public_key";

/// The claim set embedded in a webhook signature token.
///
/// `data` is the JSON serialization of the signed payload; `iss` identifies
/// the API host that produced the signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureClaims {
    /// The JSON-serialized payload the signature covers.
    pub data: String,
    /// The issuing API URL.
    pub iss: String,
}

/// An RSA public key used to verify webhook signatures.
///
/// The key is decoded once at construction; verification calls never mutate
/// it, so one instance can back any number of [`verify_signature`] calls
/// from any number of tasks.
#[derive(Clone)]
pub struct WebhookPublicKey {
    key: DecodingKey,
}

impl WebhookPublicKey {
    /// Decodes a key from the base64-encoded PEM material the API serves.
    ///
    /// Whitespace (including embedded newlines) in the base64 material is
    /// tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidKey`] when the material is not valid
    /// base64 or does not decode to an RSA public key.
    pub fn from_base64(material: &str) -> Result<Self, WebhookError> {
        let compact: String = material.split_whitespace().collect();
        let pem = BASE64
            .decode(compact)
            .map_err(|e| WebhookError::InvalidKey {
                reason: format!("not valid base64: {e}"),
            })?;
        Self::from_pem(&pem)
    }

    /// Builds a key directly from PEM bytes.
    ///
    /// Useful when the caller persists the fetched key and reloads it from
    /// its own storage.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidKey`] when the bytes are not a valid
    /// RSA public key PEM.
    pub fn from_pem(pem: &[u8]) -> Result<Self, WebhookError> {
        let key = DecodingKey::from_rsa_pem(pem).map_err(|e| WebhookError::InvalidKey {
            reason: format!("not an RSA public key: {e}"),
        })?;
        Ok(Self { key })
    }

    /// Returns the decoding key for token verification.
    pub(crate) const fn decoding_key(&self) -> &DecodingKey {
        &self.key
    }
}

impl fmt::Debug for WebhookPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookPublicKey(RSA)")
    }
}

/// Fetches the organization's webhook public key from the API.
///
/// Older server versions answer this endpoint with a bare `text/plain`
/// base64 body instead of the JSON envelope
/// `{"webhook": {"public_key": <base64>}}`. Both shapes are accepted; the
/// decision is made by sniffing the body content, not the declared content
/// type.
///
/// # Errors
///
/// - [`WebhookError::KeyFetch`] when the HTTP call fails — a precondition
///   failure, not a verdict about any signature
/// - [`WebhookError::InvalidKey`] when the response decodes to nothing
///   usable
pub async fn fetch_public_key(connection: &Connection) -> Result<WebhookPublicKey, WebhookError> {
    let response = connection.get(PUBLIC_KEY_PATH, None, None).await?;

    let material = match &response.body {
        ResponseBody::Json(value) => value
            .get("webhook")
            .and_then(|w| w.get("public_key"))
            .and_then(serde_json::Value::as_str)
            // A bare base64 body can itself parse as a JSON string.
            .or_else(|| value.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| WebhookError::InvalidKey {
                reason: "unrecognized public key response shape".to_string(),
            })?,
        ResponseBody::Text(text) => text.clone(),
        ResponseBody::Empty => {
            return Err(WebhookError::InvalidKey {
                reason: "empty public key response".to_string(),
            })
        }
    };

    WebhookPublicKey::from_base64(&material)
}

/// Verifies a webhook signature token against a payload.
///
/// Returns `true` only when all of the following hold:
///
/// 1. the token's RS256 signature verifies against `public_key`;
/// 2. the token's `iss` claim equals `expected_issuer`;
/// 3. the token's `data` claim equals the JSON serialization of `payload`,
///    by exact string comparison.
///
/// The payload comparison is deliberately strict: re-ordering or
/// re-encoding the payload before calling this function will fail the
/// check, so pass the payload through the same serialization path that
/// produced the webhook body.
///
/// Any malformed token, foreign issuer, wrong key, or payload mismatch
/// yields `false`; this function never panics and never returns an error.
/// It is a pure function of its inputs — same inputs, same verdict.
#[must_use]
pub fn verify_signature(
    token: &str,
    payload: &serde_json::Value,
    public_key: &WebhookPublicKey,
    expected_issuer: &str,
) -> bool {
    let mut validation = Validation::new(Algorithm::RS256);
    // Signature tokens carry no expiry; the payload comparison below is the
    // freshness check that matters.
    validation.validate_exp = false;
    validation.required_spec_claims = std::collections::HashSet::new();
    validation.set_issuer(&[expected_issuer]);

    match decode::<SignatureClaims>(token, public_key.decoding_key(), &validation) {
        Ok(token_data) => token_data.claims.data == payload.to_string(),
        Err(_) => false,
    }
}

/// Verifies a webhook signature, fetching the public key when no cached key
/// is supplied.
///
/// The expected issuer defaults to the connection's configured API base
/// URL; pass `expected_issuer` to override it.
///
/// # Errors
///
/// Returns [`WebhookError`] only when the public key has to be fetched and
/// that fetch fails. A verification failure is the `Ok(false)` verdict,
/// never an error.
pub async fn verify(
    connection: &Connection,
    token: &str,
    payload: &serde_json::Value,
    cached_key: Option<&WebhookPublicKey>,
    expected_issuer: Option<&str>,
) -> Result<bool, WebhookError> {
    let fetched;
    let key = match cached_key {
        Some(key) => key,
        None => {
            fetched = fetch_public_key(connection).await?;
            &fetched
        }
    };

    let issuer = expected_issuer.unwrap_or_else(|| connection.api_base());
    Ok(verify_signature(token, payload, key, issuer))
}
