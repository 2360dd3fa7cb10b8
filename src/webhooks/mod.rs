//! Webhook signature verification.
//!
//! Proves that an inbound webhook payload originated from the Lago server,
//! using RS256 signature tokens verified against the organization's RSA
//! public key. See [`verification`] for the full flow.

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    fetch_public_key, verify, verify_signature, SignatureClaims, WebhookPublicKey,
    PUBLIC_KEY_PATH,
};
