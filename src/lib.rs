//! # Lago API Rust SDK
//!
//! A Rust SDK for the Lago billing API, providing type-safe configuration,
//! a shared REST dispatch layer for every billing resource, and webhook
//! signature verification.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`LagoConfig`] and [`LagoConfigBuilder`]
//! - Validated newtypes for the API key and host URLs
//! - A single [`Connection`](clients::Connection) handling bearer
//!   authentication, identifier escaping, and response classification
//! - The [`ApiResource`](rest::ApiResource) trait: one generic CRUD mapping
//!   shared by every resource, with typed per-operation whitelists
//! - Uniform pagination via [`Page`](rest::Page) and
//!   [`PageParams`](rest::PageParams)
//! - RS256 webhook signature verification via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use lago_api::{LagoConfig, ApiKey};
//!
//! let config = LagoConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use lago_api::{LagoConfig, ApiKey};
//! use lago_api::clients::Connection;
//! use lago_api::rest::ApiResource;
//! use lago_api::rest::resources::{Customer, CustomerInput, CustomerListParams};
//!
//! let config = LagoConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()?;
//! let connection = Connection::new(&config);
//!
//! // Upsert a customer
//! let customer = Customer::create(
//!     &connection,
//!     CustomerInput {
//!         external_id: Some("acme-42".to_string()),
//!         name: Some("Acme Inc".to_string()),
//!         ..Default::default()
//!     },
//! )
//! .await?;
//!
//! // Page through customers
//! let page = Customer::list(&connection, CustomerListParams::default()).await?;
//! println!("{} of {} customers", page.len(), page.meta.total_count);
//! ```
//!
//! ## Verifying Webhooks
//!
//! ```rust,ignore
//! use lago_api::webhooks::{fetch_public_key, verify_signature};
//!
//! // Fetch once, cache for the process lifetime
//! let public_key = fetch_public_key(&connection).await?;
//!
//! // For each webhook request received:
//! let payload: serde_json::Value = serde_json::from_slice(&raw_body)?;
//! if verify_signature(&signature_header, &payload, &public_key, connection.api_base()) {
//!     // authentic
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`; calls share no mutable state
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden retries**: every call is at most one round trip; retry
//!   policy for billing operations stays with the caller
//! - **Raw errors**: API failures surface the status code, the raw body,
//!   and the request URI, uninterpreted

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiUrl, LagoConfig, LagoConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, Connection, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidRequestError, RequestHost, ResponseBody,
};

// Re-export resource layer types
pub use rest::{ApiResource, Page, PageParams, PaginationMeta, ResourceError};

// Re-export webhook verification entry points
pub use webhooks::{fetch_public_key, verify_signature, WebhookError, WebhookPublicKey};
