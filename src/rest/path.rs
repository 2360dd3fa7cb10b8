//! Path building infrastructure for REST resources.
//!
//! This module provides the path resolution system that lets a resource
//! declare every endpoint it supports as data, including endpoints scoped
//! under one or more parent resources.
//!
//! # Path Resolution
//!
//! Resources can be accessed through multiple paths. For example, an applied
//! coupon is listed at the top level but removed through its customer:
//! - `applied_coupons` (standalone list)
//! - `customers/{external_customer_id}/applied_coupons/{id}` (nested delete)
//!
//! The path resolution system selects the most specific path that matches
//! the identifiers the caller supplied. A verb with no declared path at all
//! is an unsupported operation, reported before any I/O happens.
//!
//! Identifier values are percent-encoded during interpolation; external IDs
//! are opaque caller-supplied strings that may contain reserved characters.
//!
//! # Example
//!
//! ```rust
//! use lago_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use lago_api::clients::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::All,
//!         &["lago_id"],
//!         "wallets/{lago_id}/wallet_transactions",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::All, &["lago_id"]).unwrap();
//! let url = build_path(path.template, &[("lago_id", "wal_1")]);
//! assert_eq!(url, "wallets/wal_1/wallet_transactions");
//! ```

use crate::clients::{escape_path_segment, HttpMethod, RequestHost};

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource by identifier (GET /resources/{id}).
    Find,
    /// List resources with pagination (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PUT /resources/{id}).
    Update,
    /// Delete or terminate a resource (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Each `ResourcePath` defines how to reach a resource for one operation:
/// the HTTP method, the host the endpoint lives on, the identifiers the
/// template needs, and the URL template itself.
///
/// # Path Templates
///
/// Templates use `{id_name}` placeholders for identifier interpolation:
/// - `customers/{external_id}` — single identifier
/// - `customers/{external_customer_id}/applied_coupons/{id}` — nested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// The host this endpoint is served from.
    pub host: RequestHost,
    /// Required identifier names in order (e.g., `["external_customer_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath` on the API host.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            host: RequestHost::Api,
            ids,
            template,
        }
    }

    /// Creates a new `ResourcePath` routed to the event-ingestion host.
    #[must_use]
    pub const fn ingest(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            host: RequestHost::Ingest,
            ids,
            template,
        }
    }

    /// Returns the number of required identifiers for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required identifiers are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters paths by operation, keeps those whose required identifiers are
/// all available, and picks the most specific match (most identifiers).
/// Returns `None` when the resource does not support the operation with the
/// identifiers at hand.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating identifiers.
///
/// Replaces `{id_name}` placeholders in the template with the matching
/// values, percent-encoding each value as a single path segment.
///
/// # Example
///
/// ```rust
/// use lago_api::rest::build_path;
///
/// let url = build_path(
///     "customers/{external_customer_id}/applied_coupons/{id}",
///     &[("external_customer_id", "cust/42"), ("id", "ac_1")],
/// );
/// assert_eq!(url, "customers/cust%2F42/applied_coupons/ac_1");
/// ```
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &escape_path_segment(value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_stores_fields_correctly() {
        let path = ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["external_customer_id", "id"],
            "customers/{external_customer_id}/applied_coupons/{id}",
        );

        assert_eq!(path.http_method, HttpMethod::Delete);
        assert_eq!(path.operation, ResourceOperation::Delete);
        assert_eq!(path.host, RequestHost::Api);
        assert_eq!(path.ids, &["external_customer_id", "id"]);
    }

    #[test]
    fn test_ingest_constructor_routes_to_ingest_host() {
        let path = ResourcePath::ingest(HttpMethod::Post, ResourceOperation::Create, &[], "events");
        assert_eq!(path.host, RequestHost::Ingest);
    }

    #[test]
    fn test_path_template_interpolation_single_id() {
        let result = build_path("customers/{external_id}", &[("external_id", "cust-1")]);
        assert_eq!(result, "customers/cust-1");
    }

    #[test]
    fn test_path_template_interpolation_multiple_ids() {
        let result = build_path(
            "customers/{external_customer_id}/applied_coupons/{id}",
            &[("external_customer_id", "cust-1"), ("id", "ac-9")],
        );
        assert_eq!(result, "customers/cust-1/applied_coupons/ac-9");
    }

    #[test]
    fn test_path_interpolation_escapes_reserved_characters() {
        let result = build_path(
            "customers/{external_id}",
            &[("external_id", "user/42+ @corp")],
        );
        assert_eq!(result, "customers/user%2F42%2B%20%40corp");
    }

    #[test]
    fn test_get_path_selects_most_specific_path() {
        const PATHS: &[ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::All,
                &[],
                "applied_coupons",
            ),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::All,
                &["external_customer_id"],
                "customers/{external_customer_id}/applied_coupons",
            ),
        ];

        let path = get_path(PATHS, ResourceOperation::All, &["external_customer_id"]);
        assert_eq!(
            path.unwrap().template,
            "customers/{external_customer_id}/applied_coupons"
        );
    }

    #[test]
    fn test_get_path_falls_back_to_less_specific() {
        const PATHS: &[ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::All,
                &["external_customer_id"],
                "customers/{external_customer_id}/applied_coupons",
            ),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::All,
                &[],
                "applied_coupons",
            ),
        ];

        let path = get_path(PATHS, ResourceOperation::All, &[]);
        assert_eq!(path.unwrap().template, "applied_coupons");
    }

    #[test]
    fn test_get_path_returns_none_when_no_match() {
        const PATHS: &[ResourcePath] = &[ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "fees/{id}",
        )];

        // Operation not declared at all
        assert!(get_path(PATHS, ResourceOperation::Create, &[]).is_none());

        // Missing required identifier
        assert!(get_path(PATHS, ResourceOperation::Find, &[]).is_none());
    }

    #[test]
    fn test_two_level_nesting_resolves_and_builds() {
        const PATHS: &[ResourcePath] = &[ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["external_customer_id", "wallet_id"],
            "customers/{external_customer_id}/wallets/{wallet_id}/transactions",
        )];

        let path = get_path(
            PATHS,
            ResourceOperation::All,
            &["external_customer_id", "wallet_id"],
        )
        .unwrap();

        let url = build_path(
            path.template,
            &[("external_customer_id", "cust-1"), ("wallet_id", "wal-2")],
        );
        assert_eq!(url, "customers/cust-1/wallets/wal-2/transactions");
    }

    #[test]
    fn test_build_path_handles_missing_ids() {
        // Placeholders that are not supplied remain unchanged
        let result = build_path("customers/{external_id}", &[]);
        assert_eq!(result, "customers/{external_id}");
    }

    #[test]
    fn test_operation_as_str() {
        assert_eq!(ResourceOperation::Find.as_str(), "find");
        assert_eq!(ResourceOperation::All.as_str(), "all");
        assert_eq!(ResourceOperation::Create.as_str(), "create");
        assert_eq!(ResourceOperation::Update.as_str(), "update");
        assert_eq!(ResourceOperation::Delete.as_str(), "delete");
    }
}
