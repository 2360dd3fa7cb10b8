//! REST resource trait for CRUD operations.
//!
//! This module defines the [`ApiResource`] trait, the generic verb-to-HTTP
//! mapping shared by every resource in the SDK. A concrete resource supplies
//! a small set of facts — its envelope keys, its path table, and its typed
//! params DTOs — and gains `create()`, `update()`, `find()`, `destroy()` and
//! `list()` methods, plus `*_in` variants for endpoints scoped under parent
//! resources.
//!
//! Centralizing the mapping here is what keeps dozens of resource kinds
//! consistent without duplicating HTTP logic.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use lago_api::clients::HttpMethod;
//! use lago_api::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Deserialize)]
//! pub struct Coupon {
//!     pub lago_id: String,
//!     pub code: String,
//!     pub name: String,
//! }
//!
//! #[derive(Debug, Clone, Serialize, Default)]
//! pub struct CouponInput {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub name: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub code: Option<String>,
//! }
//!
//! #[derive(Debug, Clone, Serialize, Default)]
//! pub struct CouponListParams {
//!     #[serde(flatten)]
//!     pub page: PageParams,
//! }
//!
//! impl ApiResource for Coupon {
//!     type CreateParams = CouponInput;
//!     type UpdateParams = CouponInput;
//!     type ListParams = CouponListParams;
//!
//!     const NAME: &'static str = "Coupon";
//!     const ROOT: &'static str = "coupon";
//!     const PLURAL: &'static str = "coupons";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "coupons"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "coupons/{id}"),
//!         // ...
//!     ];
//! }
//!
//! // Usage:
//! let coupon = Coupon::find(&connection, "coupon-code").await?;
//! let page = Coupon::list(&connection, CouponListParams::default()).await?;
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{Connection, HttpRequest, HttpResponse};
use crate::rest::{build_path, get_path, Page, ResourceError, ResourceOperation, ResourcePath};

/// A REST resource that can be created, fetched, updated, deleted, and
/// listed.
///
/// Implementors declare the resource's envelope keys, path table, and typed
/// request DTOs, and get default implementations for all verbs. A verb that
/// has no entry in [`PATHS`](Self::PATHS) fails with
/// [`ResourceError::UnsupportedOperation`] before any network I/O.
///
/// # Associated Types
///
/// - `CreateParams`: the typed whitelist for `create` payloads
/// - `UpdateParams`: the typed whitelist for `update` payloads; resources
///   whose create and update shapes agree simply reuse one type
/// - `ListParams`: query options for `list`, including pagination
///
/// Params DTOs use `Option` fields with
/// `#[serde(skip_serializing_if = "Option::is_none")]`, so absent values
/// are omitted from the wire rather than sent as `null`, and unknown
/// caller-side fields cannot exist at all.
#[allow(async_fn_in_trait)]
pub trait ApiResource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// The typed whitelist for create payloads.
    type CreateParams: Serialize + Send + Sync;

    /// The typed whitelist for update payloads.
    type UpdateParams: Serialize + Send + Sync;

    /// Query options for list operations (filtering, pagination).
    type ListParams: Serialize + Default + Send + Sync;

    /// The resource name used in error messages (e.g., "Customer").
    const NAME: &'static str;

    /// The singular JSON envelope key (e.g., "customer").
    const ROOT: &'static str;

    /// The plural envelope key used in list responses (e.g., "customers").
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Creates a resource.
    ///
    /// Wraps the whitelisted params under [`ROOT`](Self::ROOT), POSTs them
    /// to the collection path, and unwraps the same key from the response.
    ///
    /// # Errors
    ///
    /// [`ResourceError::ValidationFailed`] on a 422,
    /// [`ResourceError::UnsupportedOperation`] when the resource declares no
    /// create path, [`ResourceError::Http`] otherwise.
    async fn create(
        connection: &Connection,
        params: Self::CreateParams,
    ) -> Result<Self, ResourceError> {
        Self::create_in(connection, &[], params).await
    }

    /// Creates a resource under the given parent identifiers.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    async fn create_in(
        connection: &Connection,
        parents: &[(&str, &str)],
        params: Self::CreateParams,
    ) -> Result<Self, ResourceError> {
        let path = resolve_path(
            Self::PATHS,
            ResourceOperation::Create,
            &id_names(parents, None),
            Self::NAME,
        )?;
        let url = build_path(path.template, parents);
        let body = envelope(Self::ROOT, &params, Self::NAME)?;

        let response = send(connection, path, url, Some(body), None, Self::NAME).await?;
        unwrap_entity(&response, Self::ROOT, Self::NAME)
    }

    /// Updates the resource addressed by `identifier`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] on a 404,
    /// [`ResourceError::ValidationFailed`] on a 422.
    async fn update(
        connection: &Connection,
        identifier: &str,
        params: Self::UpdateParams,
    ) -> Result<Self, ResourceError> {
        Self::update_in(connection, &[], identifier, params).await
    }

    /// Updates a resource under the given parent identifiers.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    async fn update_in(
        connection: &Connection,
        parents: &[(&str, &str)],
        identifier: &str,
        params: Self::UpdateParams,
    ) -> Result<Self, ResourceError> {
        let path = resolve_path(
            Self::PATHS,
            ResourceOperation::Update,
            &id_names(parents, Some(identifier)),
            Self::NAME,
        )?;
        let url = build_path(path.template, &with_identifier(parents, identifier));
        let body = envelope(Self::ROOT, &params, Self::NAME)?;

        let response = send(connection, path, url, Some(body), None, Self::NAME).await?;
        unwrap_entity(&response, Self::ROOT, Self::NAME)
    }

    /// Fetches the resource addressed by `identifier`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the entity does not exist.
    async fn find(connection: &Connection, identifier: &str) -> Result<Self, ResourceError> {
        Self::find_in(connection, &[], identifier).await
    }

    /// Fetches a resource under the given parent identifiers.
    ///
    /// # Errors
    ///
    /// Same as [`find`](Self::find).
    async fn find_in(
        connection: &Connection,
        parents: &[(&str, &str)],
        identifier: &str,
    ) -> Result<Self, ResourceError> {
        let path = resolve_path(
            Self::PATHS,
            ResourceOperation::Find,
            &id_names(parents, Some(identifier)),
            Self::NAME,
        )?;
        let url = build_path(path.template, &with_identifier(parents, identifier));

        let response = send(connection, path, url, None, None, Self::NAME).await?;
        unwrap_entity(&response, Self::ROOT, Self::NAME)
    }

    /// Deletes (or terminates) the resource addressed by `identifier`,
    /// returning its final representation.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the entity does not exist.
    async fn destroy(connection: &Connection, identifier: &str) -> Result<Self, ResourceError> {
        Self::destroy_in(connection, &[], identifier).await
    }

    /// Deletes a resource under the given parent identifiers.
    ///
    /// # Errors
    ///
    /// Same as [`destroy`](Self::destroy).
    async fn destroy_in(
        connection: &Connection,
        parents: &[(&str, &str)],
        identifier: &str,
    ) -> Result<Self, ResourceError> {
        let path = resolve_path(
            Self::PATHS,
            ResourceOperation::Delete,
            &id_names(parents, Some(identifier)),
            Self::NAME,
        )?;
        let url = build_path(path.template, &with_identifier(parents, identifier));

        let response = send(connection, path, url, None, None, Self::NAME).await?;
        unwrap_entity(&response, Self::ROOT, Self::NAME)
    }

    /// Lists resources with query options, returning one [`Page`].
    ///
    /// # Errors
    ///
    /// [`ResourceError::UnsupportedOperation`] when the resource declares no
    /// list path, [`ResourceError::Http`] for API errors.
    async fn list(
        connection: &Connection,
        params: Self::ListParams,
    ) -> Result<Page<Self>, ResourceError> {
        Self::list_in(connection, &[], params).await
    }

    /// Lists resources under the given parent identifiers.
    ///
    /// # Errors
    ///
    /// Same as [`list`](Self::list).
    async fn list_in(
        connection: &Connection,
        parents: &[(&str, &str)],
        params: Self::ListParams,
    ) -> Result<Page<Self>, ResourceError> {
        let path = resolve_path(
            Self::PATHS,
            ResourceOperation::All,
            &id_names(parents, None),
            Self::NAME,
        )?;
        let url = build_path(path.template, parents);
        let query = serialize_query(&params, Self::NAME)?;

        let response = send(connection, path, url, None, Some(query), Self::NAME).await?;
        let body = response
            .json()
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: "list response had no JSON body".to_string(),
            })?;

        Page::from_body(body, Self::PLURAL, Self::NAME)
    }
}

/// Resolves the path for an operation, or fails with `UnsupportedOperation`.
pub(crate) fn resolve_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
    resource: &'static str,
) -> Result<&'a ResourcePath, ResourceError> {
    get_path(paths, operation, available_ids).ok_or(ResourceError::UnsupportedOperation {
        resource,
        operation: operation.as_str(),
    })
}

/// Sends a resolved request through the connection, mapping errors.
pub(crate) async fn send(
    connection: &Connection,
    path: &ResourcePath,
    url: String,
    body: Option<Value>,
    query: Option<HashMap<String, String>>,
    resource: &'static str,
) -> Result<HttpResponse, ResourceError> {
    let mut builder = HttpRequest::builder(path.http_method, url).host(path.host);
    if let Some(body) = body {
        builder = builder.body(body);
    }
    if let Some(query) = query {
        if !query.is_empty() {
            builder = builder.query(query);
        }
    }

    let request = builder
        .build()
        .map_err(|e| ResourceError::Http(e.into()))?;

    connection
        .request(request)
        .await
        .map_err(|e| ResourceError::from_http(e, resource))
}

/// Wraps whitelisted params under the resource's root key.
pub(crate) fn envelope<T: Serialize>(
    root: &str,
    params: &T,
    resource: &'static str,
) -> Result<Value, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::UnexpectedResponse {
        resource,
        reason: format!("failed to serialize params: {e}"),
    })?;

    let mut body = serde_json::Map::new();
    body.insert(root.to_string(), value);
    Ok(Value::Object(body))
}

/// Unwraps the resource's root key from a response body.
pub(crate) fn unwrap_entity<T: DeserializeOwned>(
    response: &HttpResponse,
    root: &str,
    resource: &'static str,
) -> Result<T, ResourceError> {
    let body = response
        .json()
        .ok_or_else(|| ResourceError::UnexpectedResponse {
            resource,
            reason: "response had no JSON body".to_string(),
        })?;

    let entity = body
        .get(root)
        .ok_or_else(|| ResourceError::UnexpectedResponse {
            resource,
            reason: format!("missing '{root}' in response body"),
        })?;

    serde_json::from_value(entity.clone()).map_err(|e| ResourceError::UnexpectedResponse {
        resource,
        reason: format!("failed to decode '{root}': {e}"),
    })
}

/// Unwraps the root key when a body is present; an empty success body is a
/// plain acknowledgement.
pub(crate) fn unwrap_optional_entity<T: DeserializeOwned>(
    response: &HttpResponse,
    root: &str,
    resource: &'static str,
) -> Result<Option<T>, ResourceError> {
    if response.body.is_empty() {
        return Ok(None);
    }
    unwrap_entity(response, root, resource).map(Some)
}

/// Serializes a params struct to a query parameter map.
///
/// Absent optional fields are omitted; arrays become comma-separated values.
pub(crate) fn serialize_query<T: Serialize>(
    params: &T,
    resource: &'static str,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::UnexpectedResponse {
        resource,
        reason: format!("failed to serialize query params: {e}"),
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

/// Collects the identifier names available for path resolution.
fn id_names<'a>(parents: &[(&'a str, &'a str)], identifier: Option<&str>) -> Vec<&'a str> {
    let mut names: Vec<&str> = parents.iter().map(|(name, _)| *name).collect();
    if identifier.is_some() {
        names.push("id");
    }
    names
}

/// Appends the terminal identifier to the parent list under the name `id`.
fn with_identifier<'a>(
    parents: &[(&'a str, &'a str)],
    identifier: &'a str,
) -> Vec<(&'a str, &'a str)> {
    let mut ids = parents.to_vec();
    ids.push(("id", identifier));
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct MockCoupon {
        code: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    #[derive(Debug, Clone, Serialize, Default)]
    struct MockListParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        external_customer_id: Option<String>,
    }

    impl ApiResource for MockCoupon {
        type CreateParams = Self;
        type UpdateParams = Self;
        type ListParams = MockListParams;

        const NAME: &'static str = "Coupon";
        const ROOT: &'static str = "coupon";
        const PLURAL: &'static str = "coupons";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "coupons"),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["id"],
                "coupons/{id}",
            ),
            ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "coupons"),
        ];
    }

    #[test]
    fn test_resource_declares_envelope_keys() {
        assert_eq!(MockCoupon::NAME, "Coupon");
        assert_eq!(MockCoupon::ROOT, "coupon");
        assert_eq!(MockCoupon::PLURAL, "coupons");
    }

    #[test]
    fn test_resolve_path_reports_unsupported_operation() {
        let result = resolve_path(
            MockCoupon::PATHS,
            ResourceOperation::Delete,
            &["id"],
            MockCoupon::NAME,
        );

        assert!(matches!(
            result,
            Err(ResourceError::UnsupportedOperation {
                resource: "Coupon",
                operation: "delete",
            })
        ));
    }

    #[test]
    fn test_envelope_wraps_params_under_root() {
        let params = MockCoupon {
            code: "BLACK_FRIDAY".to_string(),
            name: None,
        };
        let body = envelope("coupon", &params, "Coupon").unwrap();

        assert_eq!(body, json!({"coupon": {"code": "BLACK_FRIDAY"}}));
    }

    #[test]
    fn test_envelope_omits_absent_fields() {
        let params = MockCoupon {
            code: "X".to_string(),
            name: None,
        };
        let body = envelope("coupon", &params, "Coupon").unwrap();
        let inner = body.get("coupon").unwrap();

        assert!(inner.get("name").is_none());
    }

    #[test]
    fn test_unwrap_entity_decodes_root_key() {
        let response = HttpResponse::new(
            200,
            "uri".to_string(),
            r#"{"coupon":{"code":"X","name":"Ten off"}}"#.to_string(),
        );

        let coupon: MockCoupon = unwrap_entity(&response, "coupon", "Coupon").unwrap();
        assert_eq!(coupon.code, "X");
        assert_eq!(coupon.name.as_deref(), Some("Ten off"));
    }

    #[test]
    fn test_unwrap_entity_fails_on_missing_root() {
        let response = HttpResponse::new(200, "uri".to_string(), r#"{"other":{}}"#.to_string());

        let result: Result<MockCoupon, _> = unwrap_entity(&response, "coupon", "Coupon");
        assert!(matches!(
            result,
            Err(ResourceError::UnexpectedResponse { .. })
        ));
    }

    #[test]
    fn test_unwrap_optional_entity_treats_empty_body_as_acknowledgement() {
        let response = HttpResponse::new(204, "uri".to_string(), String::new());

        let result: Option<MockCoupon> =
            unwrap_optional_entity(&response, "coupon", "Coupon").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_serialize_query_skips_none_and_stringifies() {
        let params = MockListParams {
            page: Some(2),
            external_customer_id: None,
        };

        let query = serialize_query(&params, "Coupon").unwrap();
        assert_eq!(query.get("page"), Some(&"2".to_string()));
        assert!(!query.contains_key("external_customer_id"));
    }

    #[test]
    fn test_serialize_query_joins_arrays() {
        #[derive(Serialize)]
        struct Params {
            status: Vec<String>,
        }

        let query = serialize_query(
            &Params {
                status: vec!["active".to_string(), "pending".to_string()],
            },
            "Subscription",
        )
        .unwrap();
        assert_eq!(query.get("status"), Some(&"active,pending".to_string()));
    }

    #[test]
    fn test_id_names_includes_terminal_identifier() {
        let parents = [("external_customer_id", "c1")];
        assert_eq!(
            id_names(&parents, Some("x")),
            vec!["external_customer_id", "id"]
        );
        assert_eq!(id_names(&parents, None), vec!["external_customer_id"]);
    }

    #[test]
    fn test_with_identifier_appends_id_pair() {
        let parents = [("external_customer_id", "c1")];
        let ids = with_identifier(&parents, "ac-1");
        assert_eq!(
            ids,
            vec![("external_customer_id", "c1"), ("id", "ac-1")]
        );
    }
}
