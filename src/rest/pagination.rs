//! Pagination types for list operations.
//!
//! Every list endpoint shares one envelope: the items under the resource's
//! plural key, plus a `meta` object describing the page. This module
//! provides [`Page<T>`] for the response side and [`PageParams`] for the
//! request side.
//!
//! # Example
//!
//! ```rust,ignore
//! use lago_api::rest::{ApiResource, PageParams};
//! use lago_api::rest::resources::{Customer, CustomerListParams};
//!
//! let page = Customer::list(
//!     &connection,
//!     CustomerListParams {
//!         page: PageParams { page: Some(1), per_page: Some(25) },
//!         ..Default::default()
//!     },
//! )
//! .await?;
//!
//! for customer in &page.items {
//!     println!("{:?}", customer.external_id);
//! }
//! if page.has_next_page() {
//!     // fetch meta.next_page ...
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::rest::ResourceError;

/// Pagination query parameters.
///
/// Both values are optional; omitted values let the server apply its
/// defaults. Embed this in a resource's list-params DTO with
/// `#[serde(flatten)]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Pagination metadata from a list response.
///
/// These values are produced only by parsing the server response and are
/// passed through without validation: the server is the source of truth.
/// `next_page`/`prev_page` being `None` signals the last/first page; a
/// single page that holds the whole collection has both `None`, which is
/// not an error.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    /// The current 1-based page number.
    pub current_page: u32,
    /// The next page number, absent on the last page.
    #[serde(default)]
    pub next_page: Option<u32>,
    /// The previous page number, absent on the first page.
    #[serde(default)]
    pub prev_page: Option<u32>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of items across all pages.
    pub total_count: u64,
}

/// One page of a list response.
///
/// Combines the decoded items with the server's pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The decoded items of this page.
    pub items: Vec<T>,
    /// Pagination metadata from the response's `meta` object.
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.meta.next_page.is_some()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.meta.prev_page.is_some()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the page and returns the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decodes a page from a list-response body.
    ///
    /// # Arguments
    ///
    /// * `body` - The JSON response body
    /// * `key` - The plural envelope key holding the items array
    /// * `resource` - The resource name, for error reporting
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedResponse`] when the items key or
    /// the `meta` object is missing or fails to decode.
    pub fn from_body(
        body: &serde_json::Value,
        key: &str,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let items_value = body
            .get(key)
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource,
                reason: format!("missing '{key}' in list response"),
            })?;

        let items: Vec<T> = serde_json::from_value(items_value.clone()).map_err(|e| {
            ResourceError::UnexpectedResponse {
                resource,
                reason: format!("failed to decode '{key}': {e}"),
            }
        })?;

        let meta_value = body
            .get("meta")
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource,
                reason: "missing 'meta' in list response".to_string(),
            })?;

        let meta: PaginationMeta = serde_json::from_value(meta_value.clone()).map_err(|e| {
            ResourceError::UnexpectedResponse {
                resource,
                reason: format!("failed to decode 'meta': {e}"),
            }
        })?;

        Ok(Self { items, meta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Widget {
        code: String,
    }

    #[test]
    fn test_page_decodes_items_and_meta() {
        let body = json!({
            "widgets": [{"code": "a"}, {"code": "b"}],
            "meta": {
                "current_page": 1,
                "next_page": 2,
                "prev_page": null,
                "total_pages": 7,
                "total_count": 63
            }
        });

        let page: Page<Widget> = Page::from_body(&body, "widgets", "Widget").unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.items[0].code, "a");
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.next_page, Some(2));
        assert_eq!(page.meta.prev_page, None);
        assert_eq!(page.meta.total_pages, 7);
        assert_eq!(page.meta.total_count, 63);
        assert!(page.has_next_page());
        assert!(!page.has_prev_page());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let body = json!({
            "widgets": [{"code": "z"}],
            "meta": {
                "current_page": 7,
                "next_page": null,
                "prev_page": 6,
                "total_pages": 7,
                "total_count": 63
            }
        });

        let page: Page<Widget> = Page::from_body(&body, "widgets", "Widget").unwrap();

        assert!(!page.has_next_page());
        assert!(page.has_prev_page());
        assert_eq!(page.meta.prev_page, Some(6));
    }

    #[test]
    fn test_single_page_collection_is_not_an_error() {
        // per_page larger than total_count: one page, no neighbours
        let body = json!({
            "widgets": [{"code": "only"}],
            "meta": {
                "current_page": 1,
                "next_page": null,
                "prev_page": null,
                "total_pages": 1,
                "total_count": 1
            }
        });

        let page: Page<Widget> = Page::from_body(&body, "widgets", "Widget").unwrap();

        assert!(!page.has_next_page());
        assert!(!page.has_prev_page());
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_missing_items_key_is_unexpected_response() {
        let body = json!({"meta": {
            "current_page": 1, "total_pages": 1, "total_count": 0
        }});

        let result: Result<Page<Widget>, _> = Page::from_body(&body, "widgets", "Widget");
        assert!(matches!(
            result,
            Err(ResourceError::UnexpectedResponse { .. })
        ));
    }

    #[test]
    fn test_missing_meta_is_unexpected_response() {
        let body = json!({"widgets": []});

        let result: Result<Page<Widget>, _> = Page::from_body(&body, "widgets", "Widget");
        assert!(matches!(
            result,
            Err(ResourceError::UnexpectedResponse { .. })
        ));
    }

    #[test]
    fn test_page_params_omit_absent_values() {
        let params = PageParams {
            page: Some(3),
            per_page: None,
        };
        let value = serde_json::to_value(params).unwrap();
        assert_eq!(value, json!({"page": 3}));
    }

    #[test]
    fn test_page_iteration() {
        let page = Page {
            items: vec![
                Widget {
                    code: "a".to_string(),
                },
                Widget {
                    code: "b".to_string(),
                },
            ],
            meta: PaginationMeta {
                current_page: 1,
                next_page: None,
                prev_page: None,
                total_pages: 1,
                total_count: 2,
            },
        };

        let codes: Vec<&str> = page.into_iter().map(|w| w.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b"]);
    }
}
