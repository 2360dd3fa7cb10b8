//! Usage event resource implementation.
//!
//! Event ingestion is the hot path of a billing pipeline: the create
//! endpoint is routed to the dedicated ingestion host when one is
//! configured. The SDK never retries event submissions on its own — a blind
//! retry of a non-idempotent ingestion call could double-bill usage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Connection, HttpMethod};
use crate::rest::{ApiResource, PageParams, ResourceError, ResourceOperation, ResourcePath};

use super::fee::Fee;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Event {
    pub lago_id: String,
    pub transaction_id: String,
    pub external_subscription_id: Option<String>,
    pub code: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub properties: Option<serde_json::Value>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for Event {
    type CreateParams = EventInput;
    type UpdateParams = EventInput;
    type ListParams = EventListParams;

    const NAME: &'static str = "Event";
    const ROOT: &'static str = "event";
    const PLURAL: &'static str = "events";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::ingest(HttpMethod::Post, ResourceOperation::Create, &[], "events"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "events/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "events"),
    ];
}

impl Event {
    /// Sends a batch of events in a single request.
    ///
    /// This is one request carrying multiple logical items, not client-side
    /// batching: the SDK performs no queueing or coalescing of its own.
    ///
    /// # Errors
    ///
    /// [`ResourceError::ValidationFailed`] on a 422,
    /// [`ResourceError::Http`] for other API or transport errors.
    pub async fn batch(
        connection: &Connection,
        events: Vec<EventInput>,
    ) -> Result<Vec<Self>, ResourceError> {
        let body = serde_json::json!({ "events": events });
        let response = connection
            .post("events/batch", Some(body))
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        let body = response
            .json()
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: "batch response had no JSON body".to_string(),
            })?;

        let events_value =
            body.get(Self::PLURAL)
                .ok_or_else(|| ResourceError::UnexpectedResponse {
                    resource: Self::NAME,
                    reason: "missing 'events' in batch response".to_string(),
                })?;

        serde_json::from_value(events_value.clone()).map_err(|e| {
            ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: format!("failed to decode 'events': {e}"),
            }
        })
    }

    /// Estimates the fees a pay-in-advance event would generate, without
    /// recording the event.
    ///
    /// # Errors
    ///
    /// [`ResourceError::ValidationFailed`] on a 422,
    /// [`ResourceError::Http`] for other API or transport errors.
    pub async fn estimate_fees(
        connection: &Connection,
        params: EventInput,
    ) -> Result<Vec<Fee>, ResourceError> {
        let body = serde_json::json!({ "event": params });
        let response = connection
            .post("events/estimate_fees", Some(body))
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        let body = response
            .json()
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: "estimate response had no JSON body".to_string(),
            })?;

        let fees_value = body
            .get("fees")
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: "missing 'fees' in estimate response".to_string(),
            })?;

        serde_json::from_value(fees_value.clone()).map_err(|e| {
            ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: format!("failed to decode 'fees': {e}"),
            }
        })
    }
}

/// Whitelisted fields for event submission.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct EventInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct EventListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::RequestHost;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_create_path_routes_to_ingest_host() {
        let path = get_path(Event::PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(path.host, RequestHost::Ingest);
        assert_eq!(path.template, "events");
    }

    #[test]
    fn test_read_paths_stay_on_api_host() {
        let path = get_path(Event::PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(path.host, RequestHost::Api);
    }

    #[test]
    fn test_entity_decodes_from_api_shape() {
        let value = json!({
            "lago_id": "ev_1",
            "transaction_id": "tx-0001",
            "external_subscription_id": "sub-acme-scale",
            "code": "api_calls",
            "timestamp": "2024-05-01T10:30:00Z",
            "properties": {"count": 12},
            "created_at": "2024-05-01T10:30:01Z"
        });

        let event: Event = serde_json::from_value(value).unwrap();
        assert_eq!(event.transaction_id, "tx-0001");
        assert_eq!(event.properties.unwrap()["count"], 12);
    }

    #[test]
    fn test_input_omits_absent_fields() {
        let input = EventInput {
            transaction_id: Some("tx-1".to_string()),
            code: Some("api_calls".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(input).unwrap();
        assert_eq!(value, json!({"transaction_id": "tx-1", "code": "api_calls"}));
    }
}
