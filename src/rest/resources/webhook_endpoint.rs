//! Webhook endpoint resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

/// How outgoing webhooks from this endpoint are signed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignatureAlgo {
    Jwt,
    Hmac,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WebhookEndpoint {
    pub lago_id: String,
    pub lago_organization_id: Option<String>,
    pub webhook_url: String,
    pub signature_algo: Option<SignatureAlgo>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for WebhookEndpoint {
    type CreateParams = WebhookEndpointInput;
    type UpdateParams = WebhookEndpointInput;
    type ListParams = WebhookEndpointListParams;

    const NAME: &'static str = "WebhookEndpoint";
    const ROOT: &'static str = "webhook_endpoint";
    const PLURAL: &'static str = "webhook_endpoints";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "webhook_endpoints",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "webhook_endpoints/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "webhook_endpoints/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "webhook_endpoints",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "webhook_endpoints/{id}",
        ),
    ];
}

/// Whitelisted fields for webhook endpoint create/update payloads.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct WebhookEndpointInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algo: Option<SignatureAlgo>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct WebhookEndpointListParams {
    #[serde(flatten)]
    pub page: PageParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_decodes_from_api_shape() {
        let value = json!({
            "lago_id": "we_1",
            "lago_organization_id": "org_1",
            "webhook_url": "https://billing-hooks.acme.test/lago",
            "signature_algo": "jwt",
            "created_at": "2024-01-01T00:00:00Z"
        });

        let endpoint: WebhookEndpoint = serde_json::from_value(value).unwrap();
        assert_eq!(endpoint.signature_algo, Some(SignatureAlgo::Jwt));
    }

    #[test]
    fn test_input_omits_absent_fields() {
        let input = WebhookEndpointInput {
            webhook_url: Some("https://hooks.example.test".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(input).unwrap();
        assert_eq!(value, json!({"webhook_url": "https://hooks.example.test"}));
    }
}
