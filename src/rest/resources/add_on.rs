//! Add-on resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AddOn {
    pub lago_id: String,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub amount_currency: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for AddOn {
    type CreateParams = AddOnInput;
    type UpdateParams = AddOnInput;
    type ListParams = AddOnListParams;

    const NAME: &'static str = "AddOn";
    const ROOT: &'static str = "add_on";
    const PLURAL: &'static str = "add_ons";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "add_ons"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "add_ons/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "add_ons/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "add_ons"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "add_ons/{id}",
        ),
    ];
}

/// Whitelisted fields for add-on create/update payloads.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct AddOnInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct AddOnListParams {
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
            "lago_id": "ao_1",
            "name": "Setup fee",
            "code": "setup_fee",
            "description": null,
            "amount_cents": 10000,
            "amount_currency": "USD",
            "created_at": "2024-01-01T00:00:00Z"
        });

        let add_on: AddOn = serde_json::from_value(value).unwrap();
        assert_eq!(add_on.code, "setup_fee");
        assert_eq!(add_on.amount_cents, 10_000);
    }

    #[test]
    fn test_input_omits_absent_fields() {
        let input = AddOnInput {
            code: Some("setup_fee".to_string()),
            amount_cents: Some(10_000),
            ..Default::default()
        };

        let value = serde_json::to_value(input).unwrap();
        assert_eq!(value, json!({"code": "setup_fee", "amount_cents": 10000}));
    }
}
