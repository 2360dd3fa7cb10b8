//! Tax resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Tax {
    pub lago_id: String,
    pub name: String,
    pub code: String,
    pub rate: f64,
    pub description: Option<String>,
    #[serde(default)]
    pub applied_to_organization: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for Tax {
    type CreateParams = TaxInput;
    type UpdateParams = TaxInput;
    type ListParams = TaxListParams;

    const NAME: &'static str = "Tax";
    const ROOT: &'static str = "tax";
    const PLURAL: &'static str = "taxes";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "taxes"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "taxes/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "taxes/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "taxes"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "taxes/{id}",
        ),
    ];
}

/// Whitelisted fields for tax create/update payloads.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct TaxInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_to_organization: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct TaxListParams {
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
            "lago_id": "tax_1",
            "name": "VAT",
            "code": "vat_20",
            "rate": 20.0,
            "description": "French VAT",
            "applied_to_organization": true,
            "created_at": "2024-01-01T00:00:00Z"
        });

        let tax: Tax = serde_json::from_value(value).unwrap();
        assert_eq!(tax.code, "vat_20");
        assert!((tax.rate - 20.0).abs() < f64::EPSILON);
        assert!(tax.applied_to_organization);
    }

    #[test]
    fn test_input_omits_absent_fields() {
        let input = TaxInput {
            code: Some("vat_20".to_string()),
            rate: Some(20.0),
            ..Default::default()
        };

        let value = serde_json::to_value(input).unwrap();
        assert_eq!(value, json!({"code": "vat_20", "rate": 20.0}));
    }
}
