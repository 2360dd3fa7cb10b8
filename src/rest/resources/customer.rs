//! Customer resource implementation.
//!
//! Customers are addressed by their caller-assigned `external_id`, an opaque
//! string that may contain characters needing path escaping. The create
//! endpoint upserts: posting an existing `external_id` updates the customer,
//! so no separate update verb is declared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{escape_path_segment, Connection, HttpMethod};
use crate::rest::{ApiResource, PageParams, ResourceError, ResourceOperation, ResourcePath};

/// Billing provider settings nested under a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BillingConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_grace_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_with_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_locale: Option<String>,
}

/// A metadata entry attached to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerMetadata {
    #[serde(skip_serializing)]
    pub lago_id: Option<String>,
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_in_invoice: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Customer {
    pub lago_id: String,
    pub external_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub legal_name: Option<String>,
    pub legal_number: Option<String>,
    pub tax_identification_number: Option<String>,
    pub timezone: Option<String>,
    pub billing_configuration: Option<BillingConfiguration>,
    #[serde(default)]
    pub metadata: Vec<CustomerMetadata>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for Customer {
    type CreateParams = CustomerInput;
    type UpdateParams = CustomerInput;
    type ListParams = CustomerListParams;

    const NAME: &'static str = "Customer";
    const ROOT: &'static str = "customer";
    const PLURAL: &'static str = "customers";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "customers",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "customers/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "customers"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "customers/{id}",
        ),
    ];
}

impl Customer {
    /// Returns the customer-portal URL for the given external identifier.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the customer does not exist,
    /// [`ResourceError::UnexpectedResponse`] when the envelope is missing.
    pub async fn portal_url(
        connection: &Connection,
        external_id: &str,
    ) -> Result<String, ResourceError> {
        let path = format!("customers/{}/portal_url", escape_path_segment(external_id));
        let response = connection
            .get(&path, None, None)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        response
            .json()
            .and_then(|body| body.get("customer"))
            .and_then(|customer| customer.get("portal_url"))
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: "missing 'customer.portal_url' in response body".to_string(),
            })
    }
}

/// Whitelisted fields for customer create (upsert) payloads.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CustomerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_identification_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_configuration: Option<BillingConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<CustomerMetadata>>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CustomerListParams {
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
            "lago_id": "cus_1",
            "external_id": "acme-42",
            "name": "Acme Inc",
            "email": "billing@acme.test",
            "phone": null,
            "url": null,
            "address_line1": null,
            "address_line2": null,
            "city": "Paris",
            "zipcode": null,
            "state": null,
            "country": "FR",
            "currency": "EUR",
            "legal_name": null,
            "legal_number": null,
            "tax_identification_number": null,
            "timezone": "Europe/Paris",
            "billing_configuration": {"invoice_grace_period": 3},
            "metadata": [
                {"lago_id": "md_1", "key": "po", "value": "PO-7", "display_in_invoice": true}
            ],
            "created_at": "2024-02-02T08:00:00Z"
        });

        let customer: Customer = serde_json::from_value(value).unwrap();
        assert_eq!(customer.external_id, "acme-42");
        assert_eq!(
            customer.billing_configuration.unwrap().invoice_grace_period,
            Some(3)
        );
        assert_eq!(customer.metadata[0].key, "po");
    }

    #[test]
    fn test_input_omits_absent_fields() {
        let input = CustomerInput {
            external_id: Some("acme-42".to_string()),
            name: Some("Acme Inc".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(input).unwrap();
        assert_eq!(value, json!({"external_id": "acme-42", "name": "Acme Inc"}));
    }

    #[test]
    fn test_metadata_serialization_skips_read_only_id() {
        let metadata = CustomerMetadata {
            lago_id: Some("md_1".to_string()),
            key: "po".to_string(),
            value: "PO-7".to_string(),
            display_in_invoice: None,
        };

        let value = serde_json::to_value(metadata).unwrap();
        assert!(value.get("lago_id").is_none());
        assert_eq!(value, json!({"key": "po", "value": "PO-7"}));
    }

    #[test]
    fn test_update_verb_is_not_declared() {
        use crate::rest::get_path;

        // create is an upsert; no separate update path exists
        assert!(get_path(Customer::PATHS, ResourceOperation::Update, &["id"]).is_none());
    }
}
