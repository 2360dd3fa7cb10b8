//! Fee resource implementation.
//!
//! Fees are produced by the billing engine; the SDK can read, update,
//! list, and delete them, but creating one directly is not a thing — the
//! create verb is deliberately undeclared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

use super::invoice::PaymentStatus;

/// What a fee was charged for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeItem {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Fee {
    pub lago_id: String,
    pub lago_charge_id: Option<String>,
    pub lago_invoice_id: Option<String>,
    pub external_subscription_id: Option<String>,
    pub item: Option<FeeItem>,
    pub amount_cents: i64,
    pub amount_currency: String,
    pub taxes_amount_cents: Option<i64>,
    pub units: Option<String>,
    pub events_count: Option<u64>,
    pub payment_status: Option<PaymentStatus>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for Fee {
    type CreateParams = FeeUpdateInput;
    type UpdateParams = FeeUpdateInput;
    type ListParams = FeeListParams;

    const NAME: &'static str = "Fee";
    const ROOT: &'static str = "fee";
    const PLURAL: &'static str = "fees";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "fees/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "fees/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "fees"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "fees/{id}",
        ),
    ];
}

/// Whitelisted fields for fee updates.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct FeeUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct FeeListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_decodes_from_api_shape() {
        let value = json!({
            "lago_id": "fee_1",
            "lago_charge_id": "ch_1",
            "lago_invoice_id": "inv_1",
            "external_subscription_id": "sub-acme-scale",
            "item": {"type": "charge", "code": "api_calls", "name": "API calls"},
            "amount_cents": 1500,
            "amount_currency": "EUR",
            "taxes_amount_cents": 300,
            "units": "100.0",
            "events_count": 100,
            "payment_status": "pending",
            "created_at": "2024-05-01T00:05:00Z"
        });

        let fee: Fee = serde_json::from_value(value).unwrap();
        assert_eq!(fee.amount_cents, 1500);
        assert_eq!(fee.item.unwrap().code.as_deref(), Some("api_calls"));
    }

    #[test]
    fn test_create_verb_is_not_declared() {
        use crate::rest::get_path;

        assert!(get_path(Fee::PATHS, ResourceOperation::Create, &[]).is_none());
    }
}
