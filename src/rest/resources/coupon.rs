//! Coupon resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CouponType {
    FixedAmount,
    Percentage,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CouponFrequency {
    Once,
    Recurring,
    Forever,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CouponExpiration {
    NoExpiration,
    TimeLimit,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Coupon {
    pub lago_id: String,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub coupon_type: CouponType,
    pub amount_cents: Option<i64>,
    pub amount_currency: Option<String>,
    pub percentage_rate: Option<String>,
    pub frequency: CouponFrequency,
    pub frequency_duration: Option<u32>,
    #[serde(default)]
    pub reusable: bool,
    pub expiration: Option<CouponExpiration>,
    pub expiration_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for Coupon {
    type CreateParams = CouponInput;
    type UpdateParams = CouponInput;
    type ListParams = CouponListParams;

    const NAME: &'static str = "Coupon";
    const ROOT: &'static str = "coupon";
    const PLURAL: &'static str = "coupons";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "coupons"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "coupons/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "coupons/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "coupons"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "coupons/{id}",
        ),
    ];
}

/// Whitelisted fields for coupon create/update payloads.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CouponInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_type: Option<CouponType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<CouponFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reusable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<CouponExpiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CouponListParams {
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
            "lago_id": "cou_1",
            "name": "Black Friday",
            "code": "BLACK_FRIDAY",
            "description": null,
            "coupon_type": "fixed_amount",
            "amount_cents": 2000,
            "amount_currency": "EUR",
            "percentage_rate": null,
            "frequency": "once",
            "frequency_duration": null,
            "reusable": true,
            "expiration": "time_limit",
            "expiration_at": "2024-11-30T23:59:59Z",
            "created_at": "2024-10-01T00:00:00Z"
        });

        let coupon: Coupon = serde_json::from_value(value).unwrap();
        assert_eq!(coupon.coupon_type, CouponType::FixedAmount);
        assert_eq!(coupon.frequency, CouponFrequency::Once);
        assert!(coupon.reusable);
    }

    #[test]
    fn test_input_omits_absent_fields() {
        let input = CouponInput {
            code: Some("WELCOME10".to_string()),
            coupon_type: Some(CouponType::Percentage),
            percentage_rate: Some("10.0".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(input).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "WELCOME10",
                "coupon_type": "percentage",
                "percentage_rate": "10.0"
            })
        );
    }
}
