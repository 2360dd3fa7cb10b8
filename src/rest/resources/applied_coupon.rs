//! Applied coupon resource implementation.
//!
//! Applying a coupon is a top-level create; removing one is scoped under
//! the owning customer, so the delete path is nested:
//! `customers/{external_customer_id}/applied_coupons/{id}`. Use
//! [`destroy_in`](crate::rest::ApiResource::destroy_in) with the customer
//! identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

use super::coupon::CouponFrequency;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppliedCouponStatus {
    Active,
    Terminated,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppliedCoupon {
    pub lago_id: String,
    pub lago_coupon_id: String,
    pub coupon_code: String,
    pub lago_customer_id: Option<String>,
    pub external_customer_id: String,
    pub status: AppliedCouponStatus,
    pub amount_cents: Option<i64>,
    pub amount_cents_remaining: Option<i64>,
    pub amount_currency: Option<String>,
    pub percentage_rate: Option<String>,
    pub frequency: Option<CouponFrequency>,
    pub frequency_duration: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub terminated_at: Option<DateTime<Utc>>,
}

impl ApiResource for AppliedCoupon {
    type CreateParams = AppliedCouponInput;
    type UpdateParams = AppliedCouponInput;
    type ListParams = AppliedCouponListParams;

    const NAME: &'static str = "AppliedCoupon";
    const ROOT: &'static str = "applied_coupon";
    const PLURAL: &'static str = "applied_coupons";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "applied_coupons",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "applied_coupons",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["external_customer_id", "id"],
            "customers/{external_customer_id}/applied_coupons/{id}",
        ),
    ];
}

/// Whitelisted fields for applying a coupon to a customer.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct AppliedCouponInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
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
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct AppliedCouponListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppliedCouponStatus>,
}
