//! Subscription resource implementation.
//!
//! Create and update payloads diverge: a subscription is created against a
//! customer and a plan, while an update can only touch its own fields. The
//! delete verb terminates the subscription and returns its final state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Pending,
    Active,
    Terminated,
    Canceled,
}

/// When billing periods are anchored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillingTime {
    Calendar,
    Anniversary,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Subscription {
    pub lago_id: String,
    pub external_id: String,
    pub lago_customer_id: Option<String>,
    pub external_customer_id: String,
    pub plan_code: String,
    pub name: Option<String>,
    pub status: SubscriptionStatus,
    pub billing_time: Option<BillingTime>,
    pub subscription_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub ending_at: Option<DateTime<Utc>>,
    pub terminated_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for Subscription {
    type CreateParams = SubscriptionCreateInput;
    type UpdateParams = SubscriptionUpdateInput;
    type ListParams = SubscriptionListParams;

    const NAME: &'static str = "Subscription";
    const ROOT: &'static str = "subscription";
    const PLURAL: &'static str = "subscriptions";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "subscriptions",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "subscriptions/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "subscriptions",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "subscriptions/{id}",
        ),
    ];
}

/// Whitelisted fields for subscription creation.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct SubscriptionCreateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_time: Option<BillingTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_at: Option<DateTime<Utc>>,
}

/// Whitelisted fields for subscription updates.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct SubscriptionUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct SubscriptionListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
}
