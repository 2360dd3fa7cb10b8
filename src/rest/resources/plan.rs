//! Plan resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// Pricing model of a charge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChargeModel {
    Standard,
    Graduated,
    Package,
    Percentage,
    Volume,
}

/// A usage charge attached to a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Charge {
    #[serde(skip_serializing)]
    pub lago_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_metric_id: Option<String>,
    pub charge_model: ChargeModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoiceable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Plan {
    pub lago_id: String,
    pub name: String,
    pub code: String,
    pub interval: PlanInterval,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub amount_currency: String,
    pub trial_period: Option<f64>,
    #[serde(default)]
    pub pay_in_advance: bool,
    pub bill_charges_monthly: Option<bool>,
    #[serde(default)]
    pub charges: Vec<Charge>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for Plan {
    type CreateParams = PlanInput;
    type UpdateParams = PlanInput;
    type ListParams = PlanListParams;

    const NAME: &'static str = "Plan";
    const ROOT: &'static str = "plan";
    const PLURAL: &'static str = "plans";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "plans"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "plans/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "plans/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "plans"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "plans/{id}",
        ),
    ];
}

/// Whitelisted fields for plan create/update payloads.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct PlanInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<PlanInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_in_advance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_charges_monthly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<Vec<Charge>>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct PlanListParams {
    #[serde(flatten)]
    pub page: PageParams,
}
