//! Billable metric resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

/// How a billable metric aggregates incoming events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AggregationType {
    CountAgg,
    SumAgg,
    MaxAgg,
    UniqueCountAgg,
    WeightedSumAgg,
    LatestAgg,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BillableMetric {
    pub lago_id: String,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub aggregation_type: AggregationType,
    pub field_name: Option<String>,
    #[serde(default)]
    pub recurring: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for BillableMetric {
    type CreateParams = BillableMetricInput;
    type UpdateParams = BillableMetricInput;
    type ListParams = BillableMetricListParams;

    const NAME: &'static str = "BillableMetric";
    const ROOT: &'static str = "billable_metric";
    const PLURAL: &'static str = "billable_metrics";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "billable_metrics",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "billable_metrics/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "billable_metrics/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "billable_metrics",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "billable_metrics/{id}",
        ),
    ];
}

/// Whitelisted fields for billable metric create/update payloads.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct BillableMetricInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<AggregationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct BillableMetricListParams {
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
            "lago_id": "bm_123",
            "name": "API calls",
            "code": "api_calls",
            "description": null,
            "aggregation_type": "count_agg",
            "field_name": null,
            "recurring": false,
            "created_at": "2024-01-10T12:00:00Z"
        });

        let metric: BillableMetric = serde_json::from_value(value).unwrap();
        assert_eq!(metric.code, "api_calls");
        assert_eq!(metric.aggregation_type, AggregationType::CountAgg);
        assert!(!metric.recurring);
    }

    #[test]
    fn test_input_omits_absent_fields() {
        let input = BillableMetricInput {
            code: Some("api_calls".to_string()),
            aggregation_type: Some(AggregationType::SumAgg),
            ..Default::default()
        };

        let value = serde_json::to_value(input).unwrap();
        assert_eq!(
            value,
            json!({"code": "api_calls", "aggregation_type": "sum_agg"})
        );
    }

    #[test]
    fn test_full_crud_paths_are_declared() {
        use crate::rest::get_path;

        for (operation, ids) in [
            (ResourceOperation::Create, vec![]),
            (ResourceOperation::Update, vec!["id"]),
            (ResourceOperation::Find, vec!["id"]),
            (ResourceOperation::All, vec![]),
            (ResourceOperation::Delete, vec!["id"]),
        ] {
            assert!(
                get_path(BillableMetric::PATHS, operation, &ids).is_some(),
                "{operation:?} should be declared"
            );
        }
    }
}
