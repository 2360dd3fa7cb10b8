//! Wallet resource implementation.
//!
//! Deleting a wallet terminates it; the final representation comes back
//! with its `terminated` status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ApiResource, PageParams, ResourceOperation, ResourcePath};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WalletStatus {
    Active,
    Terminated,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Wallet {
    pub lago_id: String,
    pub lago_customer_id: Option<String>,
    pub external_customer_id: String,
    pub status: WalletStatus,
    pub currency: String,
    pub name: Option<String>,
    pub rate_amount: Option<String>,
    pub credits_balance: Option<String>,
    pub balance_cents: Option<i64>,
    pub consumed_credits: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub expiration_at: Option<DateTime<Utc>>,
    pub terminated_at: Option<DateTime<Utc>>,
}

impl ApiResource for Wallet {
    type CreateParams = WalletCreateInput;
    type UpdateParams = WalletUpdateInput;
    type ListParams = WalletListParams;

    const NAME: &'static str = "Wallet";
    const ROOT: &'static str = "wallet";
    const PLURAL: &'static str = "wallets";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "wallets"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "wallets/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "wallets/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "wallets"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "wallets/{id}",
        ),
    ];
}

/// Whitelisted fields for wallet creation.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct WalletCreateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_at: Option<DateTime<Utc>>,
}

/// Whitelisted fields for wallet updates.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct WalletUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct WalletListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_decodes_from_api_shape() {
        let value = json!({
            "lago_id": "wal_1",
            "lago_customer_id": "cus_1",
            "external_customer_id": "acme-42",
            "status": "active",
            "currency": "EUR",
            "name": "Prepaid credits",
            "rate_amount": "1.0",
            "credits_balance": "150.0",
            "balance_cents": 15000,
            "consumed_credits": "50.0",
            "created_at": "2024-04-01T00:00:00Z",
            "expiration_at": null,
            "terminated_at": null
        });

        let wallet: Wallet = serde_json::from_value(value).unwrap();
        assert_eq!(wallet.status, WalletStatus::Active);
        assert_eq!(wallet.credits_balance.as_deref(), Some("150.0"));
    }

    #[test]
    fn test_create_and_update_whitelists_differ() {
        let create = WalletCreateInput {
            external_customer_id: Some("acme-42".to_string()),
            granted_credits: Some("100.0".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(create).unwrap();
        assert_eq!(
            value,
            json!({"external_customer_id": "acme-42", "granted_credits": "100.0"})
        );

        let update = WalletUpdateInput {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(update).unwrap();
        assert_eq!(value, json!({"name": "Renamed"}));
    }
}
