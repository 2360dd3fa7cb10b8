//! Wallet transaction resource implementation.
//!
//! One top-up request can settle into several transactions (paid credits
//! and granted credits are distinct), so creation returns a collection and
//! is exposed as an inherent method rather than the single-entity trait
//! verb. Listing is scoped under the owning wallet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Connection, HttpMethod};
use crate::rest::{ApiResource, PageParams, ResourceError, ResourceOperation, ResourcePath};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WalletTransactionStatus {
    Pending,
    Settled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WalletTransactionType {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WalletTransaction {
    pub lago_id: String,
    pub lago_wallet_id: String,
    pub status: WalletTransactionStatus,
    pub transaction_type: WalletTransactionType,
    pub amount: Option<String>,
    pub credit_amount: Option<String>,
    pub settled_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for WalletTransaction {
    type CreateParams = WalletTransactionInput;
    type UpdateParams = WalletTransactionInput;
    type ListParams = WalletTransactionListParams;

    const NAME: &'static str = "WalletTransaction";
    const ROOT: &'static str = "wallet_transaction";
    const PLURAL: &'static str = "wallet_transactions";

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &["lago_id"],
        "wallets/{lago_id}/wallet_transactions",
    )];
}

impl WalletTransaction {
    /// Tops up a wallet, returning every transaction the top-up produced.
    ///
    /// # Errors
    ///
    /// [`ResourceError::ValidationFailed`] on a 422,
    /// [`ResourceError::Http`] for other API or transport errors.
    pub async fn create(
        connection: &Connection,
        params: WalletTransactionInput,
    ) -> Result<Vec<Self>, ResourceError> {
        let body = serde_json::json!({ "wallet_transaction": params });
        let response = connection
            .post("wallet_transactions", Some(body))
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        let body = response
            .json()
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: "create response had no JSON body".to_string(),
            })?;

        let transactions =
            body.get(Self::PLURAL)
                .ok_or_else(|| ResourceError::UnexpectedResponse {
                    resource: Self::NAME,
                    reason: "missing 'wallet_transactions' in response body".to_string(),
                })?;

        serde_json::from_value(transactions.clone()).map_err(|e| {
            ResourceError::UnexpectedResponse {
                resource: Self::NAME,
                reason: format!("failed to decode 'wallet_transactions': {e}"),
            }
        })
    }
}

/// Whitelisted fields for wallet top-ups.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct WalletTransactionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_credits: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct WalletTransactionListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WalletTransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<WalletTransactionType>,
}
