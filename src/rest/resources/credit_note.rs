//! Credit note resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{escape_path_segment, Connection, HttpMethod, HttpRequest};
use crate::rest::{
    unwrap_entity, unwrap_optional_entity, ApiResource, PageParams, ResourceError,
    ResourceOperation, ResourcePath,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CreditStatus {
    Available,
    Consumed,
    Voided,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Pending,
    Succeeded,
    Failed,
}

/// Why a credit note was issued.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CreditNoteReason {
    DuplicatedCharge,
    ProductUnsatisfactory,
    OrderChange,
    OrderCancellation,
    FraudulentCharge,
    Other,
}

/// An invoice fee a credit note applies to.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CreditNoteItemInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreditNote {
    pub lago_id: String,
    pub sequential_id: Option<u64>,
    pub number: Option<String>,
    pub lago_invoice_id: String,
    pub invoice_number: Option<String>,
    pub credit_status: Option<CreditStatus>,
    pub refund_status: Option<RefundStatus>,
    pub reason: Option<CreditNoteReason>,
    pub currency: Option<String>,
    pub total_amount_cents: Option<i64>,
    pub credit_amount_cents: Option<i64>,
    pub refund_amount_cents: Option<i64>,
    pub balance_amount_cents: Option<i64>,
    pub file_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for CreditNote {
    type CreateParams = CreditNoteCreateInput;
    type UpdateParams = CreditNoteUpdateInput;
    type ListParams = CreditNoteListParams;

    const NAME: &'static str = "CreditNote";
    const ROOT: &'static str = "credit_note";
    const PLURAL: &'static str = "credit_notes";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "credit_notes",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "credit_notes/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "credit_notes/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "credit_notes"),
    ];
}

impl CreditNote {
    /// Requests the PDF for a credit note.
    ///
    /// Returns `None` while the document is still being generated.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the credit note does not exist.
    pub async fn download(
        connection: &Connection,
        identifier: &str,
    ) -> Result<Option<Self>, ResourceError> {
        let path = format!("credit_notes/{}/download", escape_path_segment(identifier));
        let response = connection
            .post(&path, None)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        unwrap_optional_entity(&response, Self::ROOT, Self::NAME)
    }

    /// Voids the remaining credit on a credit note.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the credit note does not exist.
    pub async fn void(connection: &Connection, identifier: &str) -> Result<Self, ResourceError> {
        let path = format!("credit_notes/{}/void", escape_path_segment(identifier));
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .build()
            .map_err(|e| ResourceError::Http(e.into()))?;
        let response = connection
            .request(request)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        unwrap_entity(&response, Self::ROOT, Self::NAME)
    }
}

/// Whitelisted fields for credit note creation.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CreditNoteCreateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CreditNoteReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CreditNoteItemInput>>,
}

/// Whitelisted fields for credit note updates.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CreditNoteUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_status: Option<RefundStatus>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CreditNoteListParams {
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
            "lago_id": "cn_1",
            "sequential_id": 2,
            "number": "ACM-2024-007-CN2",
            "lago_invoice_id": "inv_1",
            "invoice_number": "ACM-2024-007",
            "credit_status": "available",
            "refund_status": null,
            "reason": "order_change",
            "currency": "EUR",
            "total_amount_cents": 1000,
            "credit_amount_cents": 1000,
            "refund_amount_cents": 0,
            "balance_amount_cents": 1000,
            "file_url": null,
            "created_at": "2024-05-10T00:00:00Z"
        });

        let note: CreditNote = serde_json::from_value(value).unwrap();
        assert_eq!(note.credit_status, Some(CreditStatus::Available));
        assert_eq!(note.reason, Some(CreditNoteReason::OrderChange));
    }

    #[test]
    fn test_create_input_serializes_items() {
        let input = CreditNoteCreateInput {
            invoice_id: Some("inv_1".to_string()),
            reason: Some(CreditNoteReason::Other),
            items: Some(vec![CreditNoteItemInput {
                fee_id: Some("fee_1".to_string()),
                amount_cents: Some(500),
            }]),
            ..Default::default()
        };

        let value = serde_json::to_value(input).unwrap();
        assert_eq!(
            value,
            json!({
                "invoice_id": "inv_1",
                "reason": "other",
                "items": [{"fee_id": "fee_1", "amount_cents": 500}]
            })
        );
    }
}
