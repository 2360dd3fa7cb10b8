//! Invoice resource implementation.
//!
//! Invoices are mostly server-generated; the create verb covers one-off
//! invoices only. Several lifecycle actions (`download`, `refresh`,
//! `finalize`, `retry_payment`) are POST/PUT endpoints that take a
//! literally empty body — not `{}` — which the connection guarantees.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{escape_path_segment, Connection, HttpMethod, HttpRequest};
use crate::rest::{
    unwrap_entity, unwrap_optional_entity, ApiResource, PageParams, ResourceError,
    ResourceOperation, ResourcePath,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    Subscription,
    AddOn,
    Credit,
    OneOff,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Finalized,
    Voided,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Invoice {
    pub lago_id: String,
    pub sequential_id: Option<u64>,
    pub number: Option<String>,
    pub issuing_date: Option<NaiveDate>,
    pub payment_due_date: Option<NaiveDate>,
    pub invoice_type: InvoiceType,
    pub status: InvoiceStatus,
    pub payment_status: PaymentStatus,
    pub currency: Option<String>,
    pub fees_amount_cents: Option<i64>,
    pub taxes_amount_cents: Option<i64>,
    pub sub_total_excluding_taxes_amount_cents: Option<i64>,
    pub total_amount_cents: Option<i64>,
    pub file_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiResource for Invoice {
    type CreateParams = OneOffInvoiceInput;
    type UpdateParams = InvoiceUpdateInput;
    type ListParams = InvoiceListParams;

    const NAME: &'static str = "Invoice";
    const ROOT: &'static str = "invoice";
    const PLURAL: &'static str = "invoices";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "invoices"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "invoices/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "invoices/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "invoices"),
    ];
}

impl Invoice {
    /// Requests the PDF for an invoice.
    ///
    /// Returns `None` when the server acknowledges the request with an
    /// empty success body (the document is still being generated); the
    /// invoice with its `file_url` otherwise.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the invoice does not exist.
    pub async fn download(
        connection: &Connection,
        identifier: &str,
    ) -> Result<Option<Self>, ResourceError> {
        let path = format!("invoices/{}/download", escape_path_segment(identifier));
        let response = connection
            .post(&path, None)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        unwrap_optional_entity(&response, Self::ROOT, Self::NAME)
    }

    /// Regenerates a draft invoice against current usage.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the invoice does not exist.
    pub async fn refresh(connection: &Connection, identifier: &str) -> Result<Self, ResourceError> {
        let path = format!("invoices/{}/refresh", escape_path_segment(identifier));
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .build()
            .map_err(|e| ResourceError::Http(e.into()))?;
        let response = connection
            .request(request)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        unwrap_entity(&response, Self::ROOT, Self::NAME)
    }

    /// Finalizes a draft invoice.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the invoice does not exist.
    pub async fn finalize(
        connection: &Connection,
        identifier: &str,
    ) -> Result<Self, ResourceError> {
        let path = format!("invoices/{}/finalize", escape_path_segment(identifier));
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .build()
            .map_err(|e| ResourceError::Http(e.into()))?;
        let response = connection
            .request(request)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        unwrap_entity(&response, Self::ROOT, Self::NAME)
    }

    /// Retries collection of a failed payment.
    ///
    /// Returns `None` when the retry is merely acknowledged.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the invoice does not exist.
    pub async fn retry_payment(
        connection: &Connection,
        identifier: &str,
    ) -> Result<Option<Self>, ResourceError> {
        let path = format!("invoices/{}/retry_payment", escape_path_segment(identifier));
        let response = connection
            .post(&path, None)
            .await
            .map_err(|e| ResourceError::from_http(e, Self::NAME))?;

        unwrap_optional_entity(&response, Self::ROOT, Self::NAME)
    }
}

/// A line of a one-off invoice.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct OneOffInvoiceFee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Whitelisted fields for one-off invoice creation.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct OneOffInvoiceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Vec<OneOffInvoiceFee>>,
}

/// Whitelisted fields for invoice updates.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct InvoiceUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct InvoiceListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_date_to: Option<NaiveDate>,
}
