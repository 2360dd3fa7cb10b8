//! Concrete resources of the Lago API.
//!
//! Each module declares one resource: its entity struct, its typed
//! create/update/list whitelists, and its [`ResourcePath`] table. All HTTP
//! behavior comes from the generic [`ApiResource`] machinery; the modules
//! here contain only per-resource facts plus the handful of action
//! endpoints that fall outside plain CRUD.
//!
//! [`ApiResource`]: crate::rest::ApiResource
//! [`ResourcePath`]: crate::rest::ResourcePath

mod add_on;
mod applied_coupon;
mod billable_metric;
mod coupon;
mod credit_note;
mod customer;
mod event;
mod fee;
mod invoice;
mod plan;
mod subscription;
mod tax;
mod wallet;
mod wallet_transaction;
mod webhook_endpoint;

pub use add_on::{AddOn, AddOnInput, AddOnListParams};
pub use applied_coupon::{
    AppliedCoupon, AppliedCouponInput, AppliedCouponListParams, AppliedCouponStatus,
};
pub use billable_metric::{
    AggregationType, BillableMetric, BillableMetricInput, BillableMetricListParams,
};
pub use coupon::{
    Coupon, CouponExpiration, CouponFrequency, CouponInput, CouponListParams, CouponType,
};
pub use credit_note::{
    CreditNote, CreditNoteCreateInput, CreditNoteItemInput, CreditNoteListParams,
    CreditNoteReason, CreditNoteUpdateInput, CreditStatus, RefundStatus,
};
pub use customer::{
    BillingConfiguration, Customer, CustomerInput, CustomerListParams, CustomerMetadata,
};
pub use event::{Event, EventInput, EventListParams};
pub use fee::{Fee, FeeItem, FeeListParams, FeeUpdateInput};
pub use invoice::{
    Invoice, InvoiceListParams, InvoiceStatus, InvoiceType, InvoiceUpdateInput, OneOffInvoiceFee,
    OneOffInvoiceInput, PaymentStatus,
};
pub use plan::{Charge, ChargeModel, Plan, PlanInput, PlanInterval, PlanListParams};
pub use subscription::{
    BillingTime, Subscription, SubscriptionCreateInput, SubscriptionListParams,
    SubscriptionStatus, SubscriptionUpdateInput,
};
pub use tax::{Tax, TaxInput, TaxListParams};
pub use wallet::{Wallet, WalletCreateInput, WalletListParams, WalletStatus, WalletUpdateInput};
pub use wallet_transaction::{
    WalletTransaction, WalletTransactionInput, WalletTransactionListParams,
    WalletTransactionStatus, WalletTransactionType,
};
pub use webhook_endpoint::{
    SignatureAlgo, WebhookEndpoint, WebhookEndpointInput, WebhookEndpointListParams,
};
