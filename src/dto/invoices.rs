use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::orders::ItemView, models::Invoice};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInvoiceRequest {
    pub order_id: String,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateInvoiceRequest {
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceView {
    pub invoice_id: String,
    /// `"null"` when no payment method was recorded.
    pub payment_method: String,
    pub order_id: String,
    pub payment_status: String,
    #[schema(value_type = String)]
    pub payment_due: Decimal,
    pub table_number: Option<i32>,
    pub payment_due_date: DateTime<Utc>,
    pub order_details: Vec<ItemView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoicePage {
    pub total_count: i64,
    pub invoices: Vec<Invoice>,
}
