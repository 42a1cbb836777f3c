use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, OrderItem};

/// A batch of line items that creates its parent order as part of the same request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ComposeOrderRequest {
    pub table_id: Option<String>,
    pub order_items: Vec<OrderItemInput>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderItemInput {
    pub food_id: String,
    pub quantity: i32,
    /// Overrides the food's current price when present.
    #[schema(value_type = Option<String>)]
    pub unit_price: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComposedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub table_id: Option<String>,
    pub order_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub table_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderPage {
    pub total_count: i64,
    pub orders: Vec<Order>,
}

/// One reconstructed line: the item joined with its food, order and table.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemView {
    #[schema(value_type = Option<String>)]
    pub amount: Option<Decimal>,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub table_number: Option<i32>,
    pub table_id: Option<String>,
    pub order_id: Option<String>,
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub quantity: i32,
}

/// Invoice-ready aggregate of every line item of one order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderView {
    #[schema(value_type = String)]
    pub payment_due: Decimal,
    pub total_count: i64,
    pub table_number: Option<i32>,
    pub order_items: Vec<ItemView>,
}
