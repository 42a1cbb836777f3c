use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::OrderItem;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderItemRequest {
    #[schema(value_type = Option<String>)]
    pub unit_price: Option<Decimal>,
    pub quantity: Option<i32>,
    pub food_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemPage {
    pub total_count: i64,
    pub order_items: Vec<OrderItem>,
}
