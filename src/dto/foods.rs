use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Food;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFoodRequest {
    pub name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub food_image: String,
    pub menu_id: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateFoodRequest {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FoodPage {
    pub total_count: i64,
    pub food_items: Vec<Food>,
}
