use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::{foods, invoices, order_items, orders, users},
    money::from_minor_units,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Food {
    pub food_id: String,
    pub name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    pub table_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub order_item_id: String,
    pub order_id: String,
    pub food_id: String,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Invoice {
    pub invoice_id: String,
    pub order_id: String,
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub payment_due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a user. The password hash never leaves the service layer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<foods::Model> for Food {
    fn from(model: foods::Model) -> Self {
        Self {
            food_id: model.id,
            name: model.name,
            price: from_minor_units(model.price),
            food_image: model.food_image,
            menu_id: model.menu_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            order_id: model.id,
            order_date: model.order_date,
            table_id: model.table_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<order_items::Model> for OrderItem {
    fn from(model: order_items::Model) -> Self {
        Self {
            order_item_id: model.id,
            order_id: model.order_id,
            food_id: model.food_id,
            quantity: model.quantity,
            unit_price: from_minor_units(model.unit_price),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<invoices::Model> for Invoice {
    fn from(model: invoices::Model) -> Self {
        Self {
            invoice_id: model.id,
            order_id: model.order_id,
            payment_method: model.payment_method,
            payment_status: model.payment_status,
            payment_due_date: model.payment_due_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            user_id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
