use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use crate::{
    dto::order_items::UpdateOrderItemRequest,
    entity::{
        Foods, OrderItems,
        order_items::{ActiveModel as OrderItemActive, Column as OrderItemCol},
    },
    error::{AppError, AppResult},
    ids::now,
    models::OrderItem,
    money::non_negative_price,
    services::{
        order_service::validate_quantity,
        pagination::{Page, PageWindow, list_page},
        references::ensure_exists,
    },
    state::AppState,
};

pub async fn list_order_items(state: &AppState, window: PageWindow) -> AppResult<Page<OrderItem>> {
    state
        .bounded(async {
            let finder = OrderItems::find()
                .order_by_asc(OrderItemCol::CreatedAt)
                .order_by_asc(OrderItemCol::Id);
            let page = list_page(&state.orm, finder, window).await?;
            Ok(page.map(OrderItem::from))
        })
        .await
}

pub async fn get_order_item(state: &AppState, id: &str) -> AppResult<OrderItem> {
    state
        .bounded(async {
            OrderItems::find_by_id(id.to_string())
                .one(&state.orm)
                .await?
                .map(OrderItem::from)
                .ok_or(AppError::NotFound)
        })
        .await
}

pub async fn update_order_item(
    state: &AppState,
    id: &str,
    payload: UpdateOrderItemRequest,
) -> AppResult<OrderItem> {
    state
        .bounded(async {
            let existing = OrderItems::find_by_id(id.to_string()).one(&state.orm).await?;
            if existing.is_none() {
                return Err(AppError::NotFound);
            }
            if let Some(food_id) = payload.food_id.as_deref() {
                ensure_exists::<Foods, _>(&state.orm, food_id).await?;
            }

            let item = order_item_patch(id, payload)?.update(&state.orm).await?;
            tracing::debug!(order_item_id = %item.id, "order item updated");
            Ok(OrderItem::from(item))
        })
        .await
}

/// Sparse update of a line item. A present unit price is rounded like on insert.
pub fn order_item_patch(id: &str, payload: UpdateOrderItemRequest) -> AppResult<OrderItemActive> {
    let unit_price = match payload.unit_price {
        Some(price) => Set(non_negative_price(price, "unit_price")?),
        None => NotSet,
    };
    let quantity = match payload.quantity {
        Some(quantity) => {
            validate_quantity(quantity)?;
            Set(quantity)
        }
        None => NotSet,
    };
    Ok(OrderItemActive {
        id: Unchanged(id.to_string()),
        order_id: NotSet,
        food_id: payload.food_id.map(Set).unwrap_or(NotSet),
        quantity,
        unit_price,
        created_at: NotSet,
        updated_at: Set(now()),
    })
}
