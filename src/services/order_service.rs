use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, TransactionTrait};

use crate::{
    dto::orders::{ComposeOrderRequest, ComposedOrder, CreateOrderRequest, OrderItemInput, UpdateOrderRequest},
    entity::{
        Foods, OrderItems, Orders, Tables, order_items::{ActiveModel as OrderItemActive, Model as OrderItemModel},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Model as OrderModel},
    },
    error::{AppError, AppResult},
    ids::{new_id, now},
    models::{Order, OrderItem},
    money::non_negative_price,
    services::{
        pagination::{Page, PageWindow, list_page},
        references::ensure_exists,
    },
    state::AppState,
};

/// Create an order and its batch of line items as one unit.
///
/// The table and every item are validated before anything is written; the first invalid
/// entry aborts the whole batch. The order insert and the item batch share a transaction.
/// Unit prices are the caller's override when given, else the food's stored price, rounded
/// once here.
pub async fn compose_order(state: &AppState, payload: ComposeOrderRequest) -> AppResult<ComposedOrder> {
    state
        .bounded(async {
            let ComposeOrderRequest {
                table_id,
                order_items,
            } = payload;

            if order_items.is_empty() {
                return Err(AppError::BadRequest("order_items must not be empty".into()));
            }
            for item in &order_items {
                validate_item_input(item)?;
            }

            let txn = state.orm.begin().await?;

            if let Some(table_id) = table_id.as_deref() {
                ensure_exists::<Tables, _>(&txn, table_id).await?;
            }

            let mut unit_prices = Vec::with_capacity(order_items.len());
            for item in &order_items {
                let food = ensure_exists::<Foods, _>(&txn, &item.food_id).await?;
                let unit_price = match item.unit_price {
                    Some(price) => non_negative_price(price, "unit_price")?,
                    None => food.price,
                };
                unit_prices.push(unit_price);
            }

            let stamped = now();
            let order = OrderActive {
                id: Set(new_id()),
                order_date: Set(stamped),
                table_id: Set(table_id),
                created_at: Set(stamped),
                updated_at: Set(stamped),
            }
            .insert(&txn)
            .await?;

            let items: Vec<OrderItemModel> = order_items
                .into_iter()
                .zip(unit_prices)
                .map(|(item, unit_price)| OrderItemModel {
                    id: new_id(),
                    order_id: order.id.clone(),
                    food_id: item.food_id,
                    quantity: item.quantity,
                    unit_price,
                    created_at: stamped,
                    updated_at: stamped,
                })
                .collect();

            OrderItems::insert_many(
                items
                    .iter()
                    .cloned()
                    .map(|model| OrderItemActive::from(model).reset_all()),
            )
            .exec_without_returning(&txn)
            .await?;

            txn.commit().await?;

            tracing::info!(order_id = %order.id, item_count = items.len(), "order composed");

            Ok(ComposedOrder {
                order: Order::from(order),
                items: items.into_iter().map(OrderItem::from).collect(),
            })
        })
        .await
}

pub(crate) fn validate_item_input(item: &OrderItemInput) -> AppResult<()> {
    if item.food_id.trim().is_empty() {
        return Err(AppError::BadRequest("food_id is required".into()));
    }
    validate_quantity(item.quantity)
}

pub(crate) fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity < 1 {
        return Err(AppError::BadRequest("quantity must be at least 1".into()));
    }
    Ok(())
}

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    state
        .bounded(async {
            if let Some(table_id) = payload.table_id.as_deref() {
                ensure_exists::<Tables, _>(&state.orm, table_id).await?;
            }

            let stamped = now();
            let order = OrderActive {
                id: Set(new_id()),
                order_date: Set(payload.order_date.unwrap_or(stamped)),
                table_id: Set(payload.table_id),
                created_at: Set(stamped),
                updated_at: Set(stamped),
            }
            .insert(&state.orm)
            .await?;

            tracing::info!(order_id = %order.id, "order created");
            Ok(Order::from(order))
        })
        .await
}

pub async fn list_orders(state: &AppState, window: PageWindow) -> AppResult<Page<Order>> {
    state
        .bounded(async {
            let finder = Orders::find()
                .order_by_asc(OrderCol::CreatedAt)
                .order_by_asc(OrderCol::Id);
            let page = list_page(&state.orm, finder, window).await?;
            Ok(page.map(Order::from))
        })
        .await
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<Order> {
    state
        .bounded(async {
            Orders::find_by_id(id.to_string())
                .one(&state.orm)
                .await?
                .map(Order::from)
                .ok_or(AppError::NotFound)
        })
        .await
}

pub async fn update_order(state: &AppState, id: &str, payload: UpdateOrderRequest) -> AppResult<Order> {
    state
        .bounded(async {
            let existing = Orders::find_by_id(id.to_string()).one(&state.orm).await?;
            if existing.is_none() {
                return Err(AppError::NotFound);
            }
            if let Some(table_id) = payload.table_id.as_deref() {
                ensure_exists::<Tables, _>(&state.orm, table_id).await?;
            }

            let order: OrderModel = order_patch(id, payload).update(&state.orm).await?;
            Ok(Order::from(order))
        })
        .await
}

/// Sparse update: only fields present in `payload` are written, plus `updated_at`.
pub fn order_patch(id: &str, payload: UpdateOrderRequest) -> OrderActive {
    OrderActive {
        id: Unchanged(id.to_string()),
        order_date: NotSet,
        table_id: payload.table_id.map(|t| Set(Some(t))).unwrap_or(NotSet),
        created_at: NotSet,
        updated_at: Set(now()),
    }
}
