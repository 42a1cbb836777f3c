//! Reconstruction of an order's invoice-ready view.
//!
//! Line items are the driving collection. Each item is outer-joined to its food and to its
//! order, the table is resolved through the joined order, rows are narrowed to the line
//! projection and then grouped by `(order_id, table_id, table_number)` with
//! `payment_due = sum(amount)` and `total_count = count(rows)`.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    dto::orders::{ItemView, OrderView},
    entity::{
        Foods, OrderItems, Orders, Tables, foods::Column as FoodCol,
        order_items::Column as OrderItemCol, orders::Column as OrderCol,
        tables::Column as TableCol,
    },
    error::{AppError, AppResult},
    money::from_minor_units,
    services::references::exists,
    state::AppState,
};

/// One line item after the food, order and table joins and the line projection.
/// Fields from a join that found no match are `None`.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct JoinedRow {
    pub amount: Option<i64>,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub table_number: Option<i32>,
    pub table_id: Option<String>,
    pub order_id: Option<String>,
    pub price: Option<i64>,
    pub quantity: i32,
}

type GroupKey = (Option<String>, Option<String>, Option<i32>);

impl JoinedRow {
    fn group_key(&self) -> GroupKey {
        (
            self.order_id.clone(),
            self.table_id.clone(),
            self.table_number,
        )
    }

    fn into_view(self) -> ItemView {
        ItemView {
            amount: self.amount.map(from_minor_units),
            food_name: self.food_name,
            food_image: self.food_image,
            table_number: self.table_number,
            table_id: self.table_id,
            order_id: self.order_id,
            price: self.price.map(from_minor_units),
            quantity: self.quantity,
        }
    }
}

/// Filter, join and project the line items of `order_id`, in insertion order.
pub async fn joined_rows<C>(db: &C, order_id: &str) -> AppResult<Vec<JoinedRow>>
where
    C: ConnectionTrait,
{
    let rows = OrderItems::find()
        .select_only()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .join(
            JoinType::LeftJoin,
            OrderItems::belongs_to(Foods)
                .from(OrderItemCol::FoodId)
                .to(FoodCol::Id)
                .into(),
        )
        .join(
            JoinType::LeftJoin,
            OrderItems::belongs_to(Orders)
                .from(OrderItemCol::OrderId)
                .to(OrderCol::Id)
                .into(),
        )
        // table is reached through the order, never from the item
        .join(
            JoinType::LeftJoin,
            Orders::belongs_to(Tables)
                .from(OrderCol::TableId)
                .to(TableCol::Id)
                .into(),
        )
        .column_as(FoodCol::Price, "amount")
        .column_as(FoodCol::Name, "food_name")
        .column_as(FoodCol::FoodImage, "food_image")
        .column_as(TableCol::TableNumber, "table_number")
        .column_as(TableCol::Id, "table_id")
        .column_as(OrderCol::Id, "order_id")
        .column_as(FoodCol::Price, "price")
        .column_as(OrderItemCol::Quantity, "quantity")
        .order_by_asc(OrderItemCol::CreatedAt)
        .order_by_asc(OrderItemCol::Id)
        .into_model::<JoinedRow>()
        .all(db)
        .await?;
    Ok(rows)
}

/// Group projected rows by `(order_id, table_id, table_number)`, keeping groups and the
/// rows inside them in first-seen order. Absent amounts do not contribute to the sum.
pub fn group_rows(rows: Vec<JoinedRow>) -> Vec<OrderView> {
    let mut groups: Vec<(GroupKey, i64, Vec<JoinedRow>)> = Vec::new();

    for row in rows {
        let key = row.group_key();
        let amount = row.amount.unwrap_or_default();
        match groups.iter_mut().find(|(existing, _, _)| *existing == key) {
            Some((_, due, members)) => {
                *due += amount;
                members.push(row);
            }
            None => groups.push((key, amount, vec![row])),
        }
    }

    groups
        .into_iter()
        .map(|((_, _, table_number), due, members)| OrderView {
            payment_due: from_minor_units(due),
            total_count: i64::try_from(members.len()).unwrap_or(i64::MAX),
            table_number,
            order_items: members.into_iter().map(JoinedRow::into_view).collect(),
        })
        .collect()
}

/// Every group for `order_id`. Invoked with a single order, so at most one group is expected.
pub async fn order_view_groups<C>(db: &C, order_id: &str) -> AppResult<Vec<OrderView>>
where
    C: ConnectionTrait,
{
    let rows = joined_rows(db, order_id).await?;
    let groups = group_rows(rows);
    if groups.len() > 1 {
        tracing::warn!(order_id, groups = groups.len(), "order view split into several groups");
    }
    Ok(groups)
}

/// First group of the view, `None` when the order exists but has no line items.
/// An unknown order with no items is [`AppError::NotFound`].
pub async fn view_for_order<C>(db: &C, order_id: &str) -> AppResult<Option<OrderView>>
where
    C: ConnectionTrait,
{
    let first = order_view_groups(db, order_id).await?.into_iter().next();
    if first.is_none() && !exists::<Orders, _>(db, order_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(first)
}

pub async fn reconstruct_order_view(state: &AppState, order_id: &str) -> AppResult<Option<OrderView>> {
    state
        .bounded(async {
            let view = view_for_order(&state.orm, order_id).await?;
            tracing::debug!(
                order_id,
                total_count = view.as_ref().map(|v| v.total_count).unwrap_or(0),
                "reconstructed order view"
            );
            Ok(view)
        })
        .await
}
