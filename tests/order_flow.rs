mod common;

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use restaurant_api::{
    dto::{
        invoices::{CreateInvoiceRequest, UpdateInvoiceRequest},
        order_items::UpdateOrderItemRequest,
        orders::{ComposeOrderRequest, CreateOrderRequest, OrderItemInput, UpdateOrderRequest},
    },
    entity::{OrderItems, Orders, order_items},
    error::AppError,
    ids::{new_id, now},
    services::{invoice_service, order_item_service, order_service, order_view},
};

use common::{create_food, create_menu, create_table, setup_state};

fn line(food_id: &str, quantity: i32) -> OrderItemInput {
    OrderItemInput {
        food_id: food_id.into(),
        quantity,
        unit_price: None,
    }
}

#[tokio::test]
async fn composed_order_view_sums_food_prices() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let table_id = create_table(&state, 7).await?;
    let pizza = create_food(&state, &menu_id, "pizza", 500).await?;
    let soup = create_food(&state, &menu_id, "soup", 350).await?;

    let composed = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: Some(table_id.clone()),
            order_items: vec![
                line(&pizza.food_id, 1),
                line(&soup.food_id, 2),
                line(&soup.food_id, 1),
            ],
        },
    )
    .await?;
    assert_eq!(composed.items.len(), 3);
    assert_eq!(composed.order.table_id.as_deref(), Some(table_id.as_str()));
    assert_eq!(composed.items[1].unit_price, Decimal::new(350, 2));

    let view = order_view::reconstruct_order_view(&state, &composed.order.order_id)
        .await?
        .expect("order has items");
    assert_eq!(view.payment_due, Decimal::new(1200, 2));
    assert_eq!(view.total_count, 3);
    assert_eq!(view.table_number, Some(7));
    let quantities: Vec<i32> = view.order_items.iter().map(|i| i.quantity).collect();
    assert_eq!(quantities, vec![1, 2, 1]);
    assert_eq!(view.order_items[0].food_name.as_deref(), Some("pizza"));

    // reading twice without writes in between gives the same view
    let again = order_view::reconstruct_order_view(&state, &composed.order.order_id)
        .await?
        .expect("order has items");
    assert_eq!(again.payment_due, view.payment_due);
    assert_eq!(again.total_count, view.total_count);
    assert_eq!(again.order_items.len(), view.order_items.len());
    Ok(())
}

#[tokio::test]
async fn unknown_table_aborts_before_any_write() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let food = create_food(&state, &menu_id, "ramen", 900).await?;

    let result = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: Some("no-such-table".into()),
            order_items: vec![line(&food.food_id, 1)],
        },
    )
    .await;

    assert!(matches!(result, Err(AppError::DependencyNotFound("Table"))));
    assert_eq!(Orders::find().count(&state.orm).await?, 0);
    assert_eq!(OrderItems::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn one_unknown_food_rejects_the_whole_batch() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let food = create_food(&state, &menu_id, "ramen", 900).await?;

    let result = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: None,
            order_items: vec![line(&food.food_id, 1), line("ghost-food", 2)],
        },
    )
    .await;

    assert!(matches!(result, Err(AppError::DependencyNotFound("Food"))));
    assert_eq!(Orders::find().count(&state.orm).await?, 0);
    assert_eq!(OrderItems::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn empty_batch_and_bad_quantity_are_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let food = create_food(&state, &menu_id, "ramen", 900).await?;

    let empty = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: None,
            order_items: vec![],
        },
    )
    .await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    let zero = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: None,
            order_items: vec![line(&food.food_id, 0)],
        },
    )
    .await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));
    assert_eq!(Orders::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn caller_unit_price_is_rounded_half_away_from_zero() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let food = create_food(&state, &menu_id, "ramen", 900).await?;

    let composed = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: None,
            order_items: vec![OrderItemInput {
                food_id: food.food_id.clone(),
                quantity: 1,
                unit_price: Some(Decimal::new(4445, 3)),
            }],
        },
    )
    .await?;
    assert_eq!(composed.items[0].unit_price, Decimal::new(445, 2));

    let stored = order_item_service::get_order_item(&state, &composed.items[0].order_item_id).await?;
    assert_eq!(stored.unit_price, Decimal::new(445, 2));
    Ok(())
}

#[tokio::test]
async fn order_without_items_has_no_view() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let order = order_service::create_order(
        &state,
        CreateOrderRequest {
            table_id: None,
            order_date: None,
        },
    )
    .await?;

    let view = order_view::reconstruct_order_view(&state, &order.order_id).await?;
    assert!(view.is_none());

    let unknown = order_view::reconstruct_order_view(&state, "no-such-order").await;
    assert!(matches!(unknown, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn dangling_food_is_kept_with_empty_fields() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let food = create_food(&state, &menu_id, "pizza", 500).await?;
    let composed = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: None,
            order_items: vec![line(&food.food_id, 1)],
        },
    )
    .await?;

    // bypasses the reference check to simulate a food removed after ordering
    let stamped = now();
    order_items::ActiveModel {
        id: Set(new_id()),
        order_id: Set(composed.order.order_id.clone()),
        food_id: Set("deleted-food".into()),
        quantity: Set(2),
        unit_price: Set(100),
        created_at: Set(stamped),
        updated_at: Set(stamped),
    }
    .insert(&state.orm)
    .await?;

    let view = order_view::reconstruct_order_view(&state, &composed.order.order_id)
        .await?
        .expect("order has items");
    assert_eq!(view.total_count, 2);
    assert_eq!(view.payment_due, Decimal::new(500, 2));
    assert_eq!(view.table_number, None);

    let dangling = &view.order_items[1];
    assert_eq!(dangling.food_name, None);
    assert_eq!(dangling.amount, None);
    assert_eq!(dangling.quantity, 2);
    assert_eq!(dangling.order_id.as_deref(), Some(composed.order.order_id.as_str()));
    Ok(())
}

#[tokio::test]
async fn invoice_view_combines_invoice_and_order() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let table_id = create_table(&state, 3).await?;
    let curry = create_food(&state, &menu_id, "curry", 1250).await?;
    let composed = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: Some(table_id),
            order_items: vec![line(&curry.food_id, 2)],
        },
    )
    .await?;

    let invoice = invoice_service::create_invoice(
        &state,
        CreateInvoiceRequest {
            order_id: composed.order.order_id.clone(),
            payment_method: None,
            payment_status: None,
        },
    )
    .await?;
    assert_eq!(invoice.payment_status, invoice_service::DEFAULT_PAYMENT_STATUS);
    assert!(!invoice.invoice_id.is_empty());

    let view = invoice_service::invoice_view(&state, &invoice.invoice_id).await?;
    assert_eq!(view.payment_method, "null");
    assert_eq!(view.payment_status, "PENDING");
    assert_eq!(view.payment_due, Decimal::new(1250, 2));
    assert_eq!(view.table_number, Some(3));
    assert_eq!(view.order_details.len(), 1);

    let paid = invoice_service::update_invoice(
        &state,
        &invoice.invoice_id,
        UpdateInvoiceRequest {
            payment_method: Some("CARD".into()),
            payment_status: Some("PAID".into()),
        },
    )
    .await?;
    assert_eq!(paid.payment_method.as_deref(), Some("CARD"));
    assert_eq!(paid.payment_due_date, invoice.payment_due_date);

    let view = invoice_service::invoice_view(&state, &invoice.invoice_id).await?;
    assert_eq!(view.payment_method, "CARD");
    assert_eq!(view.payment_status, "PAID");
    Ok(())
}

#[tokio::test]
async fn invoice_for_an_order_without_items_is_an_empty_order() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let order = order_service::create_order(
        &state,
        CreateOrderRequest {
            table_id: None,
            order_date: None,
        },
    )
    .await?;
    let invoice = invoice_service::create_invoice(
        &state,
        CreateInvoiceRequest {
            order_id: order.order_id.clone(),
            payment_method: Some("CASH".into()),
            payment_status: None,
        },
    )
    .await?;

    let result = invoice_service::invoice_view(&state, &invoice.invoice_id).await;
    assert!(matches!(result, Err(AppError::EmptyOrder(id)) if id == order.order_id));

    let missing = invoice_service::invoice_view(&state, "no-such-invoice").await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn invoice_requires_an_existing_order() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let result = invoice_service::create_invoice(
        &state,
        CreateInvoiceRequest {
            order_id: "no-such-order".into(),
            payment_method: None,
            payment_status: None,
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::DependencyNotFound("Order"))));
    Ok(())
}

#[tokio::test]
async fn patches_touch_only_present_fields() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let first_table = create_table(&state, 1).await?;
    let second_table = create_table(&state, 2).await?;
    let food = create_food(&state, &menu_id, "pizza", 500).await?;
    let composed = order_service::compose_order(
        &state,
        ComposeOrderRequest {
            table_id: Some(first_table),
            order_items: vec![line(&food.food_id, 1)],
        },
    )
    .await?;

    let moved = order_service::update_order(
        &state,
        &composed.order.order_id,
        UpdateOrderRequest {
            table_id: Some(second_table.clone()),
        },
    )
    .await?;
    assert_eq!(moved.table_id.as_deref(), Some(second_table.as_str()));
    assert_eq!(moved.order_date, composed.order.order_date);

    let item = order_item_service::update_order_item(
        &state,
        &composed.items[0].order_item_id,
        UpdateOrderItemRequest {
            quantity: Some(4),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(item.quantity, 4);
    assert_eq!(item.unit_price, Decimal::new(500, 2));
    assert_eq!(item.food_id, food.food_id);

    let bad_table = order_service::update_order(
        &state,
        &composed.order.order_id,
        UpdateOrderRequest {
            table_id: Some("no-such-table".into()),
        },
    )
    .await;
    assert!(matches!(bad_table, Err(AppError::DependencyNotFound("Table"))));

    let missing = order_item_service::update_order_item(
        &state,
        "no-such-item",
        UpdateOrderItemRequest::default(),
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}
