mod common;

use rust_decimal::Decimal;

use restaurant_api::{
    dto::{
        auth::SignupRequest,
        invoices::CreateInvoiceRequest,
        orders::{ComposeOrderRequest, CreateOrderRequest, OrderItemInput},
    },
    response::Meta,
    routes::params::Pagination,
    services::{auth_service, food_service, invoice_service, order_item_service, order_service},
    state::AppState,
};

use common::{create_food, create_menu, setup_state};

async fn create_orders(state: &AppState, count: usize) -> anyhow::Result<Vec<String>> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let order = order_service::create_order(
            state,
            CreateOrderRequest {
                table_id: None,
                order_date: None,
            },
        )
        .await?;
        ids.push(order.order_id);
    }
    Ok(ids)
}

#[tokio::test]
async fn third_page_of_twenty_five_foods() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    for n in 0..25 {
        create_food(&state, &menu_id, &format!("food-{n:02}"), 100 + n).await?;
    }

    let query = Pagination {
        page: Some(3),
        record_per_page: Some(10),
    };
    let page = food_service::list_foods(&state, query.window()).await?;
    assert_eq!(page.total_count, 25);
    let names: Vec<&str> = page.items.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["food-20", "food-21", "food-22", "food-23", "food-24"]);
    assert_eq!(page.items[0].price, Decimal::new(120, 2));

    let meta = Meta::for_page(&page);
    assert_eq!(meta.page, Some(3));
    assert_eq!(meta.record_per_page, Some(10));
    assert_eq!(meta.total_count, Some(25));
    Ok(())
}

#[tokio::test]
async fn invalid_page_size_falls_back_to_ten() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    for n in 0..12 {
        create_food(&state, &menu_id, &format!("food-{n:02}"), 100).await?;
    }

    let query = Pagination {
        page: Some(1),
        record_per_page: Some(0),
    };
    let page = food_service::list_foods(&state, query.window()).await?;
    assert_eq!(page.total_count, 12);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].name, "food-00");

    let past_end = Pagination {
        page: Some(5),
        record_per_page: None,
    };
    let page = food_service::list_foods(&state, past_end.window()).await?;
    assert_eq!(page.total_count, 12);
    assert!(page.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn user_listing_is_paged() -> anyhow::Result<()> {
    let state = setup_state().await?;
    for n in 0..3 {
        auth_service::signup(
            &state,
            SignupRequest {
                first_name: format!("First{n}"),
                last_name: "Guest".into(),
                email: format!("guest{n}@example.com"),
                phone: format!("555-000{n}"),
                password: "hunter22".into(),
            },
        )
        .await?;
    }

    let query = Pagination {
        page: Some(2),
        record_per_page: Some(2),
    };
    let page = auth_service::list_users(&state, query.window()).await?;
    assert_eq!(page.total_count, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].email, "guest2@example.com");
    Ok(())
}

#[tokio::test]
async fn offsets_beyond_the_store_give_an_empty_page() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    create_food(&state, &menu_id, "soup", 350).await?;

    let query = Pagination {
        page: Some(i64::MAX),
        record_per_page: Some(i64::MAX),
    };
    let page = food_service::list_foods(&state, query.window()).await?;
    assert_eq!(page.total_count, 1);
    assert!(page.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn orders_are_listed_in_creation_order() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ids = create_orders(&state, 5).await?;

    let query = Pagination {
        page: Some(2),
        record_per_page: Some(2),
    };
    let page = order_service::list_orders(&state, query.window()).await?;
    assert_eq!(page.total_count, 5);
    let listed: Vec<&str> = page.items.iter().map(|o| o.order_id.as_str()).collect();
    assert_eq!(listed, vec![ids[2].as_str(), ids[3].as_str()]);
    Ok(())
}

#[tokio::test]
async fn order_items_are_listed_across_orders() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let menu_id = create_menu(&state).await?;
    let food = create_food(&state, &menu_id, "tea", 200).await?;
    for quantity in [1, 2] {
        order_service::compose_order(
            &state,
            ComposeOrderRequest {
                table_id: None,
                order_items: vec![
                    OrderItemInput {
                        food_id: food.food_id.clone(),
                        quantity,
                        unit_price: None,
                    },
                    OrderItemInput {
                        food_id: food.food_id.clone(),
                        quantity: quantity + 10,
                        unit_price: None,
                    },
                ],
            },
        )
        .await?;
    }

    let page = order_item_service::list_order_items(&state, Pagination::default().window()).await?;
    assert_eq!(page.total_count, 4);
    let quantities: Vec<i32> = page.items.iter().map(|i| i.quantity).collect();
    assert_eq!(quantities, vec![1, 11, 2, 12]);
    assert!(page.items.iter().all(|i| i.unit_price == Decimal::new(200, 2)));
    Ok(())
}

#[tokio::test]
async fn invoices_are_listed_with_totals() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ids = create_orders(&state, 3).await?;
    for order_id in &ids {
        invoice_service::create_invoice(
            &state,
            CreateInvoiceRequest {
                order_id: order_id.clone(),
                payment_method: None,
                payment_status: None,
            },
        )
        .await?;
    }

    let query = Pagination {
        page: Some(1),
        record_per_page: Some(2),
    };
    let page = invoice_service::list_invoices(&state, query.window()).await?;
    assert_eq!(page.total_count, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].order_id, ids[0]);
    assert!(page.items.iter().all(|i| i.payment_status == "PENDING"));
    Ok(())
}
