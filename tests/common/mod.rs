#![allow(dead_code)]

use std::time::Duration;

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};

use restaurant_api::{
    config::AppConfig,
    db::run_migrations,
    dto::foods::CreateFoodRequest,
    entity::{menus, tables},
    ids::{new_id, now},
    models::Food,
    services::food_service,
    state::AppState,
};

/// Fresh in-memory store with the production schema. One connection keeps the database alive
/// for the whole test.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;

    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        jwt_secret: "test-secret".into(),
        host: "127.0.0.1".into(),
        port: 0,
        max_connections: 1,
        store_timeout: Duration::from_secs(5),
    };
    Ok(AppState::new(orm, &config))
}

pub async fn create_menu(state: &AppState) -> anyhow::Result<String> {
    let stamped = now();
    let menu = menus::ActiveModel {
        id: Set(new_id()),
        name: Set("Lunch".into()),
        category: Set("Main".into()),
        start_date: Set(None),
        end_date: Set(None),
        created_at: Set(stamped),
        updated_at: Set(stamped),
    }
    .insert(&state.orm)
    .await?;
    Ok(menu.id)
}

pub async fn create_table(state: &AppState, table_number: i32) -> anyhow::Result<String> {
    let stamped = now();
    let table = tables::ActiveModel {
        id: Set(new_id()),
        table_number: Set(table_number),
        number_of_guests: Set(4),
        created_at: Set(stamped),
        updated_at: Set(stamped),
    }
    .insert(&state.orm)
    .await?;
    Ok(table.id)
}

/// `cents` is the price in minor units, e.g. `350` for 3.50.
pub async fn create_food(
    state: &AppState,
    menu_id: &str,
    name: &str,
    cents: i64,
) -> anyhow::Result<Food> {
    let food = food_service::create_food(
        state,
        CreateFoodRequest {
            name: name.into(),
            price: Decimal::new(cents, 2),
            food_image: format!("{name}.png"),
            menu_id: menu_id.into(),
        },
    )
    .await?;
    Ok(food)
}
