use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use restaurant_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{auth::SignupRequest, foods::CreateFoodRequest},
    entity::{Foods, Menus, Tables, Users, foods, menus, tables, users},
    ids::{new_id, now},
    services::{auth_service, food_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, 1).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState::new(orm, &config);

    ensure_user(&state, "staff@example.com", "0800000000", "staff123").await?;
    let menu_id = ensure_menu(&state, "Dinner", "Main").await?;
    for (number, guests) in [(1, 2), (2, 4), (3, 6)] {
        ensure_table(&state, number, guests).await?;
    }
    seed_foods(&state, &menu_id).await?;

    println!("Seed completed. Menu ID: {menu_id}");
    Ok(())
}

async fn ensure_user(
    state: &AppState,
    email: &str,
    phone: &str,
    password: &str,
) -> anyhow::Result<()> {
    let existing = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        println!("User {email} already present");
        return Ok(());
    }

    auth_service::signup(
        state,
        SignupRequest {
            first_name: "Front".into(),
            last_name: "Desk".into(),
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
        },
    )
    .await?;
    println!("Ensured user {email}");
    Ok(())
}

async fn ensure_menu(state: &AppState, name: &str, category: &str) -> anyhow::Result<String> {
    if let Some(menu) = Menus::find()
        .filter(menus::Column::Name.eq(name))
        .one(&state.orm)
        .await?
    {
        return Ok(menu.id);
    }

    let stamped = now();
    let menu = menus::ActiveModel {
        id: Set(new_id()),
        name: Set(name.to_string()),
        category: Set(category.to_string()),
        start_date: Set(None),
        end_date: Set(None),
        created_at: Set(stamped),
        updated_at: Set(stamped),
    }
    .insert(&state.orm)
    .await?;
    println!("Seeded menu {name}");
    Ok(menu.id)
}

async fn ensure_table(state: &AppState, table_number: i32, guests: i32) -> anyhow::Result<()> {
    let existing = Tables::find()
        .filter(tables::Column::TableNumber.eq(table_number))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let stamped = now();
    tables::ActiveModel {
        id: Set(new_id()),
        table_number: Set(table_number),
        number_of_guests: Set(guests),
        created_at: Set(stamped),
        updated_at: Set(stamped),
    }
    .insert(&state.orm)
    .await?;
    println!("Seeded table {table_number}");
    Ok(())
}

async fn seed_foods(state: &AppState, menu_id: &str) -> anyhow::Result<()> {
    let foods = [
        ("Margherita", Decimal::new(950, 2), "margherita.png"),
        ("Green Curry", Decimal::new(1250, 2), "green-curry.png"),
        ("Miso Soup", Decimal::new(350, 2), "miso.png"),
        ("Tiramisu", Decimal::new(600, 2), "tiramisu.png"),
    ];

    for (name, price, image) in foods {
        let existing = Foods::find()
            .filter(foods::Column::Name.eq(name))
            .one(&state.orm)
            .await?;
        if existing.is_some() {
            continue;
        }
        food_service::create_food(
            state,
            CreateFoodRequest {
                name: name.to_string(),
                price,
                food_image: image.to_string(),
                menu_id: menu_id.to_string(),
            },
        )
        .await?;
    }

    println!("Seeded foods");
    Ok(())
}
