use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use crate::{
    dto::foods::{CreateFoodRequest, UpdateFoodRequest},
    entity::{
        Foods, Menus,
        foods::{ActiveModel as FoodActive, Column as FoodCol},
    },
    error::{AppError, AppResult},
    ids::{new_id, now},
    models::Food,
    money::non_negative_price,
    services::{
        pagination::{Page, PageWindow, list_page},
        references::ensure_exists,
    },
    state::AppState,
};

pub async fn list_foods(state: &AppState, window: PageWindow) -> AppResult<Page<Food>> {
    state
        .bounded(async {
            let finder = Foods::find()
                .order_by_asc(FoodCol::CreatedAt)
                .order_by_asc(FoodCol::Id);
            let page = list_page(&state.orm, finder, window).await?;
            Ok(page.map(Food::from))
        })
        .await
}

pub async fn create_food(state: &AppState, payload: CreateFoodRequest) -> AppResult<Food> {
    state
        .bounded(async {
            if payload.name.trim().is_empty() {
                return Err(AppError::BadRequest("name is required".into()));
            }
            let price = non_negative_price(payload.price, "price")?;
            ensure_exists::<Menus, _>(&state.orm, &payload.menu_id).await?;

            let stamped = now();
            let food = FoodActive {
                id: Set(new_id()),
                name: Set(payload.name),
                price: Set(price),
                food_image: Set(payload.food_image),
                menu_id: Set(payload.menu_id),
                created_at: Set(stamped),
                updated_at: Set(stamped),
            }
            .insert(&state.orm)
            .await?;

            tracing::info!(food_id = %food.id, menu_id = %food.menu_id, "food created");
            Ok(Food::from(food))
        })
        .await
}

pub async fn update_food(state: &AppState, id: &str, payload: UpdateFoodRequest) -> AppResult<Food> {
    state
        .bounded(async {
            let existing = Foods::find_by_id(id.to_string()).one(&state.orm).await?;
            if existing.is_none() {
                return Err(AppError::NotFound);
            }
            if let Some(menu_id) = payload.menu_id.as_deref() {
                ensure_exists::<Menus, _>(&state.orm, menu_id).await?;
            }

            let food = food_patch(id, payload)?.update(&state.orm).await?;
            Ok(Food::from(food))
        })
        .await
}

pub fn food_patch(id: &str, payload: UpdateFoodRequest) -> AppResult<FoodActive> {
    let price = match payload.price {
        Some(price) => Set(non_negative_price(price, "price")?),
        None => NotSet,
    };
    Ok(FoodActive {
        id: Unchanged(id.to_string()),
        name: payload.name.map(Set).unwrap_or(NotSet),
        price,
        food_image: payload.food_image.map(Set).unwrap_or(NotSet),
        menu_id: payload.menu_id.map(Set).unwrap_or(NotSet),
        created_at: NotSet,
        updated_at: Set(now()),
    })
}
