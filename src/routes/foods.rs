use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};

use crate::{
    dto::foods::{CreateFoodRequest, FoodPage, UpdateFoodRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Food,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::food_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_foods).post(create_food))
        .route("/{food_id}", patch(update_food))
}

#[utoipa::path(
    get,
    path = "/api/foods",
    params(Pagination),
    responses(
        (status = 200, description = "Page of foods", body = ApiResponse<FoodPage>)
    ),
    security(("bearer_auth" = [])),
    tag = "Foods"
)]
pub async fn list_foods(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<FoodPage>>> {
    let page = food_service::list_foods(&state, query.window()).await?;
    let meta = Meta::for_page(&page);
    let data = FoodPage {
        total_count: page.total_count,
        food_items: page.items,
    };
    Ok(Json(ApiResponse::success("Foods", data, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/foods",
    request_body = CreateFoodRequest,
    responses(
        (status = 200, description = "Food created", body = ApiResponse<Food>),
        (status = 422, description = "Menu was not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Foods"
)]
pub async fn create_food(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateFoodRequest>,
) -> AppResult<Json<ApiResponse<Food>>> {
    let food = food_service::create_food(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Food created",
        food,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/foods/{food_id}",
    params(("food_id" = String, Path, description = "Food ID")),
    request_body = UpdateFoodRequest,
    responses(
        (status = 200, description = "Food updated", body = ApiResponse<Food>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Menu was not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Foods"
)]
pub async fn update_food(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(food_id): Path<String>,
    Json(payload): Json<UpdateFoodRequest>,
) -> AppResult<Json<ApiResponse<Food>>> {
    let food = food_service::update_food(&state, &food_id, payload).await?;
    Ok(Json(ApiResponse::success("Updated", food, Some(Meta::empty()))))
}
