use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::orders::{CreateOrderRequest, OrderPage, UpdateOrderRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Order,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{order_id}", get(get_order).patch(update_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(Pagination),
    responses(
        (status = 200, description = "Page of orders", body = ApiResponse<OrderPage>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OrderPage>>> {
    let page = order_service::list_orders(&state, query.window()).await?;
    let meta = Meta::for_page(&page);
    let data = OrderPage {
        total_count: page.total_count,
        orders: page.items,
    };
    Ok(Json(ApiResponse::success("Orders", data, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = ApiResponse<Order>),
        (status = 422, description = "Table was not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::create_order(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Order created",
        order,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    params(("order_id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = ApiResponse<Order>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::get_order(&state, &order_id).await?;
    Ok(Json(ApiResponse::success("OK", order, Some(Meta::empty()))))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}",
    params(("order_id" = String, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<Order>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Table was not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(order_id): Path<String>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::update_order(&state, &order_id, payload).await?;
    Ok(Json(ApiResponse::success("Updated", order, Some(Meta::empty()))))
}
