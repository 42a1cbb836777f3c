use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::{
        order_items::{OrderItemPage, UpdateOrderItemRequest},
        orders::{ComposeOrderRequest, ComposedOrder, OrderView},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::OrderItem,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::{order_item_service, order_service, order_view},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_order_items).post(compose_order))
        .route(
            "/{order_item_id}",
            get(get_order_item).patch(update_order_item),
        )
        .route("/order/{order_id}", get(items_by_order))
}

#[utoipa::path(
    get,
    path = "/api/order-items",
    params(Pagination),
    responses(
        (status = 200, description = "Page of order items", body = ApiResponse<OrderItemPage>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Order Items"
)]
pub async fn list_order_items(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OrderItemPage>>> {
    let page = order_item_service::list_order_items(&state, query.window()).await?;
    let meta = Meta::for_page(&page);
    let data = OrderItemPage {
        total_count: page.total_count,
        order_items: page.items,
    };
    Ok(Json(ApiResponse::success("Order items", data, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/order-items",
    request_body = ComposeOrderRequest,
    responses(
        (status = 200, description = "Order and its items created", body = ApiResponse<ComposedOrder>),
        (status = 400, description = "Invalid item"),
        (status = 422, description = "Table or food was not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Order Items"
)]
pub async fn compose_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<ComposeOrderRequest>,
) -> AppResult<Json<ApiResponse<ComposedOrder>>> {
    let composed = order_service::compose_order(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Order items created",
        composed,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/order-items/{order_item_id}",
    params(("order_item_id" = String, Path, description = "Order item ID")),
    responses(
        (status = 200, description = "Order item", body = ApiResponse<OrderItem>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Order Items"
)]
pub async fn get_order_item(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(order_item_id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderItem>>> {
    let item = order_item_service::get_order_item(&state, &order_item_id).await?;
    Ok(Json(ApiResponse::success("OK", item, Some(Meta::empty()))))
}

#[utoipa::path(
    patch,
    path = "/api/order-items/{order_item_id}",
    params(("order_item_id" = String, Path, description = "Order item ID")),
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Order item updated", body = ApiResponse<OrderItem>),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Food was not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Order Items"
)]
pub async fn update_order_item(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(order_item_id): Path<String>,
    Json(payload): Json<UpdateOrderItemRequest>,
) -> AppResult<Json<ApiResponse<OrderItem>>> {
    let item = order_item_service::update_order_item(&state, &order_item_id, payload).await?;
    Ok(Json(ApiResponse::success("Updated", item, Some(Meta::empty()))))
}

/// Zero groups (an order without items) is an empty list, not an error.
#[utoipa::path(
    get,
    path = "/api/order-items/order/{order_id}",
    params(("order_id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Aggregated view of the order's items", body = ApiResponse<Vec<OrderView>>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Order Items"
)]
pub async fn items_by_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<OrderView>>>> {
    let view = order_view::reconstruct_order_view(&state, &order_id).await?;
    let data: Vec<OrderView> = view.into_iter().collect();
    Ok(Json(ApiResponse::success("OK", data, Some(Meta::empty()))))
}
