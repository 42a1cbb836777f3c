use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::invoices::{CreateInvoiceRequest, InvoicePage, InvoiceView, UpdateInvoiceRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Invoice,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::invoice_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route("/{invoice_id}", get(get_invoice).patch(update_invoice))
}

#[utoipa::path(
    get,
    path = "/api/invoices",
    params(Pagination),
    responses(
        (status = 200, description = "Page of invoices", body = ApiResponse<InvoicePage>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Invoices"
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<InvoicePage>>> {
    let page = invoice_service::list_invoices(&state, query.window()).await?;
    let meta = Meta::for_page(&page);
    let data = InvoicePage {
        total_count: page.total_count,
        invoices: page.items,
    };
    Ok(Json(ApiResponse::success("Invoices", data, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 200, description = "Invoice created", body = ApiResponse<Invoice>),
        (status = 422, description = "Order was not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Invoices"
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateInvoiceRequest>,
) -> AppResult<Json<ApiResponse<Invoice>>> {
    let invoice = invoice_service::create_invoice(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Invoice created",
        invoice,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/invoices/{invoice_id}",
    params(("invoice_id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice with its order details", body = ApiResponse<InvoiceView>),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Order has no items")
    ),
    security(("bearer_auth" = [])),
    tag = "Invoices"
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(invoice_id): Path<String>,
) -> AppResult<Json<ApiResponse<InvoiceView>>> {
    let view = invoice_service::invoice_view(&state, &invoice_id).await?;
    Ok(Json(ApiResponse::success("OK", view, Some(Meta::empty()))))
}

#[utoipa::path(
    patch,
    path = "/api/invoices/{invoice_id}",
    params(("invoice_id" = String, Path, description = "Invoice ID")),
    request_body = UpdateInvoiceRequest,
    responses(
        (status = 200, description = "Invoice updated", body = ApiResponse<Invoice>),
        (status = 404, description = "Not Found")
    ),
    security(("bearer_auth" = [])),
    tag = "Invoices"
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(invoice_id): Path<String>,
    Json(payload): Json<UpdateInvoiceRequest>,
) -> AppResult<Json<ApiResponse<Invoice>>> {
    let invoice = invoice_service::update_invoice(&state, &invoice_id, payload).await?;
    Ok(Json(ApiResponse::success("Updated", invoice, Some(Meta::empty()))))
}
