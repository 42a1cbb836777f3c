use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod foods;
pub mod health;
pub mod invoices;
pub mod order_items;
pub mod orders;
pub mod params;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/foods", foods::router())
        .nest("/orders", orders::router())
        .nest("/order-items", order_items::router())
        .nest("/invoices", invoices::router())
}
