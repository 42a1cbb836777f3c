use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{AuthResponse, LoginRequest, SignupRequest, UserPage},
        foods::{CreateFoodRequest, FoodPage, UpdateFoodRequest},
        invoices::{CreateInvoiceRequest, InvoicePage, InvoiceView, UpdateInvoiceRequest},
        order_items::{OrderItemPage, UpdateOrderItemRequest},
        orders::{
            ComposeOrderRequest, ComposedOrder, CreateOrderRequest, ItemView, OrderItemInput,
            OrderPage, OrderView, UpdateOrderRequest,
        },
    },
    models::{Food, Invoice, Order, OrderItem, User},
    response::{ApiResponse, Meta},
    routes::{foods, health, invoices, order_items, orders, params, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::signup,
        users::login,
        users::list_users,
        foods::list_foods,
        foods::create_food,
        foods::update_food,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        order_items::list_order_items,
        order_items::compose_order,
        order_items::get_order_item,
        order_items::update_order_item,
        order_items::items_by_order,
        invoices::list_invoices,
        invoices::create_invoice,
        invoices::get_invoice,
        invoices::update_invoice
    ),
    components(
        schemas(
            User,
            Food,
            Order,
            OrderItem,
            Invoice,
            SignupRequest,
            LoginRequest,
            AuthResponse,
            UserPage,
            CreateFoodRequest,
            UpdateFoodRequest,
            FoodPage,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderPage,
            ComposeOrderRequest,
            OrderItemInput,
            ComposedOrder,
            UpdateOrderItemRequest,
            OrderItemPage,
            ItemView,
            OrderView,
            CreateInvoiceRequest,
            UpdateInvoiceRequest,
            InvoicePage,
            InvoiceView,
            params::Pagination,
            Meta,
            ApiResponse<FoodPage>,
            ApiResponse<ComposedOrder>,
            ApiResponse<InvoiceView>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "Signup, login and user listing"),
        (name = "Foods", description = "Food catalogue endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Order Items", description = "Order composition and aggregated order views"),
        (name = "Invoices", description = "Invoice endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
