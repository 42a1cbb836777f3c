pub mod auth_service;
pub mod food_service;
pub mod invoice_service;
pub mod order_item_service;
pub mod order_service;
pub mod order_view;
pub mod pagination;
pub mod references;
