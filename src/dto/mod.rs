pub mod auth;
pub mod foods;
pub mod invoices;
pub mod order_items;
pub mod orders;
