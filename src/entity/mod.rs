pub mod foods;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;
pub mod users;

pub use foods::Entity as Foods;
pub use invoices::Entity as Invoices;
pub use menus::Entity as Menus;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use tables::Entity as Tables;
pub use users::Entity as Users;
