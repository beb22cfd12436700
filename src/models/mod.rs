pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;

pub use customer::Customer;
pub use order::Order;
pub use order_item::OrderItem;
pub use product::Product;
