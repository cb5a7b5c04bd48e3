//! Order types and the status machine

pub mod status;
pub mod types;

// Re-exports
pub use status::OrderStatus;
pub use types::{CartItem, Order, OrderFilter, OrderItem, OrderItemInput};
