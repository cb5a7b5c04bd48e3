//! Data models
//!
//! Shared between the server-side stores and the client workflow.
//! All IDs are opaque `String`s.

pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod user;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use menu_item::*;
pub use user::*;
