//! Shared types for the Comanda table-ordering workflow
//!
//! Common types used across the server and client crates: data models,
//! the order status machine, money helpers, and the error taxonomy.

pub mod client;
pub mod error;
pub mod models;
pub mod money;
pub mod order;

// Re-exports
pub use client::Backend;
pub use error::{ServiceError, ServiceResult};
pub use serde::{Deserialize, Serialize};
