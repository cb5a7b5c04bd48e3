//! Error taxonomy for the ordering workflow
//!
//! Every fallible operation across the server and client crates returns
//! one of these variants. Critical-path failures (table resolution,
//! order placement, login) are surfaced to the caller as-is; background
//! polling failures are logged by the pollers and retried on the next
//! tick instead of propagating.

use crate::order::OrderStatus;
use thiserror::Error;

/// Workflow errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid table: no table matches slug '{0}'")]
    InvalidTable(String),

    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("menu item not found: {0}")]
    ItemNotFound(String),

    #[error("order must contain at least one item")]
    EmptyOrder,

    #[error("order not found: {0}")]
    OrderNotFound(String),

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("network failure: {0}")]
    Network(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
