//! Order status machine
//!
//! The kitchen pipeline is a fixed chain with a staff correction edge
//! for every forward edge:
//!
//! ```text
//! Placed <-> Preparing <-> Ready <-> Served
//!    \          |           /
//!     `-------> Canceled <-'
//! ```
//!
//! Canceled is reachable from every non-terminal status and has no
//! outgoing edges. Served can only be walked back to Ready; it cannot
//! be canceled. Any transition outside this table is rejected with
//! [`ServiceError::InvalidTransition`] and must leave the order
//! untouched.

use crate::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status in the kitchen pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Preparing,
    Ready,
    Served,
    Canceled,
}

impl OrderStatus {
    /// Display label for the status column headers
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Served => "Served",
            OrderStatus::Canceled => "Canceled",
        }
    }

    /// The single allowed forward target, if any
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Served),
            OrderStatus::Served | OrderStatus::Canceled => None,
        }
    }

    /// The single allowed backward target (staff correction), if any
    pub fn prev(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed | OrderStatus::Canceled => None,
            OrderStatus::Preparing => Some(OrderStatus::Placed),
            OrderStatus::Ready => Some(OrderStatus::Preparing),
            OrderStatus::Served => Some(OrderStatus::Ready),
        }
    }

    /// Whether the order can still be canceled from this status
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Preparing | OrderStatus::Ready
        )
    }

    /// Whether no transition at all leaves this status
    pub fn is_terminal(&self) -> bool {
        // Served still has the Served -> Ready correction edge;
        // only Canceled has no outgoing edges.
        *self == OrderStatus::Canceled
    }

    /// Whether `self -> to` is a legal edge
    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        if to == OrderStatus::Canceled {
            return self.can_cancel();
        }
        self.next() == Some(to) || self.prev() == Some(to)
    }

    /// Validate a requested transition, erring outside the table
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> ServiceResult<()> {
        if from.can_transition_to(to) {
            Ok(())
        } else {
            Err(ServiceError::InvalidTransition { from, to })
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
