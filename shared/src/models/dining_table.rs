//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
///
/// Immutable once created. `qr_slug` is the unguessable public token
/// embedded in the customer-facing link; tables are looked up by slug
/// with an exact, case-sensitive match and are never mutated by the
/// ordering core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub id: String,
    pub number: i32,
    pub qr_slug: String,
}
