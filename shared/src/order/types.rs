//! Order entity and request/filter types

use super::status::OrderStatus;
use crate::models::MenuItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cart entry - a menu item with a pending quantity and note
///
/// One cart per table; no two entries share the same underlying menu
/// item id (adds merge into the existing entry's quantity instead).
/// The flattened layout matches the persisted blob shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub menu_item: MenuItem,
    pub quantity: i32,
    pub note: String,
}

impl CartItem {
    /// New entry with quantity 1 and an empty note
    pub fn new(menu_item: MenuItem) -> Self {
        Self {
            menu_item,
            quantity: 1,
            note: String::new(),
        }
    }
}

/// Order line item - immutable snapshot taken at order-creation time
///
/// Name and price are copied from the menu item when the order is
/// placed, so later menu edits never retroactively change a placed
/// order's recorded price or name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub note: String,
}

/// A placed order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub table_id: String,
    pub table_number: i32,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Computed from the item snapshots at creation, never recomputed
    /// from live menu data.
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// Line item of an order-creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item_id: String,
    pub quantity: i32,
    pub note: String,
}

/// Filter for order listing
///
/// Storage order is not guaranteed; consumers that need recency must
/// sort by `created_at` themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub table_id: Option<String>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }
        if let Some(table_id) = &self.table_id
            && order.table_id != *table_id
        {
            return false;
        }
        true
    }
}
