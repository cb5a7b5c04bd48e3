//! Per-table cart
//!
//! One cart per table, keyed by table id, so two tables on the same
//! device never share pending selections. Every mutation overwrites the
//! persisted snapshot synchronously; a missing or corrupt snapshot
//! degrades to an empty cart instead of failing the session.
//!
//! The manager trusts its caller on availability: the surface only
//! offers the add control for available items, so no re-validation
//! happens here.

use crate::storage::BlobStorage;
use shared::models::MenuItem;
use shared::money;
use shared::order::{CartItem, OrderItemInput};
use std::sync::Arc;

/// Cart for a single table
pub struct CartManager {
    table_id: String,
    items: Vec<CartItem>,
    storage: Arc<dyn BlobStorage>,
}

fn storage_key(table_id: &str) -> String {
    format!("cart_{table_id}")
}

impl CartManager {
    /// Open the cart for a table, restoring any persisted snapshot
    pub fn open(table_id: impl Into<String>, storage: Arc<dyn BlobStorage>) -> Self {
        let table_id = table_id.into();
        let items = match storage.load(&storage_key(&table_id)) {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(
                        table_id = %table_id,
                        error = %e,
                        "Corrupt cart snapshot, starting empty"
                    );
                    Vec::new()
                }
            },
        };
        Self {
            table_id,
            items,
            storage,
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a menu item, merging into an existing entry
    pub fn add(&mut self, menu_item: MenuItem) {
        match self.items.iter().position(|i| i.menu_item.id == menu_item.id) {
            Some(idx) => self.items[idx].quantity += 1,
            None => self.items.push(CartItem::new(menu_item)),
        }
        self.persist();
    }

    /// Remove an entry; no-op if absent
    pub fn remove(&mut self, item_id: &str) {
        self.items.retain(|i| i.menu_item.id != item_id);
        self.persist();
    }

    /// Set an entry's quantity; `n <= 0` removes the entry
    pub fn set_quantity(&mut self, item_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove(item_id);
            return;
        }
        if let Some(entry) = self.items.iter_mut().find(|i| i.menu_item.id == item_id) {
            entry.quantity = quantity;
            self.persist();
        }
    }

    /// Replace an entry's note
    pub fn set_note(&mut self, item_id: &str, note: impl Into<String>) {
        if let Some(entry) = self.items.iter_mut().find(|i| i.menu_item.id == item_id) {
            entry.note = note.into();
            self.persist();
        }
    }

    /// Empty the cart (also called after successful order placement)
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of price × quantity, recomputed on every read
    pub fn total(&self) -> f64 {
        money::sum_lines(
            self.items
                .iter()
                .map(|i| (i.menu_item.price, i.quantity)),
        )
    }

    /// The cart contents as order-creation input lines
    pub fn to_order_inputs(&self) -> Vec<OrderItemInput> {
        self.items
            .iter()
            .map(|i| OrderItemInput {
                menu_item_id: i.menu_item.id.clone(),
                quantity: i.quantity,
                note: i.note.clone(),
            })
            .collect()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(blob) => self.storage.store(&storage_key(&self.table_id), &blob),
            Err(e) => {
                tracing::warn!(table_id = %self.table_id, error = %e, "Failed to serialize cart")
            }
        }
    }
}
