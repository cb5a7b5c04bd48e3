//! Menu catalog
//!
//! Read-only reference data for the ordering core. Menu management is
//! an external concern; the catalog only answers lookups.

use shared::ServiceError;
use shared::models::{MenuCategory, MenuFilter, MenuItem};

/// Read-only menu catalog
#[derive(Debug)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    categories: Vec<MenuCategory>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>, categories: Vec<MenuCategory>) -> Self {
        Self { items, categories }
    }

    /// List items matching the filter
    pub fn list_items(&self, filter: &MenuFilter) -> Vec<MenuItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// List categories sorted by display order
    pub fn list_categories(&self) -> Vec<MenuCategory> {
        let mut categories = self.categories.clone();
        categories.sort_by_key(|c| c.display_order);
        categories
    }

    /// Look up a single item by id
    pub fn get_item(&self, id: &str) -> Result<MenuItem, ServiceError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::ItemNotFound(id.to_string()))
    }
}
