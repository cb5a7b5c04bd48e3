//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Owned by the menu catalog; the ordering core treats it as read-only
/// reference data. `availability` gates whether the item can be added
/// to a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: String,
    pub image_url: String,
    pub availability: bool,
    pub tags: Vec<String>,
}

/// Filter for menu item listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuFilter {
    /// Case-insensitive substring match on the item name
    pub search: Option<String>,
    pub category_id: Option<String>,
}

impl MenuFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        if let Some(search) = &self.search
            && !item.name.to_lowercase().contains(&search.to_lowercase())
        {
            return false;
        }
        if let Some(category_id) = &self.category_id
            && item.category_id != *category_id
        {
            return false;
        }
        true
    }
}
