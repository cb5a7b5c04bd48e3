//! Collaborator interface consumed by the client workflow
//!
//! The device-side workflow talks to the restaurant backend only
//! through [`Backend`], so cart, session, and polling logic stay
//! independent of how the data is actually served. The server crate
//! provides the in-process implementation; a remote transport would
//! implement the same trait.

use crate::ServiceResult;
use crate::models::{MenuCategory, MenuFilter, MenuItem, Table, User};
use crate::order::{Order, OrderFilter, OrderItemInput, OrderStatus};
use async_trait::async_trait;

/// Restaurant backend as seen by the client workflow
///
/// Every call is async and may suspend the caller; each operation is
/// independently retryable.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> ServiceResult<User>;

    async fn list_menu_items(&self, filter: &MenuFilter) -> ServiceResult<Vec<MenuItem>>;
    async fn list_menu_categories(&self) -> ServiceResult<Vec<MenuCategory>>;

    async fn get_table_by_slug(&self, slug: &str) -> ServiceResult<Table>;
    async fn list_tables(&self) -> ServiceResult<Vec<Table>>;

    async fn create_order(
        &self,
        table_id: &str,
        items: Vec<OrderItemInput>,
    ) -> ServiceResult<Order>;
    async fn list_orders(&self, filter: &OrderFilter) -> ServiceResult<Vec<Order>>;
    async fn get_order(&self, id: &str) -> ServiceResult<Option<Order>>;
    async fn set_order_status(&self, id: &str, status: OrderStatus) -> ServiceResult<Order>;
}
