//! In-process implementation of the collaborator interface
//!
//! Serves [`shared::client::Backend`] from the local stores. The
//! client workflow never sees these stores directly; it only talks to
//! the trait.

use crate::auth::CredentialStore;
use crate::catalog::MenuCatalog;
use crate::orders::OrderStore;
use crate::tables::TableDirectory;
use async_trait::async_trait;
use shared::ServiceResult;
use shared::client::Backend;
use shared::models::{MenuCategory, MenuFilter, MenuItem, Table, User};
use shared::order::{Order, OrderFilter, OrderItemInput, OrderStatus};
use std::sync::Arc;

/// Backend served from in-process stores
pub struct LocalBackend {
    auth: CredentialStore,
    catalog: Arc<MenuCatalog>,
    tables: Arc<TableDirectory>,
    orders: Arc<OrderStore>,
}

impl LocalBackend {
    pub fn new(
        auth: CredentialStore,
        catalog: Arc<MenuCatalog>,
        tables: Arc<TableDirectory>,
        orders: Arc<OrderStore>,
    ) -> Self {
        Self {
            auth,
            catalog,
            tables,
            orders,
        }
    }

    /// Backend over the seeded demo dataset, with empty order history
    pub fn seeded() -> Self {
        let catalog = Arc::new(MenuCatalog::new(
            crate::seed::menu_items(),
            crate::seed::categories(),
        ));
        let tables = Arc::new(TableDirectory::new(crate::seed::tables()));
        let orders = Arc::new(OrderStore::new(Arc::clone(&catalog), Arc::clone(&tables)));
        Self::new(
            CredentialStore::new(crate::seed::users()),
            catalog,
            tables,
            orders,
        )
    }

    /// Direct handle to the order store
    ///
    /// Lets another in-process actor (the kitchen side in the demo and
    /// tests) append or advance orders out of band; the changes are
    /// picked up by the next poll through this backend.
    pub fn order_store(&self) -> Arc<OrderStore> {
        Arc::clone(&self.orders)
    }
}

#[async_trait]
impl Backend for LocalBackend {
    async fn login(&self, email: &str, password: &str) -> ServiceResult<User> {
        self.auth.login(email, password)
    }

    async fn list_menu_items(&self, filter: &MenuFilter) -> ServiceResult<Vec<MenuItem>> {
        Ok(self.catalog.list_items(filter))
    }

    async fn list_menu_categories(&self) -> ServiceResult<Vec<MenuCategory>> {
        Ok(self.catalog.list_categories())
    }

    async fn get_table_by_slug(&self, slug: &str) -> ServiceResult<Table> {
        self.tables.get_by_slug(slug)
    }

    async fn list_tables(&self) -> ServiceResult<Vec<Table>> {
        Ok(self.tables.list())
    }

    async fn create_order(
        &self,
        table_id: &str,
        items: Vec<OrderItemInput>,
    ) -> ServiceResult<Order> {
        self.orders.create(table_id, items)
    }

    async fn list_orders(&self, filter: &OrderFilter) -> ServiceResult<Vec<Order>> {
        Ok(self.orders.list(filter))
    }

    async fn get_order(&self, id: &str) -> ServiceResult<Option<Order>> {
        Ok(self.orders.get(id))
    }

    async fn set_order_status(&self, id: &str, status: OrderStatus) -> ServiceResult<Order> {
        self.orders.update_status(id, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ServiceError;

    #[tokio::test]
    async fn seeded_backend_serves_the_demo_dataset() {
        let backend = LocalBackend::seeded();

        let tables = backend.list_tables().await.unwrap();
        assert_eq!(tables.len(), 6);

        let items = backend.list_menu_items(&MenuFilter::default()).await.unwrap();
        assert_eq!(items.len(), 9);
        assert_eq!(items.iter().filter(|i| !i.availability).count(), 1);

        let categories = backend.list_menu_categories().await.unwrap();
        assert_eq!(categories.len(), 4);
    }

    #[tokio::test]
    async fn get_order_distinguishes_missing_from_failure() {
        let backend = LocalBackend::seeded();
        assert_eq!(backend.get_order("order_unknown").await.unwrap(), None);
    }

    #[tokio::test]
    async fn login_round_trip() {
        let backend = LocalBackend::seeded();
        let user = backend.login("admin@example.com", "password").await.unwrap();
        assert_eq!(user.name, "Admin Ali");

        let err = backend.login("admin@example.com", "nope").await.unwrap_err();
        assert_eq!(err, ServiceError::InvalidCredentials);
    }
}
